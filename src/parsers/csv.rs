use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};
use std::collections::HashMap;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Header-aligned table parsed from comma-separated text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    records: Vec<Record>,
}

/// One data line keyed by header name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Table {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Record {
    /// Field value, or "" when the column is absent
    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn non_empty(&self, name: &str) -> Option<&str> {
        Some(self.get(name)).filter(|v| !v.is_empty())
    }

    pub fn owned(&self, name: &str) -> Option<String> {
        self.non_empty(name).map(str::to_string)
    }
}

/// Parse simple CSV: no quoting, no escaping, first non-blank line is the header.
pub fn parse_table(text: &str) -> Table {
    let text = text.trim_start_matches(BYTE_ORDER_MARK);
    let content = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    let mut reader = ReaderBuilder::new()
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = match reader.headers() {
        Ok(row) => row.iter().map(str::to_string).collect(),
        Err(e) => {
            warn!("Unreadable header row: {}", e);
            return Table::default();
        }
    };
    if headers.is_empty() {
        return Table::default();
    }

    let mut records = Vec::new();
    for row in reader.records() {
        match row {
            Ok(row) => records.push(build_record(&headers, &row)),
            Err(e) => debug!("Skipping unreadable row: {}", e),
        }
    }

    Table { headers, records }
}

/// Missing trailing fields become "", surplus fields are dropped
fn build_record(headers: &[String], row: &StringRecord) -> Record {
    let fields = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| (header.clone(), row.get(idx).unwrap_or("").to_string()))
        .collect();
    Record { fields }
}
