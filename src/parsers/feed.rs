use anyhow::{Context, Result};
use log::debug;
use regex::Regex;
use serde_json::{Map, Value};

use crate::domain::FeedItem;

/// Turns the loosely shaped social feed list into display items
pub struct FeedNormalizer {
    post_link_regex: Regex,
}

impl FeedNormalizer {
    pub fn new() -> Result<Self> {
        let post_link_regex = Self::compile_regex()?;
        Ok(Self { post_link_regex })
    }

    pub fn parse(&self, text: &str) -> Result<Vec<FeedItem>> {
        let value: Value = serde_json::from_str(text).context("Failed to parse social feed JSON")?;
        Ok(self.normalize(&value))
    }

    /// Malformed entries are dropped; a non-array document yields nothing
    pub fn normalize(&self, value: &Value) -> Vec<FeedItem> {
        let Some(entries) = value.as_array() else {
            debug!("Social feed is not a JSON array");
            return Vec::new();
        };

        entries
            .iter()
            .filter_map(|entry| self.normalize_entry(entry))
            .collect()
    }

    pub fn is_post_link(&self, candidate: &str) -> bool {
        self.post_link_regex.is_match(candidate)
    }

    fn compile_regex() -> Result<Regex> {
        Regex::new(r"(?i)^https?://([a-z0-9-]+\.)*instagram\.com(/|$)")
            .context("Failed to compile post link regex")
    }

    fn normalize_entry(&self, entry: &Value) -> Option<FeedItem> {
        match entry {
            Value::String(s) => self.string_entry(s),
            Value::Object(map) => Self::object_entry(map),
            other => {
                debug!("Dropping feed entry of unsupported type: {}", other);
                None
            }
        }
    }

    fn string_entry(&self, raw: &str) -> Option<FeedItem> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if self.is_post_link(raw) {
            Some(FeedItem::Post {
                href: raw.to_string(),
            })
        } else {
            Some(FeedItem::Image {
                src: raw.to_string(),
                href: None,
                alt: None,
            })
        }
    }

    fn object_entry(map: &Map<String, Value>) -> Option<FeedItem> {
        let Some(src) = string_field(map, "img") else {
            debug!("Dropping feed entry without image");
            return None;
        };

        Some(FeedItem::Image {
            src,
            href: string_field(map, "href"),
            alt: string_field(map, "alt"),
        })
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
