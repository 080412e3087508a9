use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;

use crate::config::SourceSettings;
use crate::http::HttpClient;

/// Where the published data files live
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Local(PathBuf),
    Remote(String),
}

impl DataSource {
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Remote(location.trim_end_matches('/').to_string())
        } else {
            DataSource::Local(PathBuf::from(location))
        }
    }

    pub fn describe(&self, name: &str) -> String {
        match self {
            DataSource::Local(dir) => dir.join(name).display().to_string(),
            DataSource::Remote(base) => format!("{}/{}", base, name),
        }
    }
}

/// One-shot reader for a named data file, no retries
pub struct ResourceFetcher {
    source: DataSource,
    client: Option<HttpClient>,
}

impl ResourceFetcher {
    pub fn new(settings: &SourceSettings) -> Result<Self> {
        let source = DataSource::parse(&settings.location);
        let client = match source {
            DataSource::Remote(_) => Some(HttpClient::new(&settings.user_agent, settings.timeout_secs)?),
            DataSource::Local(_) => None,
        };
        Ok(Self { source, client })
    }

    pub async fn fetch_text(&self, name: &str) -> Result<String> {
        let location = self.source.describe(name);
        debug!("Fetching {}", location);

        match (&self.source, &self.client) {
            (DataSource::Local(dir), _) => tokio::fs::read_to_string(dir.join(name))
                .await
                .with_context(|| format!("Failed to read {}", location)),
            (DataSource::Remote(_), Some(client)) => client.get_text(&location).await,
            (DataSource::Remote(_), None) => anyhow::bail!("No HTTP client for {}", location),
        }
    }
}
