use anyhow::Result;
use log::{info, warn};

use crate::config::AppConfig;
use crate::domain::{FeedItem, Leaderboard, Player};
use crate::fetchers::ResourceFetcher;
use crate::parsers::{self, FeedNormalizer};

/// Latest loaded data; each part loads independently
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteSnapshot {
    pub players: Vec<Player>,
    pub leaderboard: Leaderboard,
    pub feed: Vec<FeedItem>,
}

pub struct SiteLoader {
    config: AppConfig,
    fetcher: ResourceFetcher,
    normalizer: FeedNormalizer,
}

impl SiteLoader {
    pub fn new(config: AppConfig) -> Result<Self> {
        Ok(Self {
            fetcher: ResourceFetcher::new(&config.source)?,
            normalizer: FeedNormalizer::new()?,
            config,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Never fails: a dataset that cannot be loaded comes back empty
    pub async fn load(&self) -> SiteSnapshot {
        let (players, leaderboard, feed) =
            tokio::join!(self.load_players(), self.load_leaderboard(), self.load_feed());

        let snapshot = SiteSnapshot {
            players: degrade(players, &self.config.source.players_file),
            leaderboard: degrade(leaderboard, &self.config.source.leaderboard_file),
            feed: degrade(feed, &self.config.source.feed_file),
        };

        info!(
            "Loaded {} players, {} leaderboard rows, {} feed items",
            snapshot.players.len(),
            snapshot.leaderboard.len(),
            snapshot.feed.len()
        );
        snapshot
    }

    async fn load_players(&self) -> Result<Vec<Player>> {
        let text = self.fetcher.fetch_text(&self.config.source.players_file).await?;
        let table = parsers::parse_table(&text);
        Ok(parsers::parse_players(&table, &self.config.site.default_player_name))
    }

    async fn load_leaderboard(&self) -> Result<Leaderboard> {
        let text = self.fetcher.fetch_text(&self.config.source.leaderboard_file).await?;
        let table = parsers::parse_table(&text);
        Ok(parsers::parse_leaderboard(&table))
    }

    async fn load_feed(&self) -> Result<Vec<FeedItem>> {
        let text = self.fetcher.fetch_text(&self.config.source.feed_file).await?;
        self.normalizer.parse(&text)
    }
}

fn degrade<T: Default>(result: Result<T>, name: &str) -> T {
    result.unwrap_or_else(|e| {
        warn!("Could not load {}, using empty data: {:#}", name, e);
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture_dir(name: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pozo_ranking_loader_{name}"));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        for (file, content) in files {
            std::fs::write(dir.join(file), content).unwrap();
        }
        dir
    }

    fn loader_for(location: &str) -> SiteLoader {
        let config = AppConfig::new().with_location(Some(location));
        SiteLoader::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_loads_all_three_files() {
        let dir = fixture_dir(
            "all",
            &[
                ("players.csv", "id,name,level\n1,Ana,4\n2,Luis,3\n"),
                ("leaderboard.csv", "id,date,p1,p2,score,winner\nm1,2024-05-01,1,2,6-4,1\n"),
                ("ig.json", r#"["ig/1.jpg", {"img": "ig/2.jpg", "alt": "Final"}]"#),
            ],
        );

        let snapshot = loader_for(dir.to_str().unwrap()).load().await;

        assert_eq!(snapshot.players.len(), 2);
        assert_eq!(snapshot.leaderboard.matches().len(), 1);
        assert_eq!(snapshot.feed.len(), 2);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_failures_degrade_independently() {
        let dir = fixture_dir(
            "partial",
            &[
                ("players.csv", "id,name\n1,Ana\n"),
                ("ig.json", "{ not json"),
            ],
        );

        let snapshot = loader_for(dir.to_str().unwrap()).load().await;

        assert_eq!(snapshot.players.len(), 1);
        assert!(snapshot.leaderboard.is_empty());
        assert!(snapshot.feed.is_empty());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_missing_source_is_empty_snapshot() {
        let dir = std::env::temp_dir().join("pozo_ranking_loader_does_not_exist");
        let snapshot = loader_for(dir.to_str().unwrap()).load().await;
        assert_eq!(snapshot, SiteSnapshot::default());
    }

    #[tokio::test]
    async fn test_remote_source_with_errors() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/players.csv")
            .with_status(200)
            .with_body("\u{feff}id,name\r\n1,Ana\r\n\r\n")
            .create_async()
            .await;
        server
            .mock("GET", "/leaderboard.csv")
            .with_status(500)
            .create_async()
            .await;
        server
            .mock("GET", "/ig.json")
            .with_status(200)
            .with_body(r#"["https://www.instagram.com/p/abc/"]"#)
            .create_async()
            .await;

        let snapshot = loader_for(&server.url()).load().await;

        assert_eq!(snapshot.players.len(), 1);
        assert_eq!(snapshot.players[0].name, "Ana");
        assert!(snapshot.leaderboard.is_empty());
        assert_eq!(snapshot.feed.len(), 1);
    }
}
