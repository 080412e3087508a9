#[derive(Debug, Clone, PartialEq)]
pub struct RankingSettings {
    pub base_rating: f64,
    pub win_delta: f64,
    pub loss_delta: f64,
    pub rating_floor: f64,
    pub podium_size: usize,
    pub recent_matches: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            base_rating: 1000.0,
            win_delta: 15.0,
            loss_delta: 10.0,
            rating_floor: 500.0,
            podium_size: 3,
            recent_matches: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceSettings {
    /// Local directory or http(s) base URL holding the data files
    pub location: String,
    pub players_file: String,
    pub leaderboard_file: String,
    pub feed_file: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            location: "public".to_string(),
            players_file: "players.csv".to_string(),
            leaderboard_file: "leaderboard.csv".to_string(),
            feed_file: "ig.json".to_string(),
            user_agent: "PozoRanking/1.0".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteSettings {
    /// Prefix for relative photo and feed image paths
    pub public_base_url: String,
    pub profile_base_url: String,
    pub default_player_name: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            public_base_url: "/".to_string(),
            profile_base_url: "https://instagram.com".to_string(),
            default_player_name: "Player".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub ranking: RankingSettings,
    pub source: SourceSettings,
    pub site: SiteSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            ranking: RankingSettings::default(),
            source: SourceSettings::default(),
            site: SiteSettings::default(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup on top of the defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(location) = lookup("POZO_DATA_SOURCE").filter(|v| !v.trim().is_empty()) {
            config.source.location = location.trim().to_string();
        }
        if let Some(base) = lookup("POZO_PUBLIC_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.site.public_base_url = base.trim().to_string();
        }
        match lookup("POZO_HTTP_TIMEOUT_SECS").map(|v| v.trim().parse::<u64>()) {
            Some(Ok(secs)) => config.source.timeout_secs = secs,
            Some(Err(_)) => log::warn!("Ignoring invalid POZO_HTTP_TIMEOUT_SECS"),
            None => {}
        }

        config
    }

    pub fn with_location(mut self, location: Option<&str>) -> Self {
        if let Some(location) = location {
            self.source.location = location.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_match_canonical_rules() {
        let config = AppConfig::new();
        assert_eq!(config.ranking.base_rating, 1000.0);
        assert_eq!(config.ranking.win_delta, 15.0);
        assert_eq!(config.ranking.loss_delta, 10.0);
        assert_eq!(config.ranking.rating_floor, 500.0);
        assert_eq!(config.source.players_file, "players.csv");
    }

    #[test]
    fn test_lookup_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("POZO_DATA_SOURCE", "https://example.com/data"),
            ("POZO_PUBLIC_BASE_URL", "https://example.com/"),
            ("POZO_HTTP_TIMEOUT_SECS", "5"),
        ]);
        let config = AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.source.location, "https://example.com/data");
        assert_eq!(config.site.public_base_url, "https://example.com/");
        assert_eq!(config.source.timeout_secs, 5);
    }

    #[test]
    fn test_invalid_timeout_keeps_default() {
        let config = AppConfig::from_lookup(|key| {
            (key == "POZO_HTTP_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert_eq!(config.source.timeout_secs, 30);
    }

    #[test]
    fn test_cli_location_wins() {
        let config = AppConfig::new().with_location(Some("/srv/pozo"));
        assert_eq!(config.source.location, "/srv/pozo");
    }
}
