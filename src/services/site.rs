use serde::Serialize;

use super::loader::SiteSnapshot;
use crate::config::AppConfig;
use crate::domain::{FeedItem, MatchRecord, Player};
use crate::rating::{self, RankingEntry};

/// Everything the site shows, derived from one snapshot
#[derive(Debug, Clone)]
pub struct SiteView {
    pub ranking: Vec<RankingEntry>,
    pub directory: Vec<PlayerCard>,
    pub feed: Vec<FeedItem>,
    podium_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCard {
    pub player: Player,
    pub photo_url: Option<String>,
    pub profile_url: Option<String>,
    pub recent: Vec<RecentMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentMatch {
    pub match_id: String,
    pub opponent: String,
    pub score: String,
    pub won: bool,
}

impl SiteView {
    pub fn build(snapshot: &SiteSnapshot, config: &AppConfig) -> Self {
        let ranking = rating::rank(&snapshot.players, &snapshot.leaderboard, &config.ranking);
        let matches = snapshot.leaderboard.matches();

        let directory = snapshot
            .players
            .iter()
            .map(|player| build_card(player, matches, config))
            .collect();

        let feed = snapshot
            .feed
            .iter()
            .map(|item| resolve_feed_item(item, &config.site.public_base_url))
            .collect();

        Self {
            ranking,
            directory,
            feed,
            podium_size: config.ranking.podium_size,
        }
    }

    pub fn podium(&self) -> &[RankingEntry] {
        let n = self.podium_size.min(self.ranking.len());
        &self.ranking[..n]
    }

    /// Case-insensitive substring match on name, level and club
    pub fn search(&self, query: &str) -> Vec<&PlayerCard> {
        let needle = normalize_query(query);
        self.directory
            .iter()
            .filter(|card| matches_query(&card.player, &needle))
            .collect()
    }

    /// An empty feed hides the section
    pub fn feed_visible(&self) -> bool {
        !self.feed.is_empty()
    }
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

fn matches_query(player: &Player, needle: &str) -> bool {
    needle.is_empty()
        || player.name.to_lowercase().contains(needle)
        || player.level.to_lowercase().contains(needle)
        || player
            .club
            .as_deref()
            .is_some_and(|club| club.to_lowercase().contains(needle))
}

/// Absolute http(s) URLs pass through, other paths hang off the public base
pub fn resolve_asset(base: &str, path: &str) -> Option<String> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }

    let lower = path.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return Some(path.to_string());
    }

    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    Some(format!("{}/{}", base, path))
}

pub fn profile_link(profile_base: &str, handle: &str) -> Option<String> {
    let handle = handle.trim();
    let handle = handle.strip_prefix('@').unwrap_or(handle).trim();
    if handle.is_empty() {
        return None;
    }
    Some(format!(
        "{}/{}",
        profile_base.trim_end_matches('/'),
        urlencoding::encode(handle)
    ))
}

fn build_card(player: &Player, matches: &[MatchRecord], config: &AppConfig) -> PlayerCard {
    let recent = matches
        .iter()
        .filter(|m| m.involves(&player.id))
        .take(config.ranking.recent_matches)
        .map(|m| RecentMatch {
            match_id: m.id.clone(),
            opponent: m.opponent_of(&player.id).unwrap_or_default().to_string(),
            score: m.score.clone(),
            won: m.winner == player.id,
        })
        .collect();

    PlayerCard {
        player: player.clone(),
        photo_url: player
            .photo
            .as_deref()
            .and_then(|photo| resolve_asset(&config.site.public_base_url, photo)),
        profile_url: player
            .ig
            .as_deref()
            .and_then(|ig| profile_link(&config.site.profile_base_url, ig)),
        recent,
    }
}

fn resolve_feed_item(item: &FeedItem, base: &str) -> FeedItem {
    match item {
        FeedItem::Image { src, href, alt } => FeedItem::Image {
            src: resolve_asset(base, src).unwrap_or_else(|| src.clone()),
            href: href.clone(),
            alt: alt.clone(),
        },
        post @ FeedItem::Post { .. } => post.clone(),
    }
}
