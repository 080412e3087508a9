use serde::Serialize;

use crate::domain::FeedItem;
use crate::rating::RankingEntry;
use crate::services::site::{resolve_asset, PlayerCard};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRow {
    pub position: usize,
    pub player_id: String,
    pub name: String,
    pub level: String,
    pub club: Option<String>,
    pub photo_url: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub rating: f64,
}

impl RankingRow {
    pub fn from_entry(position: usize, entry: &RankingEntry, public_base_url: &str) -> Self {
        Self {
            position,
            player_id: entry.player.id.clone(),
            name: entry.player.name.clone(),
            level: entry.player.level.clone(),
            club: entry.player.club.clone(),
            photo_url: entry
                .player
                .photo
                .as_deref()
                .and_then(|photo| resolve_asset(public_base_url, photo)),
            wins: entry.wins,
            losses: entry.losses,
            rating: entry.rating,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerListResponse {
    pub items: Vec<PlayerCard>,
    pub total: usize,
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub visible: bool,
    pub items: Vec<FeedItem>,
}
