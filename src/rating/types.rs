use serde::Serialize;

use crate::domain::Player;

pub type PlayerId = String;
pub type RatingValue = f64;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub player: Player,
    pub rating: RatingValue,
    pub wins: u32,
    pub losses: u32,
}

impl RankingEntry {
    pub fn seeded(player: Player, rating: RatingValue) -> Self {
        Self {
            player,
            rating,
            wins: 0,
            losses: 0,
        }
    }
}
