use std::collections::HashMap;
use log::info;

use super::sort_ranking;
use super::types::RankingEntry;
use crate::domain::{Player, StandingRow};

/// Precomputed standings: points are the rating, no replay
pub fn rank_from_standings(players: &[Player], rows: &[StandingRow]) -> Vec<RankingEntry> {
    let by_id: HashMap<&str, &Player> = players.iter().map(|p| (p.id.as_str(), p)).collect();

    let mut synthetic = 0;
    let mut entries: Vec<RankingEntry> = rows
        .iter()
        .map(|row| {
            let player = match by_id.get(row.id.as_str()) {
                Some(&known) => known.clone(),
                None => {
                    synthetic += 1;
                    Player::synthetic(&row.id, &row.name, row.ig.clone(), row.photo.clone())
                }
            };
            RankingEntry {
                player,
                rating: row.points,
                wins: row.wins,
                losses: row.losses,
            }
        })
        .collect();

    info!("Loaded {} standings rows ({} without player entry)", entries.len(), synthetic);

    sort_ranking(&mut entries);
    entries
}
