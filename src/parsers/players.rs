use log::debug;

use super::csv::Table;
use crate::domain::Player;

pub fn parse_players(table: &Table, default_name: &str) -> Vec<Player> {
    table
        .records()
        .iter()
        .enumerate()
        .map(|(idx, record)| Player {
            id: record
                .owned("id")
                .unwrap_or_else(|| (idx + 1).to_string()),
            name: record
                .owned("name")
                .unwrap_or_else(|| default_name.to_string()),
            level: record.get("level").to_string(),
            club: record.owned("club"),
            ig: record.owned("ig"),
            photo: record.owned("photo"),
            rating: parse_rating(record.get("rating")),
        })
        .collect()
}

fn parse_rating(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            debug!("Ignoring unparseable rating '{}'", raw);
            None
        }
    }
}
