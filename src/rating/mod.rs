pub mod matches;
pub mod standings;
pub mod types;

pub use matches::rank_from_matches;
pub use standings::rank_from_standings;
pub use types::{PlayerId, RankingEntry, RatingValue};

use crate::config::RankingSettings;
use crate::domain::{Leaderboard, Player};

pub fn rank(players: &[Player], leaderboard: &Leaderboard, config: &RankingSettings) -> Vec<RankingEntry> {
    match leaderboard {
        Leaderboard::Matches(matches) => rank_from_matches(players, matches, config),
        Leaderboard::Standings(rows) => rank_from_standings(players, rows),
    }
}

/// Descending by rating; `sort_by` is stable so ties keep input order
pub fn sort_ranking(entries: &mut [RankingEntry]) {
    entries.sort_by(|a, b| b.rating.total_cmp(&a.rating));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchRecord, StandingRow};

    #[test]
    fn test_dispatch_on_leaderboard_kind() {
        let players = vec![
            Player::synthetic("1", "Ana", None, None),
            Player::synthetic("2", "Luis", None, None),
        ];
        let config = RankingSettings::default();

        let log = Leaderboard::Matches(vec![MatchRecord {
            id: "m1".to_string(),
            date: "2024-06-01".to_string(),
            p1: "1".to_string(),
            p2: "2".to_string(),
            score: "6-3 6-4".to_string(),
            winner: "2".to_string(),
            round: None,
        }]);
        let ranking = rank(&players, &log, &config);
        assert_eq!(ranking[0].player.id, "2");
        assert_eq!(ranking[0].rating, 1015.0);

        let standings = Leaderboard::Standings(vec![StandingRow {
            id: "1".to_string(),
            name: "Ana".to_string(),
            points: 30.0,
            wins: 10,
            losses: 0,
            ig: None,
            photo: None,
        }]);
        let ranking = rank(&players, &standings, &config);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].rating, 30.0);
    }
}
