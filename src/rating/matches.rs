use std::collections::HashMap;
use log::{debug, info};

use super::sort_ranking;
use super::types::{PlayerId, RankingEntry};
use crate::config::RankingSettings;
use crate::domain::{MatchRecord, Player};

/// Replays the match log over the player list.
/// `matches` are newest-first, so they are walked in reverse.
pub fn rank_from_matches(
    players: &[Player],
    matches: &[MatchRecord],
    config: &RankingSettings,
) -> Vec<RankingEntry> {
    let (mut entries, index) = seed_entries(players, config);

    let mut counted = 0;
    for game in matches.iter().rev() {
        if apply_match(&mut entries, &index, game, config) {
            counted += 1;
        }
    }
    info!("Replayed {} of {} matches for {} players", counted, matches.len(), entries.len());

    sort_ranking(&mut entries);
    entries
}

/// Duplicate ids: the later row replaces the earlier one in its original slot
fn seed_entries(
    players: &[Player],
    config: &RankingSettings,
) -> (Vec<RankingEntry>, HashMap<PlayerId, usize>) {
    let mut entries: Vec<RankingEntry> = Vec::with_capacity(players.len());
    let mut index: HashMap<PlayerId, usize> = HashMap::new();

    for player in players {
        let rating = player.rating.unwrap_or(config.base_rating);
        let entry = RankingEntry::seeded(player.clone(), rating);

        match index.get(&player.id) {
            Some(&slot) => {
                debug!("Duplicate player id '{}', keeping the later row", player.id);
                entries[slot] = entry;
            }
            None => {
                index.insert(player.id.clone(), entries.len());
                entries.push(entry);
            }
        }
    }

    (entries, index)
}

fn apply_match(
    entries: &mut [RankingEntry],
    index: &HashMap<PlayerId, usize>,
    game: &MatchRecord,
    config: &RankingSettings,
) -> bool {
    let (Some(&a), Some(&b)) = (index.get(&game.p1), index.get(&game.p2)) else {
        debug!("Skipping match {}: unknown player", game.id);
        return false;
    };
    let Some(loser_id) = game.loser() else {
        debug!("Skipping match {}: winner '{}' not in match", game.id, game.winner);
        return false;
    };
    let (winner, loser) = if loser_id == game.p2 { (a, b) } else { (b, a) };

    // winner == loser when one id sits on both sides: the entry takes the win and then the loss

    let w = &mut entries[winner];
    w.wins += 1;
    w.rating += config.win_delta;

    let l = &mut entries[loser];
    l.losses += 1;
    l.rating = (l.rating - config.loss_delta).max(config.rating_floor);

    true
}
