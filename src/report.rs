use colored::Colorize;
use std::fmt::Write;

use crate::domain::FeedItem;
use crate::rating::RankingEntry;
use crate::services::site::PlayerCard;

pub fn render_ranking(entries: &[RankingEntry], podium_size: usize) -> String {
    if entries.is_empty() {
        return "No ranking data".dimmed().to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        format!(
            "{:>4}  {:<24} {:<8} {:<16} {:>4} {:>6} {:>8}",
            "Pos", "Player", "Level", "Club", "W", "L", "Rating"
        )
        .bold()
    );

    for (idx, entry) in entries.iter().enumerate() {
        let line = format!(
            "{:>4}  {:<24} {:<8} {:<16} {:>4} {:>6} {:>8}",
            idx + 1,
            entry.player.name,
            entry.player.level,
            entry.player.club.as_deref().unwrap_or("-"),
            entry.wins,
            entry.losses,
            format_rating(entry.rating),
        );
        if idx < podium_size {
            let _ = writeln!(out, "{}", line.yellow().bold());
        } else {
            let _ = writeln!(out, "{}", line);
        }
    }
    out
}

pub fn render_players(cards: &[&PlayerCard]) -> String {
    if cards.is_empty() {
        return "No players found".dimmed().to_string();
    }

    let mut out = String::new();
    for card in cards {
        let player = &card.player;
        let _ = write!(out, "{} ", player.name.bold());
        let _ = write!(out, "[{}]", player.id);
        if !player.level.is_empty() {
            let _ = write!(out, " {}", player.level);
        }
        if let Some(club) = &player.club {
            let _ = write!(out, " · {}", club);
        }
        if let Some(link) = &card.profile_url {
            let _ = write!(out, " {}", link.cyan());
        }
        out.push('\n');

        if card.recent.is_empty() {
            let _ = writeln!(out, "    {}", "no matches".dimmed());
        }
        for recent in &card.recent {
            let mark = if recent.won { "W".green() } else { "L".red() };
            let _ = writeln!(out, "    {} vs {} · {}", mark, recent.opponent, recent.score);
        }
    }
    out
}

pub fn render_feed(items: &[FeedItem]) -> String {
    if items.is_empty() {
        return "Feed is empty".dimmed().to_string();
    }

    let mut out = String::new();
    for item in items {
        match item {
            FeedItem::Image { src, href, alt } => {
                let _ = write!(out, "image {}", src);
                if let Some(alt) = alt {
                    let _ = write!(out, " \"{}\"", alt);
                }
                if let Some(href) = href {
                    let _ = write!(out, " -> {}", href.cyan());
                }
            }
            FeedItem::Post { href } => {
                let _ = write!(out, "post  {}", href.cyan());
            }
        }
        out.push('\n');
    }
    out
}

/// Whole ratings print without decimals
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{:.0}", rating)
    } else {
        format!("{:.1}", rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Player;
    use crate::services::site::RecentMatch;

    fn entry(id: &str, name: &str, rating: f64) -> RankingEntry {
        RankingEntry {
            player: Player::synthetic(id, name, None, None),
            rating,
            wins: 2,
            losses: 1,
        }
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(1015.0), "1015");
        assert_eq!(format_rating(12.5), "12.5");
    }

    #[test]
    fn test_ranking_lists_every_entry() {
        let entries = vec![entry("1", "Ana", 1015.0), entry("2", "Luis", 990.0), entry("3", "Marta", 12.5)];
        let out = render_ranking(&entries, 1);

        assert_eq!(out.lines().count(), 4);
        assert!(out.contains("Ana"));
        assert!(out.contains("990"));
        assert!(out.contains("12.5"));
    }

    #[test]
    fn test_players_show_recent_results() {
        let card = PlayerCard {
            player: Player::synthetic("1", "Ana", None, None),
            photo_url: None,
            profile_url: Some("https://instagram.com/ana".to_string()),
            recent: vec![RecentMatch {
                match_id: "m1".to_string(),
                opponent: "2".to_string(),
                score: "6-4 6-2".to_string(),
                won: true,
            }],
        };
        let out = render_players(&[&card]);

        assert!(out.contains("[1]"));
        assert!(out.contains("vs 2 · 6-4 6-2"));
        assert!(out.contains("instagram.com/ana"));
    }

    #[test]
    fn test_empty_sections() {
        assert!(render_ranking(&[], 3).contains("No ranking data"));
        assert!(render_players(&[]).contains("No players found"));
        assert!(render_feed(&[]).contains("Feed is empty"));
    }
}
