use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::warn;

use super::csv::{Record, Table};
use crate::domain::{Leaderboard, MatchRecord, StandingRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardSchema {
    MatchLog,
    Standings,
}

/// A header carrying both `p1` and `p2` marks a match log
pub fn detect_schema(table: &Table) -> LeaderboardSchema {
    if table.has_column("p1") && table.has_column("p2") {
        LeaderboardSchema::MatchLog
    } else {
        LeaderboardSchema::Standings
    }
}

pub fn parse_leaderboard(table: &Table) -> Leaderboard {
    match detect_schema(table) {
        LeaderboardSchema::MatchLog => Leaderboard::Matches(parse_matches(table)),
        LeaderboardSchema::Standings => Leaderboard::Standings(parse_standings(table)),
    }
}

/// Match rows, newest first
pub fn parse_matches(table: &Table) -> Vec<MatchRecord> {
    let mut matches: Vec<MatchRecord> = table
        .records()
        .iter()
        .enumerate()
        .map(|(idx, record)| to_match(idx, record))
        .collect();

    sort_newest_first(&mut matches);
    matches
}

pub fn parse_standings(table: &Table) -> Vec<StandingRow> {
    table
        .records()
        .iter()
        .enumerate()
        .map(|(idx, record)| StandingRow {
            id: record
                .owned("id")
                .unwrap_or_else(|| (idx + 1).to_string()),
            name: record.get("name").to_string(),
            points: parse_number(record.get("points")).unwrap_or(0.0),
            wins: parse_count(record.get("wins")),
            losses: parse_count(record.get("losses")),
            ig: record.owned("ig"),
            photo: record.owned("photo"),
        })
        .collect()
}

fn to_match(idx: usize, record: &Record) -> MatchRecord {
    MatchRecord {
        id: record
            .owned("id")
            .unwrap_or_else(|| format!("m{}", idx + 1)),
        date: record.get("date").to_string(),
        p1: record.get("p1").to_string(),
        p2: record.get("p2").to_string(),
        score: record.get("score").to_string(),
        winner: record.get("winner").to_string(),
        round: record.owned("round"),
    }
}

/// Stable sort; undated or unparseable rows end up last (treated as oldest)
pub fn sort_newest_first(matches: &mut [MatchRecord]) {
    matches.sort_by_key(|m| std::cmp::Reverse(parse_match_date(&m.date)));
}

pub fn parse_match_date(date_str: &str) -> Option<NaiveDateTime> {
    let date_str = date_str.trim();
    if date_str.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.naive_utc());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, "%Y/%m/%d %H:%M:%S") {
        return Some(dt);
    }

    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    warn!("Unrecognized match date '{}', sorting it as oldest", date_str);
    None
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_count(raw: &str) -> u32 {
    parse_number(raw)
        .filter(|v| *v >= 0.0)
        .map(|v| v as u32)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::csv::parse_table;

    #[test]
    fn test_p1_p2_header_is_match_log() {
        let table = parse_table("id,date,p1,p2,score,winner\n");
        assert_eq!(detect_schema(&table), LeaderboardSchema::MatchLog);

        // column order does not matter
        let table = parse_table("p2,winner,p1\n");
        assert_eq!(detect_schema(&table), LeaderboardSchema::MatchLog);
    }

    #[test]
    fn test_missing_either_column_is_standings() {
        for header in ["id,name,points,wins,losses", "id,p1,winner", "id,p2", ""] {
            let table = parse_table(header);
            assert_eq!(detect_schema(&table), LeaderboardSchema::Standings, "{header}");
        }
    }

    #[test]
    fn test_matches_sorted_newest_first() {
        let table = parse_table(
            "id,date,p1,p2,score,winner,round\n\
             a,2024-03-01,1,2,6-4,1,R1\n\
             b,,1,3,6-2,3,\n\
             c,2024-05-10T18:30:00,2,3,7-5,2,Final\n\
             d,not a date,2,1,6-0,2,\n\
             e,2024-04-02T10:00:00Z,3,1,6-1,3,\n",
        );
        let board = parse_leaderboard(&table);
        let ids: Vec<&str> = board.matches().iter().map(|m| m.id.as_str()).collect();

        assert_eq!(ids, ["c", "e", "a", "b", "d"]);
        assert_eq!(board.matches()[0].round.as_deref(), Some("Final"));
        assert_eq!(board.matches()[3].round, None);
    }

    #[test]
    fn test_match_defaults() {
        let table = parse_table("p1,p2\n1,2\n");
        let matches = parse_matches(&table);
        assert_eq!(matches[0].id, "m1");
        assert_eq!(matches[0].winner, "");
        assert_eq!(matches[0].score, "");
    }

    #[test]
    fn test_standings_defaults_numeric_fields_to_zero() {
        let table = parse_table(
            "id,name,points,wins,losses,ig,photo\n\
             1,Ana,120,8,2,@ana,\n\
             2,Luis,,x\n",
        );
        let Leaderboard::Standings(rows) = parse_leaderboard(&table) else {
            panic!("expected standings");
        };

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].points, 120.0);
        assert_eq!(rows[0].wins, 8);
        assert_eq!(rows[0].ig.as_deref(), Some("@ana"));
        assert_eq!(rows[0].photo, None);
        assert_eq!(rows[1].points, 0.0);
        assert_eq!(rows[1].wins, 0);
        assert_eq!(rows[1].losses, 0);
    }

    #[test]
    fn test_date_formats() {
        assert!(parse_match_date("2024-01-15").is_some());
        assert!(parse_match_date("2024-01-15T09:00:00").is_some());
        assert!(parse_match_date("2024-01-15T09:00:00.250").is_some());
        assert!(parse_match_date("2024-01-15T09:00:00+02:00").is_some());
        assert_eq!(
            parse_match_date("2025/03/01"),
            parse_match_date("2025-03-01")
        );
        assert!(parse_match_date("2025/03/01 18:30:00").is_some());
        assert!(parse_match_date("15/01/2024").is_none());
        assert!(parse_match_date("  ").is_none());
    }
}
