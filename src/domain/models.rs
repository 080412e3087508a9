use serde::{Deserialize, Serialize};

/// Player data from the player table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub level: String,
    pub club: Option<String>,
    pub ig: Option<String>,
    pub photo: Option<String>,
    pub rating: Option<f64>,
}

impl Player {
    /// Placeholder used when a standings row has no matching player entry
    pub fn synthetic(id: &str, name: &str, ig: Option<String>, photo: Option<String>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            level: String::new(),
            club: None,
            ig,
            photo,
            rating: None,
        }
    }
}

/// One historical result from the match log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: String,
    pub date: String,
    pub p1: String,
    pub p2: String,
    pub score: String,
    pub winner: String,
    pub round: Option<String>,
}

impl MatchRecord {
    pub fn involves(&self, player_id: &str) -> bool {
        self.p1 == player_id || self.p2 == player_id
    }

    pub fn opponent_of(&self, player_id: &str) -> Option<&str> {
        if self.p1 == player_id {
            Some(self.p2.as_str())
        } else if self.p2 == player_id {
            Some(self.p1.as_str())
        } else {
            None
        }
    }

    /// Id of the side that did not win, if the winner is one of the two sides
    pub fn loser(&self) -> Option<&str> {
        if self.winner == self.p1 {
            Some(self.p2.as_str())
        } else if self.winner == self.p2 {
            Some(self.p1.as_str())
        } else {
            None
        }
    }
}

/// Precomputed standings row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub id: String,
    pub name: String,
    pub points: f64,
    pub wins: u32,
    pub losses: u32,
    pub ig: Option<String>,
    pub photo: Option<String>,
}

/// Interpretation of the leaderboard file
#[derive(Debug, Clone, PartialEq)]
pub enum Leaderboard {
    Matches(Vec<MatchRecord>),
    Standings(Vec<StandingRow>),
}

impl Default for Leaderboard {
    fn default() -> Self {
        Leaderboard::Matches(Vec::new())
    }
}

impl Leaderboard {
    pub fn matches(&self) -> &[MatchRecord] {
        match self {
            Leaderboard::Matches(matches) => matches,
            Leaderboard::Standings(_) => &[],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Leaderboard::Matches(matches) => matches.len(),
            Leaderboard::Standings(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Normalized social feed entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FeedItem {
    Image {
        src: String,
        href: Option<String>,
        alt: Option<String>,
    },
    Post {
        href: String,
    },
}
