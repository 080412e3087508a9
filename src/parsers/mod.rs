pub mod csv;
pub mod feed;
pub mod leaderboard;
pub mod players;

pub use csv::{parse_table, Record, Table};
pub use feed::FeedNormalizer;
pub use leaderboard::{detect_schema, parse_leaderboard, LeaderboardSchema};
pub use players::parse_players;
