use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "pozo tournament ranking")]
pub struct Cli {
    /// Data directory or http(s) base URL (overrides POZO_DATA_SOURCE)
    #[arg(short, long, global = true)]
    pub source: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Print the ranking table
    Ranking {
        /// Show only the first N rows
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Print the top of the ranking
    Podium,
    /// Print the player directory
    Players {
        /// Filter by name, level or club
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Print the normalized social feed
    Feed,
    /// Serve the views as JSON
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::parse_from(["pozo_ranking", "ranking", "--limit", "5"]);
        assert_eq!(cli.command, Command::Ranking { limit: Some(5) });
        assert_eq!(cli.source, None);

        let cli = Cli::parse_from(["pozo_ranking", "players", "-q", "norte", "--source", "https://x.dev"]);
        assert_eq!(cli.command, Command::Players { query: Some("norte".to_string()) });
        assert_eq!(cli.source.as_deref(), Some("https://x.dev"));

        let cli = Cli::parse_from(["pozo_ranking", "serve"]);
        assert_eq!(cli.command, Command::Serve { port: 3000 });
    }
}
