use anyhow::Result;

use pozo_ranking::cli::{Cli, Command};
use pozo_ranking::{
    build_config, handle_completions, handle_feed, handle_players, handle_podium, handle_ranking,
    handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = build_config(cli.source.as_deref());
    match &cli.command {
        Command::Ranking { limit } => handle_ranking(config, *limit),
        Command::Podium => handle_podium(config),
        Command::Players { query } => handle_players(config, query.as_deref()),
        Command::Feed => handle_feed(config),
        Command::Serve { port } => handle_serve(config, *port),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
