pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod fetchers;
pub mod http;
pub mod parsers;
pub mod rating;
pub mod report;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::config::AppConfig;
use crate::services::loader::SiteLoader;
use crate::services::server::ServerService;
use crate::services::site::SiteView;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn build_config(source: Option<&str>) -> AppConfig {
    AppConfig::from_env().with_location(source)
}

pub fn handle_ranking(config: AppConfig, limit: Option<usize>) -> Result<()> {
    let view = load_view(config.clone())?;
    let shown = limit.unwrap_or(view.ranking.len()).min(view.ranking.len());
    print!("{}", report::render_ranking(&view.ranking[..shown], config.ranking.podium_size));
    Ok(())
}

pub fn handle_podium(config: AppConfig) -> Result<()> {
    let view = load_view(config.clone())?;
    print!("{}", report::render_ranking(view.podium(), config.ranking.podium_size));
    Ok(())
}

pub fn handle_players(config: AppConfig, query: Option<&str>) -> Result<()> {
    let view = load_view(config)?;
    let cards = view.search(query.unwrap_or(""));
    print!("{}", report::render_players(&cards));
    Ok(())
}

pub fn handle_feed(config: AppConfig) -> Result<()> {
    let view = load_view(config)?;
    print!("{}", report::render_feed(&view.feed));
    Ok(())
}

pub fn handle_serve(config: AppConfig, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn load_view(config: AppConfig) -> Result<SiteView> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let loader = SiteLoader::new(config)?;
        let snapshot = loader.load().await;
        Ok(SiteView::build(&snapshot, loader.config()))
    })
}
