pub mod settings;

pub use settings::{AppConfig, RankingSettings, SiteSettings, SourceSettings};
