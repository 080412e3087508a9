use serde::Deserialize;

use crate::services::loader::SiteLoader;
use crate::services::site::SiteView;

pub mod feed;
pub mod players;
pub mod ranking;

pub struct AppState {
    pub loader: SiteLoader,
}

impl AppState {
    /// One fresh load per request, nothing kept between requests
    pub async fn current_view(&self) -> SiteView {
        let snapshot = self.loader.load().await;
        SiteView::build(&snapshot, self.loader.config())
    }

    pub fn public_base_url(&self) -> &str {
        &self.loader.config().site.public_base_url
    }
}

#[derive(Deserialize)]
pub struct RankingParams {
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct PlayerParams {
    pub q: Option<String>,
}
