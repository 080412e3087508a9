use axum::{routing::get, Router};
use std::sync::Arc;
use crate::api::handlers::{
    feed::get_feed,
    players::get_players,
    ranking::{get_podium, get_ranking},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/ranking", get(get_ranking))
        .route("/api/podium", get(get_podium))
        .route("/api/players", get(get_players))
        .route("/api/feed", get(get_feed))
        .with_state(state)
}
