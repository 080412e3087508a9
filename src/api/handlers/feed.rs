use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::AppState;
use crate::api::models::FeedResponse;

pub async fn get_feed(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let view = state.current_view().await;

    Json(FeedResponse {
        visible: view.feed_visible(),
        items: view.feed,
    })
}
