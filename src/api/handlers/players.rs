use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{AppState, PlayerParams};
use crate::api::models::PlayerListResponse;

pub async fn get_players(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlayerParams>,
) -> impl IntoResponse {
    let view = state.current_view().await;
    let query = params.q.filter(|q| !q.trim().is_empty());

    let items: Vec<_> = view
        .search(query.as_deref().unwrap_or(""))
        .into_iter()
        .cloned()
        .collect();

    Json(PlayerListResponse {
        total: items.len(),
        items,
        query,
    })
}
