use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{AppState, RankingParams};
use crate::api::models::{ListResponse, RankingRow};
use crate::rating::RankingEntry;

pub async fn get_ranking(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RankingParams>,
) -> impl IntoResponse {
    let view = state.current_view().await;
    let limit = params.limit.unwrap_or(view.ranking.len());

    Json(to_response(&view.ranking, limit, state.public_base_url()))
}

pub async fn get_podium(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let view = state.current_view().await;
    let podium = view.podium();

    Json(to_response(podium, podium.len(), state.public_base_url()))
}

fn to_response(entries: &[RankingEntry], limit: usize, public_base_url: &str) -> ListResponse<RankingRow> {
    let items = entries
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, entry)| RankingRow::from_entry(i + 1, entry, public_base_url))
        .collect();

    ListResponse {
        items,
        total: entries.len(),
    }
}
