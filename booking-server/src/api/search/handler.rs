//! Federated search API handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use shared::{Language, SearchHit};

use crate::core::ServerState;
use crate::services::SearchService;
use crate::utils::validation::MAX_QUERY_LEN;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search text, matched case-insensitively against titles and names
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub lang: Language,
}

/// GET /api/search?q=...&lang=... - search all six content tables
pub async fn search(
    State(state): State<ServerState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<SearchHit>>> {
    if params.q.len() > MAX_QUERY_LEN {
        return Err(AppError::validation(format!(
            "Search query exceeds {MAX_QUERY_LEN} characters"
        )));
    }

    let hits = SearchService::new(state.get_db())
        .search(&params.q, params.lang)
        .await?;
    Ok(Json(hits))
}
