//! Local gastronomy API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::LangQuery;
use crate::core::ServerState;
use crate::db::models::CatalogView;
use crate::db::repository::CatalogRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/gastronomy - list all active gastronomy entries
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<LangQuery>,
) -> AppResult<Json<Vec<CatalogView>>> {
    let repo = CatalogRepository::gastronomy(state.get_db());
    let entries = repo.find_all().await?;
    Ok(Json(entries.iter().map(|e| e.view(q.lang)).collect()))
}

/// GET /api/gastronomy/:id - get a single gastronomy entry
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(q): Query<LangQuery>,
) -> AppResult<Json<CatalogView>> {
    let repo = CatalogRepository::gastronomy(state.get_db());
    let entry = repo
        .find_by_key(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Gastronomy entry {id} not found")))?;
    Ok(Json(entry.view(q.lang)))
}
