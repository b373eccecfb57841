//! Outdoor adventures API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use shared::BookableKind;

use crate::api::LangQuery;
use crate::core::ServerState;
use crate::db::models::ItemView;
use crate::db::repository::ItemRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/adventures - list all active adventures
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<LangQuery>,
) -> AppResult<Json<Vec<ItemView>>> {
    let repo = ItemRepository::for_kind(state.get_db(), BookableKind::Adventure);
    let adventures = repo.find_all().await?;
    Ok(Json(adventures.iter().map(|a| a.view(q.lang)).collect()))
}

/// GET /api/adventures/:id - get a single adventure
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(q): Query<LangQuery>,
) -> AppResult<Json<ItemView>> {
    let repo = ItemRepository::for_kind(state.get_db(), BookableKind::Adventure);
    let adventure = repo
        .find_by_key(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Adventure {id} not found")))?;
    Ok(Json(adventure.view(q.lang)))
}
