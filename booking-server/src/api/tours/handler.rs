//! Guided tours API handlers

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

/// GET /api/tours - list all active tours
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<LangQuery>,
) -> AppResult<Json<Vec<ItemView>>> {
    let repo = ItemRepository::for_kind(state.get_db(), BookableKind::Tour);
    let tours = repo.find_all().await?;
    Ok(Json(tours.iter().map(|t| t.view(q.lang)).collect()))
}

/// GET /api/tours/:id - get a single tour
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(q): Query<LangQuery>,
) -> AppResult<Json<ItemView>> {
    let repo = ItemRepository::for_kind(state.get_db(), BookableKind::Tour);
    let tour = repo
        .find_by_key(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Tour {id} not found")))?;
    Ok(Json(tour.view(q.lang)))
}
