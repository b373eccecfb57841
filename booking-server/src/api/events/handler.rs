//! Special events API handlers

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

/// GET /api/events - list all active special events
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<LangQuery>,
) -> AppResult<Json<Vec<ItemView>>> {
    let repo = ItemRepository::for_kind(state.get_db(), BookableKind::SpecialEvent);
    let events = repo.find_all().await?;
    Ok(Json(events.iter().map(|e| e.view(q.lang)).collect()))
}

/// GET /api/events/:id - get a single special event
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(q): Query<LangQuery>,
) -> AppResult<Json<ItemView>> {
    let repo = ItemRepository::for_kind(state.get_db(), BookableKind::SpecialEvent);
    let event = repo
        .find_by_key(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Event {id} not found")))?;
    Ok(Json(event.view(q.lang)))
}
