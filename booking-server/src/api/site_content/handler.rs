//! Site content API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::LangQuery;
use crate::core::ServerState;
use crate::db::models::SiteContentView;
use crate::db::repository::SiteContentRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/content - list every editorial section
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<LangQuery>,
) -> AppResult<Json<Vec<SiteContentView>>> {
    let repo = SiteContentRepository::new(state.get_db());
    let sections = repo.find_all().await?;
    Ok(Json(sections.iter().map(|s| s.view(q.lang)).collect()))
}

/// GET /api/content/:section - get one editorial section
pub async fn get_by_section(
    State(state): State<ServerState>,
    Path(section): Path<String>,
    Query(q): Query<LangQuery>,
) -> AppResult<Json<SiteContentView>> {
    let repo = SiteContentRepository::new(state.get_db());
    let content = repo
        .find_by_section(&section)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Content section {section} not found")))?;
    Ok(Json(content.view(q.lang)))
}
