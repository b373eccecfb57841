//! Team API handlers

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::LangQuery;
use crate::core::ServerState;
use crate::db::models::TeamMemberView;
use crate::db::repository::TeamRepository;
use crate::utils::AppResult;

/// GET /api/team - list team members in display order
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<LangQuery>,
) -> AppResult<Json<Vec<TeamMemberView>>> {
    let repo = TeamRepository::new(state.get_db());
    let members = repo.find_all().await?;
    Ok(Json(members.iter().map(|m| m.view(q.lang)).collect()))
}
