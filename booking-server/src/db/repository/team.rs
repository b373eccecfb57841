//! Team member repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::db::models::TeamMember;

const TABLE: &str = "team_member";

#[derive(Clone)]
pub struct TeamRepository {
    base: BaseRepository,
}

impl TeamRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All team members in display order
    pub async fn find_all(&self) -> RepoResult<Vec<TeamMember>> {
        let members: Vec<TeamMember> = self
            .base
            .db()
            .query(format!("SELECT * FROM {TABLE} ORDER BY sort_order"))
            .await?
            .take(0)?;
        Ok(members)
    }
}
