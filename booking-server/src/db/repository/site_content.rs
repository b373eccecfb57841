//! Site content repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::db::models::SiteContent;

const TABLE: &str = "site_content";

#[derive(Clone)]
pub struct SiteContentRepository {
    base: BaseRepository,
}

impl SiteContentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All content sections, ordered by section key
    pub async fn find_all(&self) -> RepoResult<Vec<SiteContent>> {
        let sections: Vec<SiteContent> = self
            .base
            .db()
            .query(format!("SELECT * FROM {TABLE} ORDER BY section"))
            .await?
            .take(0)?;
        Ok(sections)
    }

    /// One section by its key, e.g. "hero"
    pub async fn find_by_section(&self, section: &str) -> RepoResult<Option<SiteContent>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM {TABLE} WHERE section = $section LIMIT 1"
            ))
            .bind(("section", section.to_string()))
            .await?;
        let sections: Vec<SiteContent> = result.take(0)?;
        Ok(sections.into_iter().next())
    }
}
