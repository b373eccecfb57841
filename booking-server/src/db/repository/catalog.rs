//! Read-only catalog repository
//!
//! Shared by the restaurant, bnb, cultural_site and gastronomy tables,
//! which all carry the [`CatalogEntry`] row shape.

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoResult};
use crate::db::models::CatalogEntry;

#[derive(Clone)]
pub struct CatalogRepository {
    base: BaseRepository,
    table: &'static str,
}

impl CatalogRepository {
    pub fn new(db: Surreal<Db>, table: &'static str) -> Self {
        Self {
            base: BaseRepository::new(db),
            table,
        }
    }

    pub fn restaurants(db: Surreal<Db>) -> Self {
        Self::new(db, "restaurant")
    }

    pub fn bnbs(db: Surreal<Db>) -> Self {
        Self::new(db, "bnb")
    }

    pub fn cultural_sites(db: Surreal<Db>) -> Self {
        Self::new(db, "cultural_site")
    }

    pub fn gastronomy(db: Surreal<Db>) -> Self {
        Self::new(db, "gastronomy")
    }

    /// Find all active entries, ordered by Italian name
    pub async fn find_all(&self) -> RepoResult<Vec<CatalogEntry>> {
        let entries: Vec<CatalogEntry> = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM {} WHERE is_active = true ORDER BY name.it",
                self.table
            ))
            .await?
            .take(0)?;
        Ok(entries)
    }

    /// Find one entry by its key
    pub async fn find_by_key(&self, key: &str) -> RepoResult<Option<CatalogEntry>> {
        let id = RecordId::from_table_key(self.table, key);
        let entry: Option<CatalogEntry> = self.base.db().select(id).await?;
        Ok(entry)
    }

    /// Case-insensitive "contains" match on the localized names.
    ///
    /// `needle` must already be lower-cased.
    pub async fn search_contains(&self, needle: &str) -> RepoResult<Vec<CatalogEntry>> {
        let entries: Vec<CatalogEntry> = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM {} WHERE is_active = true \
                 AND (string::lowercase(name.it) CONTAINS $q \
                   OR string::lowercase(name.en) CONTAINS $q)",
                self.table
            ))
            .bind(("q", needle.to_string()))
            .await?
            .take(0)?;
        Ok(entries)
    }
}
