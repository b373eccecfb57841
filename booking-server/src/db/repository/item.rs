//! Bookable item repository
//!
//! One repository type serves the three bookable tables; the table is fixed
//! by the [`BookableKind`] it was built for.

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use shared::BookableKind;

use super::{BaseRepository, RepoResult};
use crate::db::models::BookableItem;

#[derive(Clone)]
pub struct ItemRepository {
    base: BaseRepository,
    table: &'static str,
}

impl ItemRepository {
    pub fn for_kind(db: Surreal<Db>, kind: BookableKind) -> Self {
        Self {
            base: BaseRepository::new(db),
            table: kind.table(),
        }
    }

    /// Find all active items, ordered by Italian title
    pub async fn find_all(&self) -> RepoResult<Vec<BookableItem>> {
        let items: Vec<BookableItem> = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM {} WHERE is_active = true ORDER BY title.it",
                self.table
            ))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find one item by its key (the part after "table:")
    pub async fn find_by_key(&self, key: &str) -> RepoResult<Option<BookableItem>> {
        let id = RecordId::from_table_key(self.table, key);
        let item: Option<BookableItem> = self.base.db().select(id).await?;
        Ok(item)
    }

    /// Case-insensitive "contains" match on the localized titles.
    ///
    /// `needle` must already be lower-cased.
    pub async fn search_contains(&self, needle: &str) -> RepoResult<Vec<BookableItem>> {
        let items: Vec<BookableItem> = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM {} WHERE is_active = true \
                 AND (string::lowercase(title.it) CONTAINS $q \
                   OR string::lowercase(title.en) CONTAINS $q)",
                self.table
            ))
            .bind(("q", needle.to_string()))
            .await?
            .take(0)?;
        Ok(items)
    }
}
