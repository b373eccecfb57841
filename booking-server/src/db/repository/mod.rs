//! Repository Module
//!
//! Per-table data access over the embedded SurrealDB.
//!
//! ID convention: the full stack uses the "table:id" string format and
//! `surrealdb::RecordId` everywhere: parse with `"tour:abc".parse()`,
//! build with `RecordId::from_table_key("tour", "abc")`.

// Bookable catalog
pub mod item;

// Read-only catalog
pub mod catalog;
pub mod site_content;
pub mod team;

// Bookings
pub mod booking;

// Re-exports
pub use booking::BookingRepository;
pub use catalog::CatalogRepository;
pub use item::ItemRepository;
pub use site_content::SiteContentRepository;
pub use team::TeamRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
