//! Booking repository
//!
//! Insert-only: bookings are created once and never updated or deleted by
//! this layer. The booking reference doubles as the record key, so a
//! replayed submission with the same reference cannot create a second row.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Booking;

const TABLE: &str = "booking";

#[derive(Clone)]
pub struct BookingRepository {
    base: BaseRepository,
}

impl BookingRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a new booking, keyed by its reference
    pub async fn create(&self, booking: Booking) -> RepoResult<Booking> {
        let reference = booking.reference.clone();
        let created: Option<Booking> = self
            .base
            .db()
            .create((TABLE, reference.as_str()))
            .content(booking)
            .await
            .map_err(|e| {
                let msg = e.to_string();
                if msg.contains("already exists") {
                    RepoError::Duplicate(format!("Booking {reference} already exists"))
                } else {
                    RepoError::Database(msg)
                }
            })?;
        created.ok_or_else(|| RepoError::Database("Failed to create booking".to_string()))
    }

    /// Look up a booking by its reference
    pub async fn find_by_reference(&self, reference: &str) -> RepoResult<Option<Booking>> {
        let booking: Option<Booking> = self.base.db().select((TABLE, reference)).await?;
        Ok(booking)
    }

    /// All bookings, newest first (back-office listing)
    pub async fn find_all(&self) -> RepoResult<Vec<Booking>> {
        let bookings: Vec<Booking> = self
            .base
            .db()
            .query(format!("SELECT * FROM {TABLE} ORDER BY created_at DESC"))
            .await?
            .take(0)?;
        Ok(bookings)
    }
}
