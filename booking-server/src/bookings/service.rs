//! Booking submission service

use chrono::Utc;
use surrealdb::RecordId;
use validator::Validate;

use shared::util::booking_reference;
use shared::{BookingConfirmation, BookingRequest, PaymentStatus};

use crate::bookings::price::{MAX_UNIT_PRICE, total_price};
use crate::core::ServerState;
use crate::db::models::Booking;
use crate::db::repository::{BookingRepository, ItemRepository};
use crate::receipt::ReceiptRenderer;
use crate::utils::{AppError, AppResult};

/// Orchestrates the booking pipeline
#[derive(Clone)]
pub struct BookingService {
    state: ServerState,
}

impl BookingService {
    pub fn new(state: ServerState) -> Self {
        Self { state }
    }

    /// Submit a booking.
    ///
    /// 1. Validate the payload
    /// 2. Load the item and resolve the time range for the chosen date
    /// 3. Generate the reference, compute the total, persist as Pending
    /// 4. Spawn the best-effort side effects (receipt PDF + email)
    ///
    /// The stored booking is never rolled back by a side-effect failure.
    pub async fn submit(&self, req: BookingRequest) -> AppResult<BookingConfirmation> {
        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let items = ItemRepository::for_kind(self.state.get_db(), req.kind);
        let item = items.find_by_key(&req.item_id).await?.ok_or_else(|| {
            AppError::not_found(format!("{}:{} not found", req.kind.table(), req.item_id))
        })?;

        let slot = item
            .available_dates
            .iter()
            .find(|d| d.date == req.date)
            .ok_or_else(|| {
                AppError::validation(format!("selected date {} is not available", req.date))
            })?
            .clone();

        // Corrupt catalog row, not a client error
        if !(0.0..=MAX_UNIT_PRICE).contains(&item.price) {
            return Err(AppError::internal(format!(
                "{}:{} has an invalid price",
                req.kind.table(),
                req.item_id
            )));
        }

        let reference = booking_reference();
        let total = total_price(item.price, req.participants);

        let booking = Booking {
            id: None,
            reference: reference.clone(),
            item: RecordId::from_table_key(req.kind.table(), req.item_id.as_str()),
            kind: req.kind,
            item_title: item.title.clone(),
            customer_name: req.customer_name,
            customer_email: req.customer_email,
            customer_phone: req.customer_phone,
            date: req.date,
            time_range: slot.time_range.clone(),
            participants: req.participants,
            unit_price: item.price,
            total_price: total,
            payment_method: req.payment_method,
            payment_status: PaymentStatus::Pending,
            lang: req.lang,
            created_at: Utc::now(),
        };

        let stored = BookingRepository::new(self.state.get_db())
            .create(booking)
            .await?;

        tracing::info!(
            reference = %stored.reference,
            item = %stored.item,
            total = stored.total_price,
            "Booking stored"
        );

        // Best-effort side effects, detached from the request
        let state = self.state.clone();
        let side_effect_booking = stored.clone();
        tokio::spawn(async move {
            run_side_effects(state, side_effect_booking).await;
        });

        Ok(BookingConfirmation {
            reference: stored.reference.clone(),
            item_title: stored.item_title.pick(stored.lang).to_string(),
            date: stored.date,
            time_range: stored.time_range.clone(),
            participants: stored.participants,
            unit_price: stored.unit_price,
            total_price: stored.total_price,
            receipt_url: format!("/api/bookings/{}/receipt", stored.reference),
        })
    }

    /// Load a stored booking by its reference
    pub async fn find(&self, reference: &str) -> AppResult<Booking> {
        BookingRepository::new(self.state.get_db())
            .find_by_reference(reference)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Booking {reference} not found")))
    }

    /// Render (or re-render) the PDF receipt for a stored booking
    pub async fn render_receipt(&self, reference: &str) -> AppResult<Vec<u8>> {
        let booking = self.find(reference).await?;
        ReceiptRenderer::new()
            .render(&booking)
            .map_err(|e| AppError::internal(format!("Receipt generation failed: {e}")))
    }
}

/// Receipt + notification, each failure logged with the booking reference
/// and swallowed. A recorded booking with no email is reconciled from logs.
async fn run_side_effects(state: ServerState, booking: Booking) {
    let pdf = match ReceiptRenderer::new().render(&booking) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            tracing::warn!(
                reference = %booking.reference,
                error = %e,
                "Receipt generation failed"
            );
            None
        }
    };

    if let Err(e) = state
        .notify
        .send_booking_confirmation(&booking, pdf.as_deref())
        .await
    {
        tracing::warn!(
            reference = %booking.reference,
            error = %e,
            "Email dispatch failed"
        );
    }
}
