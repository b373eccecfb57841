//! Payments API handlers

use axum::{Json, extract::State};

use shared::{CheckoutRequest, CheckoutSession};

use crate::bookings::BookingService;
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_required_text};

/// POST /api/payments/checkout - create a hosted checkout session for a booking
pub async fn checkout(
    State(state): State<ServerState>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<CheckoutSession>> {
    validate_required_text(
        &payload.booking_reference,
        "booking_reference",
        MAX_SHORT_TEXT_LEN,
    )?;

    let booking = BookingService::new(state.clone())
        .find(&payload.booking_reference)
        .await?;
    let session = state.payments.create_checkout_session(&booking).await?;
    Ok(Json(session))
}
