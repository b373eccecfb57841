//! Bookings API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use shared::{BookingConfirmation, BookingRequest};

use crate::bookings::BookingService;
use crate::core::ServerState;
use crate::db::models::Booking;
use crate::utils::AppResult;

/// POST /api/bookings - validate, price and store a booking request
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BookingRequest>,
) -> AppResult<Json<BookingConfirmation>> {
    let confirmation = BookingService::new(state).submit(payload).await?;
    Ok(Json(confirmation))
}

/// GET /api/bookings/:reference - look up a stored booking
pub async fn get_by_reference(
    State(state): State<ServerState>,
    Path(reference): Path<String>,
) -> AppResult<Json<Booking>> {
    let booking = BookingService::new(state).find(&reference).await?;
    Ok(Json(booking))
}

/// GET /api/bookings/:reference/receipt - download the PDF receipt
pub async fn receipt(
    State(state): State<ServerState>,
    Path(reference): Path<String>,
) -> AppResult<Response> {
    let pdf = BookingService::new(state).render_receipt(&reference).await?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"booking-{reference}.pdf\""),
        ),
    ];
    Ok((headers, pdf).into_response())
}
