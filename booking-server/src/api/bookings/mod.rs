//! Bookings API module
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/bookings | POST | Submit a booking request |
//! | /api/bookings/{reference} | GET | Look up a stored booking |
//! | /api/bookings/{reference}/receipt | GET | Download the PDF receipt |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/bookings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/{reference}", get(handler::get_by_reference))
        .route("/{reference}/receipt", get(handler::receipt))
}
