//! API routes
//!
//! # Structure
//!
//! - [`health`] - health checks
//! - [`tours`], [`adventures`], [`events`] - bookable catalog
//! - [`restaurants`], [`bnbs`], [`cultural_sites`], [`gastronomy`] - places
//! - [`team`], [`site_content`] - editorial content
//! - [`bookings`] - booking submission, lookup, receipt download
//! - [`payments`] - hosted checkout sessions
//! - [`search`] - federated search

use axum::Router;
use http::{HeaderName, HeaderValue};
use serde::Deserialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

pub mod health;

// Bookable catalog
pub mod adventures;
pub mod events;
pub mod tours;

// Read-only content
pub mod bnbs;
pub mod cultural_sites;
pub mod gastronomy;
pub mod restaurants;
pub mod site_content;
pub mod team;

// Booking pipeline
pub mod bookings;
pub mod payments;

// Search
pub mod search;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// `?lang=it|en` query, defaulting to Italian
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LangQuery {
    #[serde(default)]
    pub lang: shared::Language,
}

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(tours::router())
        .merge(adventures::router())
        .merge(events::router())
        .merge(restaurants::router())
        .merge(bnbs::router())
        .merge(cultural_sites::router())
        .merge(gastronomy::router())
        .merge(team::router())
        .merge(site_content::router())
        .merge(bookings::router())
        .merge(payments::router())
        .merge(search::router())
}

/// Build the fully configured application with all middleware
pub fn build_app() -> Router<ServerState> {
    build_router()
        // ========== Tower HTTP Middleware ==========
        // CORS - the site front end is served from a different origin
        .layer(CorsLayer::permissive())
        // Compression - gzip responses
        .layer(CompressionLayer::new())
        // Trace - request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - unique ID per request, propagated to the response
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
}
