//! Shared types for the booking platform
//!
//! Plain serde types used by both the booking server and any front end:
//! bilingual content helpers, booking DTOs, the unified API response
//! envelope and small utility functions.

pub mod booking;
pub mod lang;
pub mod response;
pub mod util;

// Re-exports
pub use booking::{
    AvailableDate, BookableKind, BookingConfirmation, BookingRequest, CheckoutRequest,
    CheckoutSession, PaymentMethod, PaymentStatus, SearchHit,
};
pub use lang::{Language, LocalizedText};
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
