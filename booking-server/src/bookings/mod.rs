//! Booking pipeline
//!
//! Validate the form, resolve the time range for the chosen date, persist
//! the reservation, then fire the best-effort side effects (PDF receipt,
//! email notification). See [`BookingService::submit`].

pub mod price;
pub mod service;

pub use service::BookingService;
