//! Receipt rendering
//!
//! Builds the booking receipt as a single-page A4 PDF: title, key-value
//! detail table and a QR code encoding the booking metadata. The same
//! renderer backs the post-submission email attachment and the
//! `/api/bookings/{reference}/receipt` download.

mod error;
mod renderer;

pub use error::{ReceiptError, ReceiptResult};
pub use renderer::ReceiptRenderer;
