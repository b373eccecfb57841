//! Error types for receipt rendering

use thiserror::Error;

/// Receipt rendering error types
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// PDF document assembly failed
    #[error("PDF error: {0}")]
    Pdf(String),

    /// QR code encoding failed
    #[error("QR encoding error: {0}")]
    Qr(String),
}

/// Result type for receipt operations
pub type ReceiptResult<T> = Result<T, ReceiptError>;
