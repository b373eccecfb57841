//! Utility module - common helpers and types
//!
//! - [`AppError`] - application error type
//! - [`retry`] - fixed-schedule retry for the startup content load
//! - logging and validation helpers

pub mod error;
pub mod logger;
pub mod result;
pub mod retry;
pub mod validation;

pub use error::AppError;
pub use result::AppResult;
