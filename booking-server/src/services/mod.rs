//! Outbound services and cross-table queries
//!
//! - [`NotifyService`] - email notification dispatch (external function)
//! - [`PaymentService`] - hosted checkout session creation (external function)
//! - [`SearchService`] - federated search across the content tables

pub mod notify;
pub mod payment;
pub mod search;

pub use notify::NotifyService;
pub use payment::PaymentService;
pub use search::SearchService;
