//! Booking wire types
//!
//! Request/response DTOs exchanged between the booking forms and the server.
//! Database row types live in the server crate; these are the plain shapes a
//! front end serializes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::lang::Language;

/// Kind of item a customer can reserve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookableKind {
    Tour,
    Adventure,
    SpecialEvent,
}

impl BookableKind {
    /// Database table holding this kind of item
    pub fn table(&self) -> &'static str {
        match self {
            BookableKind::Tour => "tour",
            BookableKind::Adventure => "adventure",
            BookableKind::SpecialEvent => "special_event",
        }
    }
}

/// A date the item can be booked for, with its time range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableDate {
    pub date: NaiveDate,
    /// Display time range, e.g. "09:30 - 12:30"
    pub time_range: String,
}

/// How the customer intends to pay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Pay the operator in person on the day
    #[default]
    OnSite,
    /// Hosted card checkout session
    Card,
}

/// Payment lifecycle of a booking
///
/// Bookings are created `Pending`; this layer never moves them forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Cancelled,
}

/// Booking submission payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingRequest {
    pub kind: BookableKind,
    /// Item id within the kind's table (the key part, not "table:id")
    #[validate(length(min = 1, message = "item id must not be empty"))]
    pub item_id: String,
    #[validate(length(min = 1, max = 200, message = "name must not be empty"))]
    pub customer_name: String,
    #[validate(email(message = "invalid email address"))]
    pub customer_email: String,
    #[validate(length(min = 1, max = 100, message = "phone must not be empty"))]
    pub customer_phone: String,
    /// Must be one of the item's available dates
    pub date: NaiveDate,
    #[validate(range(min = 1, max = 50, message = "participants must be between 1 and 50"))]
    pub participants: u32,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    /// Language for the receipt and notification texts
    #[serde(default)]
    pub lang: Language,
}

/// Confirmation returned after a successful submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// Human-visible booking reference, e.g. "MF2K81QX-4H7ZT2"
    pub reference: String,
    pub item_title: String,
    pub date: NaiveDate,
    pub time_range: String,
    pub participants: u32,
    pub unit_price: f64,
    pub total_price: f64,
    /// Relative path the receipt PDF can be downloaded from
    pub receipt_url: String,
}

/// Checkout session request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub booking_reference: String,
}

/// Hosted checkout session returned by the payment endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub session_id: String,
    /// Third-party payment page the browser should redirect to
    pub checkout_url: String,
}

/// A federated search result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// Source table name ("tour", "restaurant", ...)
    pub source: String,
    pub id: String,
    pub title: String,
    /// Destination link for the hit, e.g. "/tours/abc123"
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn valid_request() -> BookingRequest {
        BookingRequest {
            kind: BookableKind::Tour,
            item_id: "abc123".into(),
            customer_name: "Mario Rossi".into(),
            customer_email: "mario@example.com".into(),
            customer_phone: "+39 333 1234567".into(),
            date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            participants: 2,
            payment_method: PaymentMethod::OnSite,
            lang: Language::It,
        }
    }

    #[test]
    fn valid_request_passes_validation() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut req = valid_request();
        req.customer_name = "".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut req = valid_request();
        req.customer_email = "not-an-email".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn zero_participants_is_rejected() {
        let mut req = valid_request();
        req.participants = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&BookableKind::SpecialEvent).unwrap();
        assert_eq!(json, "\"special_event\"");
        assert_eq!(BookableKind::SpecialEvent.table(), "special_event");
    }
}
