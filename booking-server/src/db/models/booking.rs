//! Booking model
//!
//! One row per submitted reservation. Rows are created once by the booking
//! pipeline and never updated or deleted by this layer; payment status moves
//! forward elsewhere (payment provider webhook / back office).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::{BookableKind, Language, LocalizedText, PaymentMethod, PaymentStatus};

use super::serde_helpers;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// Human-visible reference, also used as the record key
    pub reference: String,
    /// The booked item
    #[serde(with = "serde_helpers::record_id")]
    pub item: RecordId,
    pub kind: BookableKind,
    /// Title snapshot, so receipts survive later catalog edits
    pub item_title: LocalizedText,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub date: NaiveDate,
    /// Time range resolved from the item's available dates
    pub time_range: String,
    pub participants: u32,
    /// Price per participant at submission time, EUR
    pub unit_price: f64,
    /// unit_price × participants, rounded to 2 decimals
    pub total_price: f64,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    /// Language the customer used; receipts and emails follow it
    #[serde(default)]
    pub lang: Language,
    pub created_at: DateTime<Utc>,
}
