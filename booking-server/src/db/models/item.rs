//! Bookable item model (tour / adventure / special event)
//!
//! The three bookable tables share one row shape; the table a row lives in
//! decides its [`BookableKind`].

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::{AvailableDate, Language, LocalizedText};

use super::serde_helpers;

/// A bookable catalog item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookableItem {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    /// Price per participant, EUR
    pub price: f64,
    /// Display duration, e.g. "3h"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_point: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Dates the item can be booked for, each with its time range
    #[serde(default)]
    pub available_dates: Vec<AvailableDate>,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Localized projection returned by the content endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_point: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub available_dates: Vec<AvailableDate>,
}

impl BookableItem {
    /// Key part of the record id ("tour:abc" -> "abc")
    pub fn key(&self) -> String {
        self.id
            .as_ref()
            .map(|id| id.key().to_string())
            .unwrap_or_default()
    }

    pub fn view(&self, lang: Language) -> ItemView {
        ItemView {
            id: self.key(),
            title: self.title.pick(lang).to_string(),
            description: self.description.pick(lang).to_string(),
            price: self.price,
            duration: self.duration.clone(),
            meeting_point: self.meeting_point.as_ref().map(|m| m.pick(lang).to_string()),
            image_url: self.image_url.clone(),
            available_dates: self.available_dates.clone(),
        }
    }
}
