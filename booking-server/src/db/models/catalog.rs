//! Read-only catalog entry model
//!
//! Shared row shape for the non-bookable content tables: restaurant, bnb,
//! cultural_site and gastronomy.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::{Language, LocalizedText};

use super::serde_helpers;

/// A catalog row (restaurant, B&B, cultural site, gastronomy product)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub name: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
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
pub struct CatalogView {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CatalogEntry {
    pub fn key(&self) -> String {
        self.id
            .as_ref()
            .map(|id| id.key().to_string())
            .unwrap_or_default()
    }

    pub fn view(&self, lang: Language) -> CatalogView {
        CatalogView {
            id: self.key(),
            name: self.name.pick(lang).to_string(),
            description: self.description.pick(lang).to_string(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            website: self.website.clone(),
            image_url: self.image_url.clone(),
        }
    }
}
