//! Site content model
//!
//! Editorial sections of the public site (hero text, about, contact block,
//! ...), keyed by section name.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::{Language, LocalizedText};

use super::serde_helpers;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// Section key, e.g. "hero", "about", "contacts"
    pub section: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub body: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContentView {
    pub section: String,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl SiteContent {
    pub fn view(&self, lang: Language) -> SiteContentView {
        SiteContentView {
            section: self.section.clone(),
            title: self.title.pick(lang).to_string(),
            body: self.body.pick(lang).to_string(),
            image_url: self.image_url.clone(),
        }
    }
}
