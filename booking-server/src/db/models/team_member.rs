//! Team member model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::{Language, LocalizedText};

use super::serde_helpers;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    /// Role within the operator, e.g. "Guida escursionistica" / "Hiking guide"
    pub role: LocalizedText,
    #[serde(default)]
    pub bio: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMemberView {
    pub id: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl TeamMember {
    pub fn view(&self, lang: Language) -> TeamMemberView {
        TeamMemberView {
            id: self
                .id
                .as_ref()
                .map(|id| id.key().to_string())
                .unwrap_or_default(),
            name: self.name.clone(),
            role: self.role.pick(lang).to_string(),
            bio: self.bio.pick(lang).to_string(),
            photo_url: self.photo_url.clone(),
        }
    }
}
