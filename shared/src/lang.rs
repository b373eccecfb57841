//! Bilingual content types
//!
//! The whole catalog is published in Italian and English. Every localized
//! field is stored as a [`LocalizedText`] pair and projected with
//! [`LocalizedText::pick`] using the request's [`Language`].

use serde::{Deserialize, Serialize};

/// Supported content languages
///
/// Italian is the operator's primary language and the default when the
/// request carries no `lang` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    It,
    En,
}

impl Language {
    /// Two-letter code, as used in query parameters and links
    pub fn code(&self) -> &'static str {
        match self {
            Language::It => "it",
            Language::En => "en",
        }
    }
}

/// A bilingual text pair
///
/// Both variants are always stored; an empty English text falls back to
/// Italian so partially translated rows never render blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub it: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(it: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            it: it.into(),
            en: en.into(),
        }
    }

    /// Select the text for a language, falling back to Italian
    pub fn pick(&self, lang: Language) -> &str {
        match lang {
            Language::It => &self.it,
            Language::En => {
                if self.en.is_empty() {
                    &self.it
                } else {
                    &self.en
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_returns_requested_language() {
        let text = LocalizedText::new("Escursione al tramonto", "Sunset hike");
        assert_eq!(text.pick(Language::It), "Escursione al tramonto");
        assert_eq!(text.pick(Language::En), "Sunset hike");
    }

    #[test]
    fn pick_falls_back_to_italian() {
        let text = LocalizedText::new("Solo italiano", "");
        assert_eq!(text.pick(Language::En), "Solo italiano");
    }

    #[test]
    fn language_codes_are_lowercase() {
        assert_eq!(serde_json::to_string(&Language::It).unwrap(), "\"it\"");
        assert_eq!(
            serde_json::from_str::<Language>("\"en\"").unwrap(),
            Language::En
        );
    }
}
