//! Translation record data model.
//!
//! Records are serialized over HTTP with camelCase field names
//! (`originalText`, `translatedText`, `fromLanguage`, `toLanguage`),
//! matching the persisted record shape exposed by the API.

use serde::{Deserialize, Serialize};

use crate::config::Lang;

/// A persisted translation: original text, translated text, and the
/// language pair, keyed by a store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    /// Identifier assigned by the store on creation
    pub id: i64,
    pub original_text: String,
    pub translated_text: String,
    pub from_language: Lang,
    pub to_language: Lang,
}

/// Content fields of a translation record before the store has assigned
/// an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTranslation {
    pub original_text: String,
    pub translated_text: String,
    pub from_language: Lang,
    pub to_language: Lang,
}

impl NewTranslation {
    /// Attach a store-assigned identifier, producing a full record.
    pub fn with_id(self, id: i64) -> TranslationRecord {
        TranslationRecord {
            id,
            original_text: self.original_text,
            translated_text: self.translated_text,
            from_language: self.from_language,
            to_language: self.to_language,
        }
    }
}
