//! Text Translator Core Library
//!
//! This library provides the core functionality for the translation API:
//! - Translation via OpenAI-compatible APIs
//! - Persistence of translation records in SQLite
//! - The orchestration layer composing the two per operation

pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod translator;
pub mod util;

pub use config::{AppConfig, DatabaseConfig, Lang, TranslatorConfig, DEFAULT_DATABASE_FILE};
pub use error::{Error, Result};
pub use model::{NewTranslation, TranslationRecord};
pub use store::{SqliteStore, TranslationStore};
pub use translator::{create_translator, OpenAiTranslator, Translator};

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// High-level service composing the translator and the store.
///
/// Each operation is a linear sequence of explicit steps that
/// short-circuits on the first failure; in particular, update never
/// commits anything unless the provider call for the new text succeeded.
pub struct TranslationService {
    translator: Arc<dyn Translator>,
    store: Arc<dyn TranslationStore>,
    /// Bound on each provider and store call
    timeout: Duration,
}

impl TranslationService {
    /// Create a service wired to the real provider and the configured SQLite store.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let timeout = config.request_timeout();
        let translator = create_translator(&config.translator, timeout)?;
        let store = Arc::new(SqliteStore::open(config.database.resolved_path())?);

        Ok(Self {
            translator,
            store,
            timeout,
        })
    }

    /// Create with custom translator and store (for tests and fakes)
    pub fn with_parts(
        translator: Arc<dyn Translator>,
        store: Arc<dyn TranslationStore>,
        timeout: Duration,
    ) -> Self {
        Self {
            translator,
            store,
            timeout,
        }
    }

    /// Translate `text` and persist the resulting record.
    ///
    /// The record is only created after translation succeeded, so a
    /// persisted record always carries translated text.
    pub async fn create(
        &self,
        text: String,
        from: Lang,
        to: Lang,
    ) -> Result<TranslationRecord> {
        info!(
            "Translating with {} ({} -> {})",
            self.translator.name(),
            from,
            to
        );

        let translated_text = self.translate_bounded(&text, &from, &to).await?;

        let record = self
            .store_bounded(self.store.create(NewTranslation {
                original_text: text,
                translated_text,
                from_language: from,
                to_language: to,
            }))
            .await?;

        debug!("Saved translation {}", record.id);
        Ok(record)
    }

    /// Look up a record by identifier.
    pub async fn get(&self, id: i64) -> Result<TranslationRecord> {
        self.store_bounded(self.store.find_by_id(id))
            .await?
            .ok_or(Error::NotFound { id })
    }

    /// All persisted records. An empty list is a valid result.
    pub async fn list(&self) -> Result<Vec<TranslationRecord>> {
        self.store_bounded(self.store.find_all()).await
    }

    /// Re-translate and overwrite an existing record.
    ///
    /// Looks up the record first (absent id never reaches the provider),
    /// then translates the new text, and only commits once translation
    /// succeeded. A provider failure leaves the stored record untouched.
    pub async fn update(
        &self,
        id: i64,
        text: String,
        from: Lang,
        to: Lang,
    ) -> Result<TranslationRecord> {
        let existing = self
            .store_bounded(self.store.find_by_id(id))
            .await?
            .ok_or(Error::NotFound { id })?;

        let translated_text = self.translate_bounded(&text, &from, &to).await?;

        let updated = TranslationRecord {
            id: existing.id,
            original_text: text,
            translated_text,
            from_language: from,
            to_language: to,
        };

        self.store_bounded(self.store.update(&updated)).await
    }

    /// Remove a record by identifier.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.store_bounded(self.store.find_by_id(id))
            .await?
            .ok_or(Error::NotFound { id })?;

        self.store_bounded(self.store.delete(id)).await
    }

    pub fn translator_info(&self) -> translator::TranslatorInfo {
        self.translator.info()
    }

    /// Provider call bounded by the request timeout.
    async fn translate_bounded(&self, text: &str, from: &Lang, to: &Lang) -> Result<String> {
        tokio::time::timeout(self.timeout, self.translator.translate(text, from, to))
            .await
            .map_err(|_| Error::TranslationTimeout)?
    }

    /// Store call bounded by the request timeout.
    async fn store_bounded<T>(
        &self,
        op: impl std::future::Future<Output = Result<T>>,
    ) -> Result<T> {
        tokio::time::timeout(self.timeout, op)
            .await
            .map_err(|_| Error::Store("store operation timed out".to_string()))?
    }
}
