//! Persistence layer for translation records.
//!
//! The [`TranslationStore`] trait abstracts the relational backend so the
//! orchestration layer can be tested against fakes; [`SqliteStore`] is the
//! production implementation.

mod sqlite;

pub use sqlite::SqliteStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{NewTranslation, TranslationRecord};

/// CRUD over translation records keyed by identifier.
#[async_trait]
pub trait TranslationStore: Send + Sync {
    /// Persist a new record and return it with its assigned identifier.
    async fn create(&self, new: NewTranslation) -> Result<TranslationRecord>;

    /// Look up a record by identifier. `Ok(None)` when absent.
    async fn find_by_id(&self, id: i64) -> Result<Option<TranslationRecord>>;

    /// All records in insertion order (not a guaranteed contract).
    async fn find_all(&self) -> Result<Vec<TranslationRecord>>;

    /// Overwrite all content fields of an existing record in one statement.
    ///
    /// Returns [`crate::error::Error::NotFound`] when no record has the
    /// given identifier.
    async fn update(&self, record: &TranslationRecord) -> Result<TranslationRecord>;

    /// Remove a record. Returns [`crate::error::Error::NotFound`] when absent.
    async fn delete(&self, id: i64) -> Result<()>;
}
