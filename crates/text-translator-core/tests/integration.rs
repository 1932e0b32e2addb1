//! Integration tests for text-translator-core
//!
//! These tests verify the end-to-end orchestration:
//! - Translate-and-save with a mock backend
//! - Not-found handling on read, update, and delete
//! - No partial mutation when the provider or the store fails

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use text_translator_core::{
    translator::TranslatorInfo, Error, Lang, NewTranslation, Result, SqliteStore,
    TranslationRecord, TranslationService, TranslationStore, Translator,
};

// =============================================================================
// Mock Translator for Testing
// =============================================================================

/// A mock translator that returns predictable translations without network calls.
struct MockTranslator {
    /// Prefix to add to translations for verification
    prefix: String,
    /// Simulate failure if true
    should_fail: bool,
    /// Number of translate calls observed
    calls: AtomicUsize,
}

impl MockTranslator {
    fn new() -> Self {
        Self {
            prefix: "[TRANSLATED]".to_string(),
            should_fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            prefix: String::new(),
            should_fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str, _source: &Lang, _target: &Lang) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err(Error::TranslationRequest(
                "Mock translation failure".to_string(),
            ));
        }
        Ok(format!("{} {}", self.prefix, text))
    }

    fn name(&self) -> &'static str {
        "mock"
    }

    fn info(&self) -> TranslatorInfo {
        TranslatorInfo {
            name: "mock",
            requires_api_key: false,
        }
    }
}

/// A translator that never completes within any reasonable timeout.
struct StalledTranslator;

#[async_trait]
impl Translator for StalledTranslator {
    async fn translate(&self, text: &str, _source: &Lang, _target: &Lang) -> Result<String> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(text.to_string())
    }

    fn info(&self) -> TranslatorInfo {
        TranslatorInfo {
            name: "stalled",
            requires_api_key: false,
        }
    }
}

// =============================================================================
// Mock Store for Testing Save Failures
// =============================================================================

/// A store whose write operations always fail with a store-level error.
struct BrokenStore;

#[async_trait]
impl TranslationStore for BrokenStore {
    async fn create(&self, _new: NewTranslation) -> Result<TranslationRecord> {
        Err(Error::Store("disk full".to_string()))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<TranslationRecord>> {
        Ok(None)
    }

    async fn find_all(&self) -> Result<Vec<TranslationRecord>> {
        Ok(Vec::new())
    }

    async fn update(&self, record: &TranslationRecord) -> Result<TranslationRecord> {
        Err(Error::NotFound { id: record.id })
    }

    async fn delete(&self, id: i64) -> Result<()> {
        Err(Error::NotFound { id })
    }
}

// =============================================================================
// Test Fixtures
// =============================================================================

fn service_with(translator: Arc<dyn Translator>) -> (TranslationService, Arc<SqliteStore>) {
    let store = Arc::new(SqliteStore::open_in_memory().expect("in-memory store"));
    let service = TranslationService::with_parts(
        translator,
        Arc::clone(&store) as Arc<dyn TranslationStore>,
        Duration::from_secs(5),
    );
    (service, store)
}

// =============================================================================
// Create-and-Translate Tests
// =============================================================================

#[tokio::test]
async fn test_create_then_get_returns_matching_fields() {
    let (service, _) = service_with(Arc::new(MockTranslator::new()));

    let created = service
        .create("hello".to_string(), Lang::new("en"), Lang::new("es"))
        .await
        .expect("create should succeed");

    let fetched = service.get(created.id).await.expect("get should succeed");

    assert_eq!(fetched.original_text, "hello");
    assert_eq!(fetched.translated_text, "[TRANSLATED] hello");
    assert_eq!(fetched.from_language.as_str(), "en");
    assert_eq!(fetched.to_language.as_str(), "es");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_with_failing_provider_persists_nothing() {
    let (service, store) = service_with(Arc::new(MockTranslator::failing()));

    let err = service
        .create("hello".to_string(), Lang::new("en"), Lang::new("es"))
        .await
        .expect_err("create should fail");

    assert!(err.is_translation_failure(), "unexpected error: {err}");
    assert!(
        store.find_all().await.unwrap().is_empty(),
        "no record may be persisted when translation fails"
    );
}

#[tokio::test]
async fn test_create_with_failing_store_surfaces_store_error() {
    let service = TranslationService::with_parts(
        Arc::new(MockTranslator::new()),
        Arc::new(BrokenStore),
        Duration::from_secs(5),
    );

    let err = service
        .create("hello".to_string(), Lang::new("en"), Lang::new("es"))
        .await
        .expect_err("create should fail");

    assert!(matches!(err, Error::Store(_)), "unexpected error: {err}");
}

// =============================================================================
// Read Tests
// =============================================================================

#[tokio::test]
async fn test_get_missing_returns_not_found() {
    let (service, _) = service_with(Arc::new(MockTranslator::new()));

    let err = service.get(42).await.expect_err("get should fail");
    assert!(matches!(err, Error::NotFound { id: 42 }));
}

#[tokio::test]
async fn test_list_empty_store_returns_empty_sequence() {
    let (service, _) = service_with(Arc::new(MockTranslator::new()));

    let all = service.list().await.expect("list should succeed");
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_list_returns_records_in_insertion_order() {
    let (service, _) = service_with(Arc::new(MockTranslator::new()));

    service
        .create("one".to_string(), Lang::new("en"), Lang::new("es"))
        .await
        .unwrap();
    service
        .create("two".to_string(), Lang::new("en"), Lang::new("fr"))
        .await
        .unwrap();

    let all = service.list().await.unwrap();
    let originals: Vec<_> = all.iter().map(|r| r.original_text.as_str()).collect();
    assert_eq!(originals, ["one", "two"]);
}

// =============================================================================
// Update Tests
// =============================================================================

#[tokio::test]
async fn test_update_overwrites_all_content_fields() {
    let (service, _) = service_with(Arc::new(MockTranslator::new()));

    let created = service
        .create("hello".to_string(), Lang::new("en"), Lang::new("es"))
        .await
        .unwrap();

    let updated = service
        .update(
            created.id,
            "goodbye".to_string(),
            Lang::new("en"),
            Lang::new("fr"),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.original_text, "goodbye");
    assert_eq!(updated.translated_text, "[TRANSLATED] goodbye");
    assert_eq!(updated.to_language.as_str(), "fr");

    let fetched = service.get(created.id).await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_missing_skips_provider_and_returns_not_found() {
    let translator = Arc::new(MockTranslator::new());
    let (service, store) = service_with(Arc::clone(&translator) as Arc<dyn Translator>);

    let err = service
        .update(9, "hello".to_string(), Lang::new("en"), Lang::new("es"))
        .await
        .expect_err("update should fail");

    assert!(matches!(err, Error::NotFound { id: 9 }));
    assert_eq!(
        translator.call_count(),
        0,
        "provider must not be called for a missing record"
    );
    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_provider_failure_leaves_record_untouched() {
    // Seed through a working translator, then swap in a failing one over
    // the same store.
    let store = Arc::new(SqliteStore::open_in_memory().unwrap());
    let seeding = TranslationService::with_parts(
        Arc::new(MockTranslator::new()),
        Arc::clone(&store) as Arc<dyn TranslationStore>,
        Duration::from_secs(5),
    );

    let created = seeding
        .create("hello".to_string(), Lang::new("en"), Lang::new("es"))
        .await
        .unwrap();

    let service = TranslationService::with_parts(
        Arc::new(MockTranslator::failing()),
        Arc::clone(&store) as Arc<dyn TranslationStore>,
        Duration::from_secs(5),
    );

    let err = service
        .update(
            created.id,
            "goodbye".to_string(),
            Lang::new("en"),
            Lang::new("fr"),
        )
        .await
        .expect_err("update should fail");

    assert!(err.is_translation_failure());

    let fetched = store.find_by_id(created.id).await.unwrap();
    assert_eq!(
        fetched,
        Some(created),
        "failed update must not mutate the stored record"
    );
}

// =============================================================================
// Delete Tests
// =============================================================================

#[tokio::test]
async fn test_delete_then_get_returns_not_found() {
    let (service, _) = service_with(Arc::new(MockTranslator::new()));

    let created = service
        .create("hello".to_string(), Lang::new("en"), Lang::new("es"))
        .await
        .unwrap();

    service.delete(created.id).await.expect("delete should succeed");

    let err = service.get(created.id).await.expect_err("get should fail");
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_missing_returns_not_found() {
    let (service, _) = service_with(Arc::new(MockTranslator::new()));

    let err = service.delete(5).await.expect_err("delete should fail");
    assert!(matches!(err, Error::NotFound { id: 5 }));
}

// =============================================================================
// Timeout Tests
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_stalled_provider_times_out_without_commit() {
    let store = Arc::new(SqliteStore::open_in_memory().unwrap());
    let service = TranslationService::with_parts(
        Arc::new(StalledTranslator),
        Arc::clone(&store) as Arc<dyn TranslationStore>,
        Duration::from_millis(100),
    );

    let err = service
        .create("hello".to_string(), Lang::new("en"), Lang::new("es"))
        .await
        .expect_err("create should time out");

    assert!(matches!(err, Error::TranslationTimeout));
    assert!(store.find_all().await.unwrap().is_empty());
}
