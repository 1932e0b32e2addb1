use thiserror::Error;

/// Unified error type for text-translator-core
///
/// This enum encompasses all error cases that can occur in the library:
/// - Translation operations (API requests, responses, rate limiting)
/// - Store operations (lookups, writes, schema initialization)
/// - Configuration operations (loading, validation)
/// - General I/O operations
#[derive(Error, Debug)]
pub enum Error {
    // ==========================================================================
    // Translation Errors
    // ==========================================================================
    /// Translation API request failed
    #[error("translation API request failed: {0}")]
    TranslationRequest(String),

    /// Invalid response from translation API
    #[error("invalid translation API response: {0}")]
    TranslationInvalidResponse(String),

    /// Rate limited by translation API
    #[error("translation rate limited{}", retry_after.map(|s| format!(", retry after {s} seconds")).unwrap_or_default())]
    TranslationRateLimited { retry_after: Option<u64> },

    /// Translation request timed out
    #[error("translation request timed out")]
    TranslationTimeout,

    // ==========================================================================
    // Store Errors
    // ==========================================================================
    /// No translation record exists with the given identifier
    #[error("translation {id} not found")]
    NotFound { id: i64 },

    /// Store-level failure (I/O, schema, query execution)
    #[error("store error: {0}")]
    Store(String),

    // ==========================================================================
    // Configuration Errors
    // ==========================================================================
    /// Failed to load configuration file
    #[error("failed to load config: {0}")]
    ConfigLoad(String),

    // ==========================================================================
    // I/O Errors
    // ==========================================================================
    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error originated in the translation provider call.
    ///
    /// Lets callers map the whole provider-failure family without
    /// enumerating variants.
    pub const fn is_translation_failure(&self) -> bool {
        matches!(
            self,
            Self::TranslationRequest(_)
                | Self::TranslationInvalidResponse(_)
                | Self::TranslationRateLimited { .. }
                | Self::TranslationTimeout
        )
    }
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        Self::Store(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
