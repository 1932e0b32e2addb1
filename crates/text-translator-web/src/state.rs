use anyhow::Result;
use text_translator_core::{AppConfig, TranslationService};

/// Global application state.
///
/// The service is built once at startup and shared immutably across
/// requests; no per-request state lives here.
pub struct AppState {
    pub service: TranslationService,
}

impl AppState {
    /// Wire up the real provider and the configured store.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let service = TranslationService::new(config)
            .map_err(|e| anyhow::anyhow!("Failed to create translation service: {e}"))?;

        Ok(Self { service })
    }

    /// Build state around an existing service (for tests with fakes).
    pub const fn with_service(service: TranslationService) -> Self {
        Self { service }
    }
}
