//! Helper types and traits for cleaner route handlers.
//!
//! Provides an extension trait for converting core results into
//! HTTP-appropriate error responses, reducing boilerplate in routes.

use axum::http::StatusCode;
use tracing::error;

use text_translator_core::Error;

/// Standard result type for route handlers.
pub type RouteResult<T> = Result<T, (StatusCode, String)>;

/// Extension trait for converting core results to `RouteResult`.
///
/// `NotFound` becomes a 404 with an empty body; every other core error
/// becomes a generic 500 with the detail logged server-side only.
pub trait CoreResultExt<T> {
    fn or_api_error(self) -> RouteResult<T>;
}

impl<T> CoreResultExt<T> for text_translator_core::Result<T> {
    fn or_api_error(self) -> RouteResult<T> {
        self.map_err(|e| match e {
            Error::NotFound { id } => {
                // 404 carries no body; the id is only interesting server-side
                tracing::debug!("Translation {} not found", id);
                (StatusCode::NOT_FOUND, String::new())
            }
            other => {
                error!("Request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, String::new())
            }
        })
    }
}
