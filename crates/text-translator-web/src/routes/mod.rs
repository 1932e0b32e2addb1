//! HTTP route handlers for the translation API.
//!
//! All routes speak JSON; error responses are empty-bodied except for the
//! create path, which returns a fixed generic message.

mod translate;
mod translations;

pub use translate::create_translation;
pub use translations::{
    delete_translation, get_translation, list_translations, update_translation,
};

use axum::{
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::state::AppState;

/// Request body for create and update.
///
/// Canonical shape is `{text, from, to}`; the long-form field names used
/// by older clients are accepted as aliases of the same fields.
#[derive(Debug, Deserialize)]
pub struct TranslateBody {
    #[serde(alias = "originalText")]
    pub text: String,
    #[serde(alias = "fromLanguage")]
    pub from: String,
    #[serde(alias = "toLanguage")]
    pub to: String,
}

/// Build the API router over the shared application state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/translate", post(create_translation))
        .route("/translations", get(list_translations))
        .route(
            "/translations/{id}",
            get(get_translation)
                .put(update_translation)
                .delete(delete_translation),
        )
        .with_state(state)
}
