//! Create-and-translate route.

use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, error};

use super::TranslateBody;
use crate::helpers::RouteResult;
use crate::state::AppState;

/// `POST /translate` - translate the submitted text and persist the record.
///
/// A translation failure and a save failure both collapse into the same
/// generic 500; the caller cannot tell the causes apart from the response
/// alone, and the detail is only logged. Kept intentionally - splitting
/// the causes changes the public contract.
pub async fn create_translation(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TranslateBody>,
) -> RouteResult<&'static str> {
    match state
        .service
        .create(body.text, body.from.into(), body.to.into())
        .await
    {
        Ok(record) => {
            debug!("Saved translation {}", record.id);
            Ok("Translation saved successfully")
        }
        Err(e) => {
            error!("Error translating text: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error translating text".to_string(),
            ))
        }
    }
}
