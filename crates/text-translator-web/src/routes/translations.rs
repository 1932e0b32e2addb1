//! Read, update, and delete routes over persisted translation records.

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use text_translator_core::TranslationRecord;

use super::TranslateBody;
use crate::helpers::{CoreResultExt, RouteResult};
use crate::state::AppState;

/// `GET /translations/{id}` - one record, or 404 with an empty body.
pub async fn get_translation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> RouteResult<Json<TranslationRecord>> {
    state.service.get(id).await.map(Json).or_api_error()
}

/// `GET /translations` - all records; an empty list is a 200.
pub async fn list_translations(
    State(state): State<Arc<AppState>>,
) -> RouteResult<Json<Vec<TranslationRecord>>> {
    state.service.list().await.map(Json).or_api_error()
}

/// `PUT /translations/{id}` - re-translate the new text and overwrite the record.
///
/// The lookup happens before the provider call, so an absent id is a 404
/// and never reaches the provider; a provider failure leaves the stored
/// record untouched and maps to a 500.
pub async fn update_translation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<TranslateBody>,
) -> RouteResult<Json<TranslationRecord>> {
    state
        .service
        .update(id, body.text, body.from.into(), body.to.into())
        .await
        .map(Json)
        .or_api_error()
}

/// `DELETE /translations/{id}` - 204 with an empty body, or 404 when absent.
pub async fn delete_translation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> RouteResult<StatusCode> {
    state.service.delete(id).await.or_api_error()?;
    Ok(StatusCode::NO_CONTENT)
}
