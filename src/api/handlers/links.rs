//! Handlers for link enumeration and removal.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored link.
///
/// # Endpoint
///
/// `GET /all`
///
/// # Response
///
/// A JSON object mapping short codes to target URLs:
///
/// ```json
/// { "k3x9qa": "http://example.com/" }
/// ```
pub async fn list_links_handler(State(state): State<AppState>) -> Json<BTreeMap<String, String>> {
    Json(state.link_service.list_links().await)
}

/// Deletes a short link. The code may be issued again afterwards.
///
/// # Endpoint
///
/// `DELETE /{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}
