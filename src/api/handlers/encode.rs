//! Handler for the URL encoding endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;
use validator::Validate;

use crate::api::dto::encode::{EncodeRequest, EncodeResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a long URL.
///
/// # Endpoint
///
/// `POST /encode-url`
///
/// # Request Body
///
/// ```json
/// { "url": "http://example.com/" }
/// ```
///
/// # Response
///
/// ```json
/// { "decodedUrl": "http://example.com/", "encodedUrl": "k3x9qa" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON, `url` is missing, null or
/// empty, or `url` is not a well-formed absolute URL. No link is stored.
///
/// Returns 500 Internal Server Error if no unique code could be generated.
pub async fn encode_handler(
    State(state): State<AppState>,
    payload: Result<Json<EncodeRequest>, JsonRejection>,
) -> Result<Json<EncodeResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let target_url = payload
        .url
        .ok_or_else(|| AppError::bad_request("u must put url", json!({})))?;

    let link = state.link_service.create_short_link(target_url).await?;

    Ok(Json(EncodeResponse {
        decoded_url: link.target_url,
        encoded_url: link.code,
    }))
}
