//! Request identifier middleware.
//!
//! Every request gets an `X-Request-Id`: a random UUID unless the caller
//! (typically a reverse proxy) already supplied one. The same value is copied
//! onto the response and recorded in the request's tracing span.

use axum::http::HeaderName;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Header carrying the request identifier.
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Assigns a UUID v4 to requests arriving without an `X-Request-Id`.
///
/// Must wrap [`crate::api::middleware::tracing::layer`] so the span sees the id.
pub fn set_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid)
}

/// Copies the request's `X-Request-Id` onto the response.
pub fn propagate_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(REQUEST_ID_HEADER)
}
