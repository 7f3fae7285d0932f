//! DTOs for the URL encoding endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// `url` is optional at the serde level so that a missing or `null` field
/// is reported as a 400 with a readable message instead of a
/// deserialization failure. Only emptiness is checked here; whether the
/// value is a usable absolute URL is decided by the link service.
#[derive(Debug, Deserialize, Validate)]
pub struct EncodeRequest {
    #[validate(length(min = 1, message = "u must put url"))]
    pub url: Option<String>,
}

/// A freshly created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeResponse {
    /// The submitted URL, byte-for-byte.
    pub decoded_url: String,
    /// The short code to append to the service origin.
    pub encoded_url: String,
}
