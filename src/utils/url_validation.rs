//! Target URL validation.
//!
//! Links store the submitted URL verbatim, so validation only checks shape and
//! never rewrites the input.

use url::Url;

use crate::domain::LinkError;

/// Checks that `input` is an absolute URL with a scheme and an authority.
///
/// Anything [`Url::parse`] rejects fails, as do host-less URLs such as
/// `mailto:` or `javascript:` links. ASCII control characters are rejected
/// up front: the parser silently strips tabs and newlines, but the stored
/// string is the raw input and must later fit in a `Location` header.
///
/// # Errors
///
/// Returns [`LinkError::InvalidUrl`] describing why the input was rejected.
pub fn validate_target_url(input: &str) -> Result<(), LinkError> {
    let invalid = |reason: String| LinkError::InvalidUrl {
        url: input.to_string(),
        reason,
    };

    if let Some(c) = input.chars().find(|c| c.is_ascii_control()) {
        return Err(invalid(format!(
            "control character {:?} is not allowed",
            c
        )));
    }

    let url = Url::parse(input).map_err(|e| invalid(e.to_string()))?;

    if !url.has_host() {
        return Err(invalid(format!(
            "'{}' URLs without a host are not accepted",
            url.scheme()
        )));
    }

    Ok(())
}
