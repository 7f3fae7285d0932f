//! Error kinds produced by the link store and link service.

use thiserror::Error;

/// Failure modes of short link issuance and lookup.
///
/// `AlreadyExists` never reaches HTTP clients: the encode loop in
/// [`crate::application::services::LinkService`] consumes it and retries
/// with a fresh code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// The supplied target is not a well-formed absolute URL.
    #[error("url malformed: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// No live link is registered under this code.
    #[error("no short link registered for code '{0}'")]
    NotFound(String),

    /// The code is already taken by a live link.
    #[error("short code '{0}' is already taken")]
    AlreadyExists(String),

    /// Every generated candidate collided with an existing link.
    #[error("failed to generate a unique short code after {attempts} attempts")]
    GenerationExhausted { attempts: usize },
}
