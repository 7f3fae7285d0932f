//! Link entity representing a shortened URL mapping.

/// A short code paired with the URL it redirects to.
///
/// Links are immutable once stored. The target URL is kept exactly as it was
/// submitted; no normalization is applied, so two spellings of the same
/// address become two separate links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub target_url: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(code: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            target_url: target_url.into(),
        }
    }
}
