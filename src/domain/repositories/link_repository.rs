//! Repository trait for short link data access.

use std::collections::BTreeMap;

use crate::domain::entities::Link;
use crate::domain::error::LinkError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// Implementations must be safe to share between concurrently running
/// request handlers. Each method is atomic on its own; in particular
/// [`LinkRepository::insert`] checks for an existing code and writes the new
/// link as a single step.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a new link.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::AlreadyExists`] if the code is already taken. The
    /// existing link is left untouched.
    async fn insert(&self, link: Link) -> Result<(), LinkError>;

    /// Returns the target URL registered for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if no link uses this code.
    async fn find_by_code(&self, code: &str) -> Result<String, LinkError>;

    /// Removes the link registered for `code`, freeing the code for reuse.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if no link uses this code.
    async fn delete(&self, code: &str) -> Result<(), LinkError>;

    /// Returns an owned snapshot of every stored link, keyed by code.
    ///
    /// Later writes to the repository do not affect a returned snapshot.
    async fn list_all(&self) -> BTreeMap<String, String>;

    /// Number of links currently stored.
    async fn count(&self) -> usize;
}
