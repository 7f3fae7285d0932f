//! Link issuance, resolution, and removal service.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::LinkError;
use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_validation::validate_target_url;

/// Default number of candidate codes tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Service for creating, resolving, and deleting short links.
///
/// Owns no state of its own beyond configuration: links live in the
/// repository, candidate codes come from the generator.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `max_attempts` bounds the collision retry loop in
    /// [`Self::create_short_link`]; values below 1 are raised to 1.
    pub fn new(
        link_repository: Arc<L>,
        generator: Arc<dyn CodeGenerator>,
        max_attempts: usize,
    ) -> Self {
        Self {
            link_repository,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Shortens `target_url` under a freshly generated, unique code.
    ///
    /// # Code Generation
    ///
    /// - The URL is validated before any code is generated
    /// - Each candidate is inserted with an atomic check-and-set
    /// - A taken code triggers a retry with a new candidate, up to the
    ///   configured number of attempts
    ///
    /// The URL is stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::InvalidUrl`] if the URL is not a well-formed
    /// absolute URL. Nothing is stored in that case.
    ///
    /// Returns [`LinkError::GenerationExhausted`] if every candidate collided.
    pub async fn create_short_link(&self, target_url: String) -> Result<Link, LinkError> {
        validate_target_url(&target_url)?;

        for attempt in 1..=self.max_attempts {
            let link = Link::new(self.generator.generate(), target_url.as_str());

            match self.link_repository.insert(link.clone()).await {
                Ok(()) => {
                    info!(code = %link.code, attempt, "Short link created");
                    return Ok(link);
                }
                Err(LinkError::AlreadyExists(code)) => {
                    warn!(%code, attempt, "Short code collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(LinkError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Returns the target URL stored under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if no link uses this code.
    pub async fn resolve(&self, code: &str) -> Result<String, LinkError> {
        let target_url = self.link_repository.find_by_code(code).await?;
        debug!(code, "Short link resolved");
        Ok(target_url)
    }

    /// Deletes the link stored under `code`, freeing the code for reuse.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if no link uses this code.
    pub async fn delete_link(&self, code: &str) -> Result<(), LinkError> {
        self.link_repository.delete(code).await?;
        info!(code, "Short link deleted");
        Ok(())
    }

    /// Snapshot of all stored links, keyed by code.
    pub async fn list_links(&self) -> BTreeMap<String, String> {
        self.link_repository.list_all().await
    }

    /// Number of links currently stored.
    pub async fn link_count(&self) -> usize {
        self.link_repository.count().await
    }
}
