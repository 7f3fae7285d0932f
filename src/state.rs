//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::InMemoryLinkRepository;
use crate::infrastructure::request_metrics::RequestMetrics;
use crate::utils::code_generator::RandomCodeGenerator;

/// Link service wired to the in-memory store.
pub type AppLinkService = LinkService<InMemoryLinkRepository>;

/// State shared by all request handlers.
///
/// Cloning is cheap: every field is reference-counted. Each instance owns an
/// independent store, so tests can build as many isolated states as they need.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    pub metrics: Arc<RequestMetrics>,
}

impl AppState {
    pub fn new(link_service: Arc<AppLinkService>, metrics: Arc<RequestMetrics>) -> Self {
        Self {
            link_service,
            metrics,
        }
    }

    /// Builds a fresh store, random code generator and metrics from `config`.
    pub fn from_config(config: &Config) -> Self {
        let link_service = LinkService::new(
            Arc::new(InMemoryLinkRepository::new()),
            Arc::new(RandomCodeGenerator::new(config.code_length)),
            config.max_encode_attempts,
        );

        Self::new(Arc::new(link_service), Arc::new(RequestMetrics::new()))
    }
}
