//! # tinylink
//!
//! A small URL shortening service built with Axum. Links live in process
//! memory and are lost on restart.
//!
//! ## Architecture
//!
//! The crate separates layers the usual way:
//!
//! - **Domain Layer** ([`domain`]) - Link entity, error kinds and the repository trait
//! - **Application Layer** ([`application`]) - Encode orchestration with bounded collision retry
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and request metrics
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `POST /encode-url` - Shorten `{"url": "..."}` into a 6-character base-36 code
//! - `GET /{code}` - 302 redirect to the stored URL
//! - `DELETE /{code}` - Remove a link
//! - `GET /all`, `GET /metrics`, `GET /hi` - Inspection and liveness
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:5000"   # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::LinkError;
    pub use crate::domain::entities::Link;
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryLinkRepository;
    pub use crate::infrastructure::request_metrics::RequestMetrics;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
}
