//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations by coordinating the code generator,
//! URL validation, and repository calls, and offer a small API to HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link issuance, resolution, and removal

pub mod services;
