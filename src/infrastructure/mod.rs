//! Infrastructure layer for concrete storage and observability.
//!
//! # Modules
//!
//! - [`persistence`] - Repository implementations (in-memory link store)
//! - [`request_metrics`] - Request counter and uptime collaborator

pub mod persistence;
pub mod request_metrics;
