//! HTTP middleware for request processing and observability.
//!
//! Provides request ids, request counting, and structured access logs.

pub mod request_counter;
pub mod request_id;
pub mod tracing;
