//! HTTP layer translating requests into link service operations.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request id, request counting, and tracing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
