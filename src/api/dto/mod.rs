//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; request DTOs use
//! validator for input validation.

pub mod encode;
pub mod status;
