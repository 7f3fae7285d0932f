//! Domain layer containing the link model and its storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`error`] - Error kinds shared by the store and the link service
//!
//! The domain layer has no dependencies on the HTTP layer. The in-memory
//! store implementing [`repositories::LinkRepository`] lives in
//! [`crate::infrastructure::persistence`].

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::LinkError;
