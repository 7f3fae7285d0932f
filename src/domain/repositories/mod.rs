//! Repository trait definitions for the domain layer.
//!
//! - [`LinkRepository`] - Short link storage: insert, lookup, delete, enumerate
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
