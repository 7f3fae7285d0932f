//! Repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryLinkRepository`] - Link storage in a lock-guarded map

pub mod memory_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
