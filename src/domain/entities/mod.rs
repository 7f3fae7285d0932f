//! Core domain entities.
//!
//! - [`Link`] - A short code to target URL mapping

pub mod link;

pub use link::Link;
