//! Utility functions for code generation and URL validation.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validation`] - Absolute URL checks for link targets

pub mod code_generator;
pub mod url_validation;
