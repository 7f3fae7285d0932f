//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `PORT` - Port to bind on all interfaces, used only when `LISTEN` is unset
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CODE_LENGTH` - Length of generated short codes (default: 6, range: 6-32)
//! - `MAX_ENCODE_ATTEMPTS` - Candidate codes tried per encode before giving up
//!   (default: 10, range: 1-100)
//!
//! All variables are optional.

use anyhow::Result;
use std::env;

use crate::application::services::link_service::DEFAULT_MAX_ATTEMPTS;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, MIN_CODE_LENGTH};

const DEFAULT_PORT: u16 = 5000;
const MAX_CODE_LENGTH: usize = 32;
const MAX_ENCODE_ATTEMPTS: usize = 100;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Length of generated short codes.
    pub code_length: usize,
    /// Upper bound on the collision retry loop of a single encode request.
    pub max_encode_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: format!("0.0.0.0:{DEFAULT_PORT}"),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            code_length: DEFAULT_CODE_LENGTH,
            max_encode_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults; range checks
    /// happen in [`Config::validate`].
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = Self::load_listen_addr();
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let code_length = env::var("CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.code_length);

        let max_encode_attempts = env::var("MAX_ENCODE_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_encode_attempts);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            code_length,
            max_encode_attempts,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:$PORT`
    /// 3. `0.0.0.0:5000`
    fn load_listen_addr() -> String {
        if let Ok(addr) = env::var("LISTEN") {
            return addr;
        }

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        format!("0.0.0.0:{port}")
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` has no port
    /// - `code_length` is outside 6-32
    /// - `max_encode_attempts` is outside 1-100
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between {} and {}, got {}",
                MIN_CODE_LENGTH,
                MAX_CODE_LENGTH,
                self.code_length
            );
        }

        if self.max_encode_attempts == 0 || self.max_encode_attempts > MAX_ENCODE_ATTEMPTS {
            anyhow::bail!(
                "MAX_ENCODE_ATTEMPTS must be between 1 and {}, got {}",
                MAX_ENCODE_ATTEMPTS,
                self.max_encode_attempts
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Code length: {}", self.code_length);
        tracing::info!("  Max encode attempts: {}", self.max_encode_attempts);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
