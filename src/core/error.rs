//! Error handling for generator configuration.
//!
//! This module defines the `Error` type raised while loading and validating
//! [`GeneratorConfig`](crate::core::config::GeneratorConfig), along with a
//! `Result` alias. It uses `thiserror` and converts from the I/O and TOML
//! errors met on the way.
//!
//! # Examples
//!
//! ```
//! use restdocgen::core::error::{Error, Result};
//!
//! fn check_depth(depth: usize) -> Result<()> {
//!     if depth == 0 {
//!         return Err(Error::config("max_depth must be at least 1"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_depth(0).is_err());
//! ```

use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration error
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
