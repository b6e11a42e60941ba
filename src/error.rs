//! Error types for client configuration.
//!
//! This module contains the error type raised while validating the API key
//! and the rest of the client configuration. Every variant is produced before
//! any network activity takes place.
//!
//! # Error Codes
//!
//! Each variant carries a short code, available through [`ConfigError::code`],
//! so callers can discriminate causes programmatically:
//!
//! | Code  | Variant                               |
//! |-------|---------------------------------------|
//! | `0.1` | [`ConfigError::MissingApiKey`]        |
//! | `0.2` | [`ConfigError::InvalidApiKey`]        |
//! | `0.3` | [`ConfigError::InvalidBaseUrl`]       |
//! | `0.4` | [`ConfigError::MissingRequiredField`] |
//!
//! # Example
//!
//! ```rust
//! use printful_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::MissingApiKey)));
//! assert_eq!(result.unwrap_err().code(), "0.1");
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a Printful client.
///
/// Raised by [`ApiKey::new`](crate::ApiKey::new),
/// [`BaseUrl::new`](crate::BaseUrl::new) and the config builder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No API key was provided.
    #[error("No Printful API key provided. The key can be found under Store > API in the Printful dashboard.")]
    MissingApiKey,

    /// The API key does not have the `user:pass` shape.
    #[error("Invalid Printful API key. Expected two non-empty parts separated by ':'.")]
    InvalidApiKey,

    /// The base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an http(s) URL with a host (e.g., 'https://api.printful.com/').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

impl ConfigError {
    /// Returns the short error code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "0.1",
            Self::InvalidApiKey => "0.2",
            Self::InvalidBaseUrl { .. } => "0.3",
            Self::MissingRequiredField { .. } => "0.4",
        }
    }
}
