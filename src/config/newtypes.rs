//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Printful API key.
///
/// The key issued in the Printful dashboard (Store > API) is two strings
/// separated by a single `:`. They are used as the user and password of
/// HTTP basic authentication.
///
/// # Security
///
/// The `Debug` implementation masks the password part, displaying only
/// `ApiKey(user:*****)`.
///
/// # Example
///
/// ```rust
/// use printful_api::ApiKey;
///
/// let key = ApiKey::new("abc:def").unwrap();
/// assert_eq!(key.user(), "abc");
/// assert_eq!(key.password(), "def");
/// assert_eq!(format!("{:?}", key), "ApiKey(abc:*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    key: String,
    separator: usize,
}

impl ApiKey {
    const SEPARATOR: char = ':';

    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if the key is empty.
    /// Returns [`ConfigError::InvalidApiKey`] if the key does not contain
    /// exactly one `:` with non-empty text on both sides.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let separator = key.find(Self::SEPARATOR).ok_or(ConfigError::InvalidApiKey)?;
        let (user, rest) = key.split_at(separator);
        let password = &rest[Self::SEPARATOR.len_utf8()..];

        if user.is_empty() || password.is_empty() || password.contains(Self::SEPARATOR) {
            return Err(ConfigError::InvalidApiKey);
        }

        Ok(Self { key, separator })
    }

    /// Returns the user part of the key.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.key[..self.separator]
    }

    /// Returns the password part of the key.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.key[self.separator + Self::SEPARATOR.len_utf8()..]
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({}:*****)", self.user())
    }
}

/// A validated base URL for the Printful API.
///
/// The URL must use the `http` or `https` scheme and name a host. It is
/// normalized to end with `/` so relative endpoint paths can be appended
/// directly.
///
/// # Example
///
/// ```rust
/// use printful_api::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:3000").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:3000/");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// The production Printful API endpoint.
    pub const DEFAULT: &'static str = "https://api.printful.com/";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let mut url = url.trim().to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = url[..scheme_end].to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start || url.contains(['?', '#']) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        if !url.ends_with('/') {
            url.push('/');
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: Self::DEFAULT.len() - 1,
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
