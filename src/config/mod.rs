//! Configuration types for the Printful API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PrintfulConfig`]: The configuration struct holding all client settings
//! - [`PrintfulConfigBuilder`]: A builder for constructing [`PrintfulConfig`] instances
//! - [`ApiKey`]: A validated `user:pass` API key with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use printful_api::{PrintfulConfig, ApiKey, BaseUrl};
//!
//! let config = PrintfulConfig::builder()
//!     .api_key(ApiKey::new("abc:def").unwrap())
//!     .base_url(BaseUrl::new("https://api.printful.com").unwrap())
//!     .user_agent_prefix("MyShop/2.1")
//!     .build()
//!     .unwrap();
//!
//! assert!(config.connect());
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use crate::error::ConfigError;

/// Configuration for a [`PrintfulClient`](crate::PrintfulClient).
///
/// # Thread Safety
///
/// `PrintfulConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct PrintfulConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    connect: bool,
}

impl PrintfulConfig {
    /// Creates a new builder for constructing a `PrintfulConfig`.
    #[must_use]
    pub fn builder() -> PrintfulConfigBuilder {
        PrintfulConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URL every relative path is resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns whether the client should open a connection on construction.
    ///
    /// When `false` the client is built without a transport. Every request
    /// then fails with a transport error, which is useful for test doubles.
    #[must_use]
    pub const fn connect(&self) -> bool {
        self.connect
    }
}

// Verify PrintfulConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PrintfulConfig>();
};

/// Builder for constructing [`PrintfulConfig`] instances.
///
/// `api_key` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `base_url`: `https://api.printful.com/`
/// - `user_agent_prefix`: `None`
/// - `connect`: `true`
#[derive(Debug, Default)]
pub struct PrintfulConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    connect: Option<bool>,
}

impl PrintfulConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets whether the client opens a connection on construction.
    #[must_use]
    pub const fn connect(mut self, connect: bool) -> Self {
        self.connect = Some(connect);
        self
    }

    /// Builds the [`PrintfulConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<PrintfulConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(PrintfulConfig {
            api_key,
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            connect: self.connect.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = PrintfulConfigBuilder::new().connect(false).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = PrintfulConfig::builder()
            .api_key(ApiKey::new("abc:def").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "https://api.printful.com/");
        assert!(config.user_agent_prefix().is_none());
        assert!(config.connect());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let base_url = BaseUrl::new("http://localhost:9000").unwrap();

        let config = PrintfulConfig::builder()
            .api_key(ApiKey::new("abc:def").unwrap())
            .base_url(base_url.clone())
            .user_agent_prefix("MyShop/2.1")
            .connect(false)
            .build()
            .unwrap();

        assert_eq!(config.base_url(), &base_url);
        assert_eq!(config.user_agent_prefix(), Some("MyShop/2.1"));
        assert!(!config.connect());
        assert_eq!(config.api_key().user(), "abc");
    }

    #[test]
    fn test_config_debug_does_not_leak_password() {
        let config = PrintfulConfig::builder()
            .api_key(ApiKey::new("abc:hunter2").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("PrintfulConfig"));
        assert!(!debug_str.contains("hunter2"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PrintfulConfig>();
    }
}
