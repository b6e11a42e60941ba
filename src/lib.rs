//! # Printful API Rust Client
//!
//! A synchronous Rust client for the Printful print-on-demand API, providing
//! validated configuration, HTTP basic authentication and one method per
//! REST endpoint.
//!
//! ## Overview
//!
//! This crate provides:
//! - Validated configuration via [`PrintfulConfig`] and [`PrintfulConfigBuilder`]
//! - A validated `user:pass` [`ApiKey`] newtype
//! - A blocking [`PrintfulClient`] that unwraps the `result` field of every
//!   response envelope
//! - Typed errors: [`ConfigError`] before any I/O, [`ApiRequestError`] after
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use printful_api::PrintfulClient;
//!
//! // The key is found under Store > API in the Printful dashboard
//! let mut client = PrintfulClient::new("abc:def", true)?;
//!
//! let orders = client.order_list(None)?;
//! if let Some(total) = client.item_count() {
//!     println!("Showing {} of {total} orders", orders.as_array().map_or(0, Vec::len));
//! }
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use printful_api::{PrintfulClient, PrintfulConfig, ApiKey, BaseUrl};
//!
//! let config = PrintfulConfig::builder()
//!     .api_key(ApiKey::new("abc:def").unwrap())
//!     .base_url(BaseUrl::new("https://api.printful.com").unwrap())
//!     .user_agent_prefix("MyShop/2.1")
//!     .connect(false)
//!     .build()
//!     .unwrap();
//!
//! let client = PrintfulClient::from_config(&config);
//! assert!(client.last_response().is_none());
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use printful_api::{ConfigError, PrintfulClient};
//!
//! let err = PrintfulClient::new("no-separator", true).unwrap_err();
//! assert_eq!(err, ConfigError::InvalidApiKey);
//! assert_eq!(err.code(), "0.2");
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: connection and last response live on each client instance
//! - **Fail-fast validation**: the API key is validated before any connection is made
//! - **No hidden retries**: every failure surfaces to the caller immediately
//! - **Blocking I/O**: no async runtime is required

mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

pub use client::PrintfulClient;
pub use config::{ApiKey, BaseUrl, PrintfulConfig, PrintfulConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiRequestError, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    Paging, SDK_VERSION,
};
