//! HTTP client for Printful API communication.
//!
//! This module provides the [`HttpClient`] type, which owns the single
//! authenticated connection of a Printful client and performs the raw
//! HTTP exchange. It does not interpret status codes or bodies.

use std::collections::HashMap;
use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::clients::errors::ApiRequestError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiKey, BaseUrl, PrintfulConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Blocking HTTP client for the Printful API.
///
/// The client handles:
/// - URL resolution against the configured base URL
/// - Default headers: `User-Agent`, `Content-Type: application/json` and
///   HTTP basic `Authorization` derived from the API key
/// - Conversion of transport failures into [`ApiRequestError::Transport`]
///
/// The underlying connection is created once, in [`HttpClient::new`]. When
/// the configuration disables connecting, no connection is created and
/// every request fails with [`ApiRequestError::NotConnected`].
///
/// # Example
///
/// ```rust
/// use printful_api::{ApiKey, PrintfulConfig};
/// use printful_api::clients::HttpClient;
///
/// let config = PrintfulConfig::builder()
///     .api_key(ApiKey::new("abc:def").unwrap())
///     .connect(false)
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// assert!(!client.is_connected());
/// assert_eq!(client.base_url().as_ref(), "https://api.printful.com/");
/// ```
pub struct HttpClient {
    /// The internal reqwest client, absent when built without a connection.
    client: Option<reqwest::blocking::Client>,
    /// Base URL relative paths are resolved against.
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &PrintfulConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Printful API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            Self::basic_auth(config.api_key()),
        );

        let client = if config.connect() {
            Some(reqwest::blocking::Client::new())
        } else {
            tracing::debug!("Printful client created without a connection");
            None
        };

        Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns `true` if the client holds a connection.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    /// Sends a request and returns the raw response.
    ///
    /// Any status code is returned as a response; interpreting it is up to
    /// the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ApiRequestError::NotConnected`] if the client was built
    /// without a connection, and [`ApiRequestError::Transport`] if the
    /// exchange fails (connection refused, DNS failure, invalid header...).
    pub fn request(&self, request: &HttpRequest) -> Result<HttpResponse, ApiRequestError> {
        let client = self.client.as_ref().ok_or(ApiRequestError::NotConnected)?;

        let url = request.url(&self.base_url);
        tracing::debug!(method = %request.http_method, %url, "Sending Printful API request");

        let mut req_builder = client.request(request.http_method.as_reqwest(), &url);

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.json_body() {
            req_builder = req_builder.body(body);
        }

        let res = req_builder
            .send()
            .map_err(|source| ApiRequestError::Transport { source })?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res
            .bytes()
            .map_err(|source| ApiRequestError::Transport { source })?;

        Ok(HttpResponse::new(code, headers, body.to_vec()))
    }

    /// Builds the HTTP basic `Authorization` header value for a key.
    fn basic_auth(api_key: &ApiKey) -> String {
        let credentials = format!("{}:{}", api_key.user(), api_key.password());
        format!("Basic {}", STANDARD.encode(credentials))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header_names: Vec<_> = self.default_headers.keys().collect();
        header_names.sort();

        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("connected", &self.is_connected())
            .field("default_headers", &header_names)
            .finish()
    }
}
