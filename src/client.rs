//! The Printful API client.
//!
//! [`PrintfulClient`] runs every call through one pipeline: resolve the URL,
//! send the request, check the status, decode the JSON envelope and return
//! its `result` field. The last raw and decoded responses are kept on the
//! instance for introspection.
//!
//! Endpoint methods (`order_list`, `create_order`, ...) live in
//! [`crate::resources`].

use std::collections::HashMap;

use crate::clients::{
    extract_result, ApiRequestError, HttpClient, HttpMethod, HttpRequest, HttpResponse, Paging,
};
use crate::config::{ApiKey, PrintfulConfig};
use crate::error::ConfigError;

/// Synchronous client for the Printful API.
///
/// Each instance owns its connection and its last-response slots. Request
/// methods take `&mut self`, so one instance is never used by two callers at
/// once; create one client per thread when issuing requests concurrently.
///
/// # Example
///
/// ```rust,ignore
/// use printful_api::PrintfulClient;
///
/// let mut client = PrintfulClient::new("abc:def", true)?;
///
/// let orders = client.order_list(None)?;
/// println!("{} orders in total", client.item_count().unwrap_or(0));
/// ```
#[derive(Debug)]
pub struct PrintfulClient {
    http_client: HttpClient,
    last_response_raw: Option<HttpResponse>,
    last_response: Option<serde_json::Value>,
}

// Verify PrintfulClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PrintfulClient>();
};

impl PrintfulClient {
    /// Creates a client for the production API.
    ///
    /// # Arguments
    ///
    /// * `api_key` - The API key from Store > API, two strings separated by `:`
    /// * `connect` - Whether to open a connection; `false` builds a client
    ///   that never performs I/O
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] or [`ConfigError::InvalidApiKey`]
    /// if the key is malformed. No connection is attempted in that case.
    pub fn new(api_key: &str, connect: bool) -> Result<Self, ConfigError> {
        let config = PrintfulConfig::builder()
            .api_key(ApiKey::new(api_key)?)
            .connect(connect)
            .build()?;

        Ok(Self::from_config(&config))
    }

    /// Creates a client from a full configuration.
    #[must_use]
    pub fn from_config(config: &PrintfulConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
            last_response_raw: None,
            last_response: None,
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the raw response of the last request, if one was received.
    ///
    /// Reset at the start of every request, so a transport failure leaves
    /// it empty.
    #[must_use]
    pub const fn last_response_raw(&self) -> Option<&HttpResponse> {
        self.last_response_raw.as_ref()
    }

    /// Returns the decoded JSON document of the last request, if it decoded.
    #[must_use]
    pub const fn last_response(&self) -> Option<&serde_json::Value> {
        self.last_response.as_ref()
    }

    /// Returns the pagination metadata of the last response, if any.
    #[must_use]
    pub fn paging(&self) -> Option<Paging> {
        self.last_response.as_ref().and_then(Paging::from_envelope)
    }

    /// Returns the total item count of the last request if it supports
    /// paging (e.g. the order list), or `None` otherwise.
    #[must_use]
    pub fn item_count(&self) -> Option<u64> {
        self.last_response
            .as_ref()?
            .get("paging")?
            .get("total")?
            .as_u64()
    }

    /// Sends a request and returns the `result` field of the response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiRequestError`] if the request fails at any stage:
    /// transport (`1.0`), status (`1.1`), JSON decoding (`1.2`) or a missing
    /// `result` field (`1.3`).
    pub fn request(&mut self, request: &HttpRequest) -> Result<serde_json::Value, ApiRequestError> {
        self.last_response = None;
        self.last_response_raw = None;

        let response = self.http_client.request(request)?;
        let response = self.last_response_raw.insert(response);

        let document = match response.json() {
            Ok(document) => document,
            Err(err) => {
                tracing::warn!(
                    method = %request.http_method,
                    path = %request.path,
                    code = err.code(),
                    "Printful API request failed: {err}"
                );
                return Err(err);
            }
        };

        let document = self.last_response.insert(document);
        extract_result(document).map_err(|err| {
            tracing::warn!(
                method = %request.http_method,
                path = %request.path,
                "Printful API response has no result field"
            );
            err
        })
    }

    /// Sends a request built from its parts.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn execute(
        &mut self,
        method: HttpMethod,
        path: &str,
        query: Option<HashMap<String, String>>,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ApiRequestError> {
        let request = HttpRequest {
            http_method: method,
            path: path.to_string(),
            body,
            query,
        };
        self.request(&request)
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn get(
        &mut self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, ApiRequestError> {
        self.execute(HttpMethod::Get, path, query, None)
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn delete(
        &mut self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, ApiRequestError> {
        self.execute(HttpMethod::Delete, path, query, None)
    }

    /// Sends a POST request to the specified path.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn post(
        &mut self,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, ApiRequestError> {
        self.execute(HttpMethod::Post, path, query, body)
    }

    /// Sends a PUT request to the specified path.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn put(
        &mut self,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, ApiRequestError> {
        self.execute(HttpMethod::Put, path, query, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn offline_client() -> PrintfulClient {
        PrintfulClient::new("abc:def", false).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_key() {
        let err = PrintfulClient::new("", true).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);
        assert_eq!(err.code(), "0.1");
    }

    #[test]
    fn test_new_rejects_key_without_separator() {
        let err = PrintfulClient::new("abcdef", true).unwrap_err();
        assert_eq!(err, ConfigError::InvalidApiKey);
        assert_eq!(err.code(), "0.2");
    }

    #[test]
    fn test_new_without_connect_skips_connection() {
        let client = offline_client();
        assert!(!client.http_client().is_connected());
        assert!(client.last_response().is_none());
        assert!(client.last_response_raw().is_none());
    }

    #[test]
    fn test_request_without_connection_is_transport_error() {
        let mut client = offline_client();
        let err = client.get("orders", None).unwrap_err();
        assert!(matches!(err, ApiRequestError::NotConnected));
        assert_eq!(err.code(), "1.0");
        assert!(client.last_response_raw().is_none());
    }

    #[test]
    fn test_item_count_without_request_is_none() {
        let client = offline_client();
        assert_eq!(client.item_count(), None);
        assert_eq!(client.paging(), None);
    }

    #[test]
    fn test_item_count_reads_paging_total() {
        let mut client = offline_client();
        client.last_response = Some(json!({
            "result": [{"id": 1}],
            "paging": {"total": 1, "offset": 0, "limit": 20}
        }));

        assert_eq!(client.item_count(), Some(1));
        assert_eq!(client.item_count(), Some(1));
        assert_eq!(client.paging().unwrap().limit, 20);
    }

    #[test]
    fn test_item_count_without_paging_is_none() {
        let mut client = offline_client();
        client.last_response = Some(json!({"result": {"id": 42}}));
        assert_eq!(client.item_count(), None);

        client.last_response = Some(json!({"result": [], "paging": {"offset": 0}}));
        assert_eq!(client.item_count(), None);
    }

    #[test]
    fn test_failed_request_clears_previous_response() {
        let mut client = offline_client();
        client.last_response = Some(json!({"result": [], "paging": {"total": 7}}));

        assert!(client.get("orders", None).is_err());
        assert!(client.last_response().is_none());
        assert_eq!(client.item_count(), None);
    }

    #[test]
    fn test_clients_do_not_share_state() {
        let mut first = offline_client();
        let second = offline_client();

        first.last_response = Some(json!({"result": [], "paging": {"total": 3}}));

        assert_eq!(first.item_count(), Some(3));
        assert_eq!(second.item_count(), None);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PrintfulClient>();
    }
}
