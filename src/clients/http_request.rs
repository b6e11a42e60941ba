//! HTTP request types for the Printful API client.
//!
//! This module provides the [`HttpRequest`] descriptor and its builder. A
//! descriptor is created per call and discarded after use.

use std::collections::HashMap;
use std::fmt;

use crate::config::BaseUrl;

/// HTTP methods used by the Printful API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and running calculations.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for cancelling or removing resources.
    Delete,
}

impl HttpMethod {
    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A request to be sent to the Printful API.
///
/// `path` is either relative to the configured base URL (`orders/12`) or a
/// fully-qualified URL, which is used verbatim.
///
/// # Example
///
/// ```rust
/// use printful_api::{BaseUrl, HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "orders")
///     .body(json!({"recipient": {"country_code": "US"}}))
///     .query_param("confirm", "1")
///     .build();
///
/// assert_eq!(
///     request.url(&BaseUrl::default()),
///     "https://api.printful.com/orders?confirm=1"
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the base URL) or a full URL.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Resolves the full request URL against `base`.
    ///
    /// Paths starting with `http` are used verbatim. Query parameters are
    /// URL-encoded and sorted by key so the resulting URL is deterministic.
    #[must_use]
    pub fn url(&self, base: &BaseUrl) -> String {
        let mut url = if self.path.starts_with("http") {
            self.path.clone()
        } else {
            format!("{}{}", base.as_ref(), self.path)
        };

        if let Some(query) = self.query.as_ref().filter(|q| !q.is_empty()) {
            let mut pairs: Vec<_> = query.iter().collect();
            pairs.sort();

            let encoded = pairs
                .into_iter()
                .map(|(key, value)| {
                    format!(
                        "{}={}",
                        urlencoding::encode(key),
                        urlencoding::encode(value)
                    )
                })
                .collect::<Vec<_>>()
                .join("&");

            url.push('?');
            url.push_str(&encoded);
        }

        url
    }

    /// Serializes the body to a JSON string.
    ///
    /// Returns `None` when there is no body or the body is empty (`null`,
    /// `{}` or `[]`); such requests are sent without a body.
    #[must_use]
    pub fn json_body(&self) -> Option<String> {
        let body = self.body.as_ref()?;
        let is_empty = match body {
            serde_json::Value::Null => true,
            serde_json::Value::Object(map) => map.is_empty(),
            serde_json::Value::Array(items) => items.is_empty(),
            _ => false,
        };

        if is_empty {
            None
        } else {
            Some(body.to_string())
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> BaseUrl {
        BaseUrl::new("https://api.printful.com").unwrap()
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_http_method_maps_to_reqwest() {
        assert_eq!(HttpMethod::Get.as_reqwest(), reqwest::Method::GET);
        assert_eq!(HttpMethod::Delete.as_reqwest(), reqwest::Method::DELETE);
    }

    #[test]
    fn test_relative_path_is_joined_to_base_url() {
        let request = HttpRequest::builder(HttpMethod::Get, "orders/12").build();
        assert_eq!(request.url(&base()), "https://api.printful.com/orders/12");
    }

    #[test]
    fn test_full_url_is_used_verbatim() {
        let request =
            HttpRequest::builder(HttpMethod::Get, "http://mirror.example.com/orders").build();
        assert_eq!(request.url(&base()), "http://mirror.example.com/orders");
    }

    #[test]
    fn test_query_params_are_sorted_and_encoded() {
        let request = HttpRequest::builder(HttpMethod::Get, "orders")
            .query_param("status", "in process")
            .query_param("limit", "20")
            .query_param("offset", "40")
            .build();

        assert_eq!(
            request.url(&base()),
            "https://api.printful.com/orders?limit=20&offset=40&status=in%20process"
        );
    }

    #[test]
    fn test_empty_query_adds_no_question_mark() {
        let request = HttpRequest::builder(HttpMethod::Get, "orders")
            .query(HashMap::new())
            .build();
        assert_eq!(request.url(&base()), "https://api.printful.com/orders");
    }

    #[test]
    fn test_json_body_serializes_object() {
        let request = HttpRequest::builder(HttpMethod::Post, "orders")
            .body(json!({"recipient": {"name": "Jane"}}))
            .build();

        let body: serde_json::Value =
            serde_json::from_str(&request.json_body().unwrap()).unwrap();
        assert_eq!(body["recipient"]["name"], "Jane");
    }

    #[test]
    fn test_empty_bodies_are_not_sent() {
        for empty in [json!(null), json!({}), json!([])] {
            let request = HttpRequest::builder(HttpMethod::Post, "orders/1/confirm")
                .body(empty)
                .build();
            assert!(request.json_body().is_none());
        }

        let request = HttpRequest::builder(HttpMethod::Post, "orders/1/confirm").build();
        assert!(request.json_body().is_none());
    }
}
