//! HTTP response types for the Printful API client.
//!
//! This module provides the raw [`HttpResponse`] record kept after every
//! request, and the [`Paging`] metadata found in list responses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::clients::errors::ApiRequestError;

/// Pagination metadata from the `paging` field of a result envelope.
///
/// # Example
///
/// ```rust
/// use printful_api::Paging;
/// use serde_json::json;
///
/// let document = json!({"result": [], "paging": {"total": 120, "offset": 20, "limit": 20}});
/// let paging = Paging::from_envelope(&document).unwrap();
/// assert_eq!(paging.total, 120);
/// assert_eq!(paging.offset, 20);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// Total number of items available.
    pub total: u64,
    /// Offset of the first returned item.
    #[serde(default)]
    pub offset: u64,
    /// Maximum number of items per page.
    #[serde(default)]
    pub limit: u64,
}

impl Paging {
    /// Reads the `paging` field of a decoded envelope.
    ///
    /// Returns `None` if the field is absent or has no numeric `total`.
    #[must_use]
    pub fn from_envelope(document: &serde_json::Value) -> Option<Self> {
        let paging = document.get("paging")?;
        Self::deserialize(paging).ok()
    }
}

/// A raw HTTP response from the Printful API.
///
/// Holds the status code, headers and undecoded body exactly as received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the `200..300` range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Checks the status code and decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiRequestError::Status`] if the status code is outside
    /// `200..300`, whatever the body holds.
    /// Returns [`ApiRequestError::NonJson`] if the body is not UTF-8 JSON.
    pub fn json(&self) -> Result<serde_json::Value, ApiRequestError> {
        if !self.is_ok() {
            return Err(ApiRequestError::Status {
                code: self.code,
                body: self.text(),
            });
        }

        serde_json::from_slice(&self.body).map_err(|source| ApiRequestError::NonJson { source })
    }
}

/// Splits the `result` payload out of a decoded envelope.
///
/// # Errors
///
/// Returns [`ApiRequestError::MissingResult`] if the document is not an
/// object or has no `result` key.
pub fn extract_result(document: &serde_json::Value) -> Result<serde_json::Value, ApiRequestError> {
    document
        .get("result")
        .cloned()
        .ok_or(ApiRequestError::MissingResult)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(code: u16, body: &str) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body)
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..300 {
            assert!(response(code, "").is_ok(), "Expected is_ok() for code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_outside_2xx() {
        for code in [100, 199, 300, 301, 400, 404, 429, 500, 503] {
            assert!(!response(code, "").is_ok(), "Expected !is_ok() for code {code}");
        }
    }

    #[test]
    fn test_json_rejects_bad_status_regardless_of_body() {
        let err = response(404, r#"{"result": {"id": 1}}"#).json().unwrap_err();
        assert!(matches!(err, ApiRequestError::Status { code: 404, .. }));

        let err = response(302, "").json().unwrap_err();
        assert_eq!(err.code(), "1.1");
    }

    #[test]
    fn test_status_error_keeps_raw_body() {
        let err = response(404, r#"{"error": "not found"}"#).json().unwrap_err();
        match err {
            ApiRequestError::Status { body, .. } => assert!(body.contains("not found")),
            other => panic!("Expected Status error, got {other:?}"),
        }
    }

    #[test]
    fn test_json_rejects_non_json_body_with_2xx() {
        let err = response(200, "<html>Bad gateway</html>").json().unwrap_err();
        assert!(matches!(err, ApiRequestError::NonJson { .. }));

        let err = response(200, "").json().unwrap_err();
        assert_eq!(err.code(), "1.2");
    }

    #[test]
    fn test_json_rejects_invalid_utf8() {
        let response = HttpResponse::new(200, HashMap::new(), vec![0xff, 0xfe, b'{', b'}']);
        assert!(matches!(
            response.json(),
            Err(ApiRequestError::NonJson { .. })
        ));
    }

    #[test]
    fn test_json_decodes_envelope() {
        let document = response(200, r#"{"code": 200, "result": [{"id": 1}]}"#)
            .json()
            .unwrap();
        assert_eq!(document["code"], 200);
        assert_eq!(extract_result(&document).unwrap(), json!([{"id": 1}]));
    }

    #[test]
    fn test_extract_result_requires_result_key() {
        assert!(matches!(
            extract_result(&json!({"code": 200})),
            Err(ApiRequestError::MissingResult)
        ));
        assert!(matches!(
            extract_result(&json!([1, 2, 3])),
            Err(ApiRequestError::MissingResult)
        ));
    }

    #[test]
    fn test_extract_result_keeps_null_result() {
        assert_eq!(extract_result(&json!({"result": null})).unwrap(), json!(null));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), vec!["application/json".to_string()]);

        let response = HttpResponse::new(200, headers, "{}");
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert!(response.header("x-missing").is_none());
    }

    #[test]
    fn test_paging_from_envelope() {
        let paging = Paging::from_envelope(&json!({"paging": {"total": 1}})).unwrap();
        assert_eq!(
            paging,
            Paging {
                total: 1,
                offset: 0,
                limit: 0
            }
        );

        assert!(Paging::from_envelope(&json!({"result": []})).is_none());
        assert!(Paging::from_envelope(&json!({"paging": {"offset": 0}})).is_none());
    }
}
