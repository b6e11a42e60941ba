//! Request error types for the Printful API client.
//!
//! Every failure after network I/O begins surfaces as an [`ApiRequestError`].
//! Each cause has its own variant and a short code, available through
//! [`ApiRequestError::code`]:
//!
//! | Code  | Variant                                                          |
//! |-------|------------------------------------------------------------------|
//! | `1.0` | [`ApiRequestError::Transport`], [`ApiRequestError::NotConnected`] |
//! | `1.1` | [`ApiRequestError::Status`]                                      |
//! | `1.2` | [`ApiRequestError::NonJson`]                                     |
//! | `1.3` | [`ApiRequestError::MissingResult`]                               |
//!
//! No error is retried.
//!
//! # Example
//!
//! ```rust,ignore
//! use printful_api::{ApiRequestError, PrintfulClient};
//!
//! let mut client = PrintfulClient::new("abc:def", true)?;
//!
//! match client.order_info("999") {
//!     Ok(order) => println!("Order: {order}"),
//!     Err(ApiRequestError::Status { code, body }) => {
//!         println!("Printful returned {code}: {body}");
//!     }
//!     Err(e) => println!("Request failed ({}): {e}", e.code()),
//! }
//! ```

use thiserror::Error;

/// Unified error type for failed Printful API requests.
#[derive(Debug, Error)]
pub enum ApiRequestError {
    /// The client was built with `connect = false` and has no transport.
    #[error("Printful API request failed: client was built without a connection")]
    NotConnected,

    /// The request could not be completed (connection refused, DNS, timeout...).
    #[error("Printful API request failed: {source}")]
    Transport {
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a status code outside `200..300`.
    #[error("Invalid Printful API response (HTTP {code})")]
    Status {
        /// The HTTP status code of the response.
        code: u16,
        /// The raw response body.
        body: String,
    },

    /// The response body is not valid UTF-8 JSON.
    #[error("Printful API sent a non-JSON response: {source}")]
    NonJson {
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The decoded response has no `result` field.
    #[error("Printful API response is missing the 'result' field")]
    MissingResult,
}

impl ApiRequestError {
    /// Returns the short error code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotConnected | Self::Transport { .. } => "1.0",
            Self::Status { .. } => "1.1",
            Self::NonJson { .. } => "1.2",
            Self::MissingResult => "1.3",
        }
    }

    /// Returns the HTTP status code, if the API answered with a bad status.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_json_error() -> ApiRequestError {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        ApiRequestError::NonJson { source }
    }

    #[test]
    fn test_status_error_includes_status_code_in_message() {
        let error = ApiRequestError::Status {
            code: 404,
            body: r#"{"error":"not found"}"#.to_string(),
        };
        assert_eq!(error.to_string(), "Invalid Printful API response (HTTP 404)");
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_each_cause_has_distinct_code() {
        let status = ApiRequestError::Status {
            code: 500,
            body: String::new(),
        };

        assert_eq!(ApiRequestError::NotConnected.code(), "1.0");
        assert_eq!(status.code(), "1.1");
        assert_eq!(non_json_error().code(), "1.2");
        assert_eq!(ApiRequestError::MissingResult.code(), "1.3");
    }

    #[test]
    fn test_non_json_error_exposes_source() {
        let error = non_json_error();
        assert!(error.to_string().contains("non-JSON"));
        assert!(std::error::Error::source(&error).is_some());
        assert!(error.status().is_none());
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let error: &dyn std::error::Error = &ApiRequestError::MissingResult;
        let _ = error;
    }
}
