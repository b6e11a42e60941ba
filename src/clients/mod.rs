//! HTTP client types for Printful API communication.
//!
//! This module provides the transport layer underneath
//! [`PrintfulClient`](crate::PrintfulClient).
//!
//! # Overview
//!
//! - [`HttpClient`]: The blocking HTTP client holding the authenticated connection
//! - [`HttpRequest`]: A request descriptor (method, path, query, body)
//! - [`HttpResponse`]: A raw response (status, headers, body)
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`Paging`]: Pagination metadata of list responses
//! - [`ApiRequestError`]: Every failure after network I/O begins
//!
//! There is no retry logic: a failed request surfaces immediately.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::ApiRequestError;
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{extract_result, HttpResponse, Paging};
