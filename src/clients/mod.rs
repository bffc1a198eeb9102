//! HTTP transport for the Petstore API.
//!
//! # Overview
//!
//! - [`ApiClient`]: the async transport shared by all operation modules
//! - [`HttpRequest`] and [`HttpRequestBuilder`]: a request to be sent
//! - [`RequestBody`] and [`MultipartField`]: JSON, form, and multipart bodies
//! - [`HttpResponse`]: a parsed response
//! - [`HttpError`]: transport errors
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: retried after `Retry-After` seconds (at most 60), or 1 second if absent
//! - **500 (Server Error)**: retried after a fixed 1-second delay
//! - **Other non-2xx**: returned immediately
//!
//! The default is one attempt (no retries). Raise it with
//! [`PetstoreConfigBuilder::tries`](crate::config::PetstoreConfigBuilder::tries)
//! or per request with [`HttpRequestBuilder::tries`].

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{ApiClient, MAX_RETRY_WAIT_TIME, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, MultipartField, RequestBody};
pub use http_response::HttpResponse;
