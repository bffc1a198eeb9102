//! HTTP request types.
//!
//! This module provides the [`HttpRequest`] type and its builder. Operation
//! modules build one request per call; the [`ApiClient`](crate::clients::ApiClient)
//! sends it.

use std::collections::HashMap;
use std::fmt;

use crate::auth::AuthScheme;
use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Petstore API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// One part of a `multipart/form-data` body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MultipartField {
    /// A plain text field.
    Text {
        /// Field name.
        name: String,
        /// Field value.
        value: String,
    },
    /// A file upload.
    File {
        /// Field name.
        name: String,
        /// File name reported to the server.
        file_name: String,
        /// File contents.
        bytes: Vec<u8>,
    },
}

/// A request body and its encoding.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// `application/json`.
    Json(serde_json::Value),
    /// `application/x-www-form-urlencoded`, fields in order.
    Form(Vec<(String, String)>),
    /// `multipart/form-data`.
    Multipart(Vec<MultipartField>),
}

impl RequestBody {
    /// Returns a short name for the body encoding.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Json(_) => "json",
            Self::Form(_) => "form",
            Self::Multipart(_) => "multipart",
        }
    }
}

/// An HTTP request to be sent to the Petstore API.
///
/// # Example
///
/// ```rust
/// use petstore_client::auth::AuthScheme;
/// use petstore_client::clients::{HttpMethod, HttpRequest, RequestBody};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "store/inventory")
///     .auth(AuthScheme::ApiKey)
///     .build()
///     .unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "store/order")
///     .body(RequestBody::Json(json!({"petId": 1, "quantity": 2})))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the base URL.
    pub path: String,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// Query parameters, in order.
    pub query: Option<Vec<(String, String)>>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Auth schemes this operation accepts.
    pub auth_schemes: Vec<AuthScheme>,
    /// Number of attempts; `None` uses the client default.
    pub tries: Option<u32>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - the path is empty
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    /// - `http_method` is `Get` or `Delete` but `body` is `Some`
    /// - `tries` is `Some(0)`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim_start_matches('/').is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        match (&self.http_method, &self.body) {
            (HttpMethod::Post | HttpMethod::Put, None) => {
                return Err(InvalidHttpRequestError::MissingBody {
                    method: self.http_method.to_string(),
                });
            }
            (HttpMethod::Get | HttpMethod::Delete, Some(body)) => {
                return Err(InvalidHttpRequestError::UnexpectedBody {
                    method: self.http_method.to_string(),
                    kind: body.kind(),
                });
            }
            _ => {}
        }

        if self.tries == Some(0) {
            return Err(InvalidHttpRequestError::ZeroTries);
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<RequestBody>,
    query: Option<Vec<(String, String)>>,
    extra_headers: Option<HashMap<String, String>>,
    auth_schemes: Vec<AuthScheme>,
    tries: Option<u32>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: None,
            extra_headers: None,
            auth_schemes: Vec::new(),
            tries: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Declares an auth scheme the operation accepts.
    #[must_use]
    pub fn auth(mut self, scheme: AuthScheme) -> Self {
        if !self.auth_schemes.contains(&scheme) {
            self.auth_schemes.push(scheme);
        }
        self
    }

    /// Overrides the number of times to attempt the request.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
            auth_schemes: self.auth_schemes,
            tries: self.tries,
        };
        request.verify()?;
        Ok(request)
    }
}
