//! HTTP transport for the Petstore API.
//!
//! This module provides the [`ApiClient`] type, which every operation module
//! sends its requests through.

use std::collections::HashMap;
use std::time::Duration;

use crate::auth::AuthInfo;
use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest, MultipartField, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, PetstoreConfig};

/// Fixed retry wait time in seconds when no `Retry-After` is given.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Upper bound in seconds on a server-requested `Retry-After` wait.
pub const MAX_RETRY_WAIT_TIME: u64 = 60;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client shared by the Petstore operation modules.
///
/// The client handles:
/// - URL construction from the configured [`BaseUrl`]
/// - Default headers (`User-Agent`, `Accept`)
/// - Credential resolution for the auth schemes a request declares
/// - Automatic retries for 429 and 500 responses
///
/// `ApiClient` is `Send + Sync`; wrap it in an `Arc` to share it between
/// [`StoreApiClient`](crate::apis::StoreApiClient) and
/// [`PetApiClient`](crate::apis::PetApiClient).
///
/// # Example
///
/// ```rust,ignore
/// use petstore_client::{ApiClient, PetstoreConfig};
/// use petstore_client::clients::{HttpMethod, HttpRequest};
///
/// let client = ApiClient::new(&PetstoreConfig::default())?;
/// let request = HttpRequest::builder(HttpMethod::Get, "store/order/1").build()?;
/// let response = client.request(request, None).await?;
/// ```
#[derive(Debug)]
pub struct ApiClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Service root, e.g. `http://petstore.swagger.io/v2`.
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Credentials used when a call supplies no override.
    default_auth: AuthInfo,
    /// Attempts per request when the request does not set its own.
    default_tries: u32,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a new client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g. TLS initialization failure).
    pub fn new(config: &PetstoreConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}petstore-client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
            default_auth: AuthInfo::from_config(config),
            default_tries: config.tries(),
        })
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

    /// Returns the credentials used when no per-call override is given.
    #[must_use]
    pub const fn default_auth(&self) -> &AuthInfo {
        &self.default_auth
    }

    /// Returns the default number of attempts per request.
    #[must_use]
    pub const fn default_tries(&self) -> u32 {
        self.default_tries
    }

    /// Sends a request to the Petstore API.
    ///
    /// `auth_info`, when given, replaces the default credentials for this
    /// call. Credentials are only sent for the schemes the request declares.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    /// - Retries are exhausted on 429/500 responses (`MaxRetries`)
    pub async fn request(
        &self,
        request: HttpRequest,
        auth_info: Option<&AuthInfo>,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);

        let mut headers = self.default_headers.clone();
        let credentials = auth_info.unwrap_or(&self.default_auth);
        headers.extend(credentials.headers_for(&request.auth_schemes));
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let tries = request.tries.unwrap_or(self.default_tries).max(1);
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            tracing::debug!(
                "Sending {} {} (attempt {}/{})",
                request.http_method,
                request.path,
                attempt,
                tries
            );

            let response = self.send_once(&request, &url, &headers).await?;

            if let Some(deprecation) = response.deprecation() {
                tracing::warn!(
                    "Deprecated request to Petstore API at {}, received deprecation: {}",
                    request.path,
                    deprecation
                );
            }

            if response.is_ok() {
                return Ok(response);
            }

            let code = response.code;
            let message = response.error_message();
            let error_reference = response.request_id().map(String::from);

            let should_retry = code == 429 || code == 500;
            if !should_retry || tries == 1 {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message,
                    error_reference,
                }));
            }

            if attempt >= tries {
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries,
                    message,
                    error_reference,
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::warn!(
                "Retrying {} {} after status {} in {:?}",
                request.http_method,
                request.path,
                code,
                delay
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Sends a single attempt and reads the whole response.
    async fn send_once(
        &self,
        request: &HttpRequest,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, HttpError> {
        let method = match request.http_method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };
        let mut req_builder = self.client.request(method, url);

        for (key, value) in headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        // Multipart forms are consumed on send, so every attempt builds its own body
        req_builder = match &request.body {
            Some(RequestBody::Json(value)) => req_builder.json(value),
            Some(RequestBody::Form(fields)) => req_builder.form(fields),
            Some(RequestBody::Multipart(fields)) => {
                req_builder.multipart(Self::multipart_form(fields))
            }
            None => req_builder,
        };

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        Ok(HttpResponse::from_text(code, res_headers, &body_text))
    }

    fn multipart_form(fields: &[MultipartField]) -> reqwest::multipart::Form {
        fields
            .iter()
            .fold(reqwest::multipart::Form::new(), |form, field| match field {
                MultipartField::Text { name, value } => form.text(name.clone(), value.clone()),
                MultipartField::File {
                    name,
                    file_name,
                    bytes,
                } => form.part(
                    name.clone(),
                    reqwest::multipart::Part::bytes(bytes.clone()).file_name(file_name.clone()),
                ),
            })
    }

    /// Parses response headers into a `HashMap` keyed by lower-case name.
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

    /// Calculates the retry delay based on response and status code.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> Duration {
        // 429 honours Retry-After up to MAX_RETRY_WAIT_TIME; 500 always waits the fixed delay
        if status == 429 {
            if let Some(retry_after) = response.retry_request_after {
                let max_wait = Duration::from_secs(MAX_RETRY_WAIT_TIME);
                return Duration::try_from_secs_f64(retry_after)
                    .map_or(max_wait, |wait| wait.min(max_wait));
            }
        }
        Duration::from_secs(RETRY_WAIT_TIME)
    }
}
