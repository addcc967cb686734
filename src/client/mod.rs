//! HTTP client for Lemon Squeezy API communication.
//!
//! This module provides the [`Client`] type: it owns the base URL and the
//! API key, builds one [`Request`] per call, executes it through reqwest,
//! and normalizes the result. Every invocation is exactly one network call;
//! there are no retries, no caching, and no rate-limit handling — failures
//! propagate immediately to the caller.

mod request;

pub use request::{HttpMethod, Request};

use serde_json::Value;

use crate::config::{ApiKey, DEFAULT_BASE_URL};
use crate::error::{ApiError, Error};

/// The JSON:API media type used for both `Accept` and `Content-Type`.
pub const JSON_API_CONTENT_TYPE: &str = "application/vnd.api+json";

/// Client for the Lemon Squeezy API.
///
/// The client's only shared fields (API key and base URL) are read-only
/// after construction, so instances can be shared freely across async
/// tasks; concurrent calls are independent and carry no ordering guarantee
/// relative to each other.
///
/// # Example
///
/// ```rust,ignore
/// use lemonsqueezy_api::{ApiKey, Client};
///
/// let client = Client::new(ApiKey::new("lsq-token")?);
/// let orders = client.list_orders(Default::default()).await?;
/// ```
#[derive(Debug)]
pub struct Client {
    /// The internal reqwest HTTP client.
    http: reqwest::Client,
    /// Base URL without trailing slash (e.g. `https://api.lemonsqueezy.com/v1`).
    base_url: String,
    /// The bearer token sent with every request.
    api_key: ApiKey,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a client pointed at the production API.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g. TLS
    /// initialization failure).
    #[must_use]
    pub fn new(api_key: ApiKey) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a client with an explicit base URL.
    ///
    /// Useful for tests and proxies. A trailing slash on `base_url` is
    /// tolerated.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created.
    #[must_use]
    pub fn with_base_url(api_key: ApiKey, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url,
            api_key,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a request and normalizes the response.
    ///
    /// Headers on every request: `Accept` and `Content-Type` are the JSON:API
    /// media type, `Authorization` is `Bearer <api key>`. Query parameters
    /// are appended URL-encoded for GET requests; the body, when present, is
    /// serialized regardless of method.
    ///
    /// On success, DELETE yields `Value::Null` (deletion endpoints return
    /// empty); every other method yields the parsed JSON:API envelope
    /// unchanged, including `data`, `included`, `meta` and `links`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for any non-2xx status, carrying the numeric
    /// status, the reason phrase, and the API's `errors` array (empty when
    /// the response body was not JSON). Returns [`Error::Network`] for
    /// transport-level failures, unwrapped.
    pub async fn send(&self, request: Request) -> Result<Value, Error> {
        let url = format!(
            "{}/{}",
            self.base_url,
            request.path.trim_start_matches('/')
        );

        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Post => self.http.post(&url),
            HttpMethod::Patch => self.http.patch(&url),
            HttpMethod::Delete => self.http.delete(&url),
        };

        builder = builder
            .header("Accept", JSON_API_CONTENT_TYPE)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.as_ref()),
            )
            .header("Content-Type", JSON_API_CONTENT_TYPE);

        if request.method == HttpMethod::Get && !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        tracing::debug!(method = %request.method, path = %request.path, "sending Lemon Squeezy API request");

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or_default().to_string();
            let body_text = response.text().await.unwrap_or_default();
            let errors = extract_errors(&body_text);

            tracing::warn!(
                status = status.as_u16(),
                path = %request.path,
                "Lemon Squeezy API request failed"
            );

            return Err(ApiError {
                status: status.as_u16(),
                status_text,
                errors,
            }
            .into());
        }

        if request.method == HttpMethod::Delete {
            return Ok(Value::Null);
        }

        let document = response.json::<Value>().await?;
        Ok(document)
    }

    /// Sends a GET request to `path` with the given query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Network`]
    /// for transport failures.
    pub async fn get(&self, path: &str, query: Vec<(String, String)>) -> Result<Value, Error> {
        self.send(Request::new(HttpMethod::Get, path).query(query))
            .await
    }

    /// Sends a POST request with a JSON:API document body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Network`]
    /// for transport failures.
    pub async fn post(&self, path: &str, body: Value) -> Result<Value, Error> {
        self.send(Request::new(HttpMethod::Post, path).body(body))
            .await
    }

    /// Sends a PATCH request with a JSON:API document body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Network`]
    /// for transport failures.
    pub async fn patch(&self, path: &str, body: Value) -> Result<Value, Error> {
        self.send(Request::new(HttpMethod::Patch, path).body(body))
            .await
    }

    /// Sends a DELETE request. The response body, if any, is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Network`]
    /// for transport failures.
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        self.send(Request::new(HttpMethod::Delete, path)).await?;
        Ok(())
    }
}

/// Extracts the JSON:API `errors` array from an error response body.
///
/// Returns an empty vector when the body is not JSON or carries no
/// `errors` array, so a malformed error response still surfaces as an
/// [`ApiError`] with the status intact.
fn extract_errors(body_text: &str) -> Vec<Value> {
    serde_json::from_str::<Value>(body_text)
        .ok()
        .and_then(|body| body.get("errors").and_then(Value::as_array).cloned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> Client {
        Client::with_base_url(ApiKey::new("test-key").unwrap(), base_url)
    }

    #[test]
    fn test_new_uses_production_base_url() {
        let client = Client::new(ApiKey::new("test-key").unwrap());
        assert_eq!(client.base_url(), "https://api.lemonsqueezy.com/v1");
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client = test_client("http://localhost:9999/v1/");
        assert_eq!(client.base_url(), "http://localhost:9999/v1");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }

    #[test]
    fn test_extract_errors_reads_errors_array() {
        let errors = extract_errors(r#"{"errors":[{"detail":"Not found"}]}"#);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["detail"], "Not found");
    }

    #[test]
    fn test_extract_errors_handles_non_json_body() {
        assert!(extract_errors("<html>Bad Gateway</html>").is_empty());
        assert!(extract_errors("").is_empty());
    }

    #[test]
    fn test_extract_errors_handles_missing_errors_key() {
        assert!(extract_errors(r#"{"message":"nope"}"#).is_empty());
        assert!(extract_errors(r#"{"errors":"not-an-array"}"#).is_empty());
    }
}
