//! Error types for the Lemon Squeezy API SDK.
//!
//! The SDK distinguishes three failure classes:
//!
//! - [`ValidationError`]: a required identifier or field was missing or empty.
//!   Raised locally, before any network call is attempted.
//! - [`ApiError`]: the API returned a non-2xx response. Carries the HTTP
//!   status, the status reason phrase, and the API's own `errors` array.
//! - Network failures from the transport, propagated unwrapped.
//!
//! All three are unified under [`Error`] so callers can pattern-match:
//!
//! ```rust,ignore
//! match client.get_order("123", None).await {
//!     Ok(document) => println!("{document}"),
//!     Err(Error::Validation(e)) => println!("bad call: {e}"),
//!     Err(Error::Api(e)) => println!("API rejected: {} {}", e.status, e.status_text),
//!     Err(Error::Network(e)) => println!("transport: {e}"),
//! }
//! ```

use thiserror::Error;

/// Errors that can occur when constructing SDK configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Lemon Squeezy API key.")]
    EmptyApiKey,
}

/// A required identifier or field was missing or empty.
///
/// Raised before any network call is made. The message names the offending
/// method and field so the caller can correct the call site.
///
/// # Example
///
/// ```rust
/// use lemonsqueezy_api::ValidationError;
///
/// let error = ValidationError {
///     method: "get_store",
///     field: "store_id",
/// };
/// assert_eq!(error.to_string(), "get_store requires a non-empty store_id");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{method} requires a non-empty {field}")]
pub struct ValidationError {
    /// The SDK method that rejected the call (e.g. `"get_store"`).
    pub method: &'static str,
    /// The missing or empty field (e.g. `"store_id"`).
    pub field: &'static str,
}

/// The API returned a non-successful HTTP response.
///
/// The `errors` array is the API's own JSON:API error list, passed through
/// unmodified. It is empty when the response body was not JSON or carried no
/// `errors` array.
///
/// # Example
///
/// ```rust
/// use lemonsqueezy_api::ApiError;
///
/// let error = ApiError {
///     status: 404,
///     status_text: "Not Found".to_string(),
///     errors: vec![serde_json::json!({"detail": "Not found"})],
/// };
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Error)]
#[error("Lemon Squeezy API returned {status} {status_text}")]
pub struct ApiError {
    /// The numeric HTTP status code.
    pub status: u16,
    /// The status reason phrase (e.g. `"Not Found"`).
    pub status_text: String,
    /// The API's reported error objects, intact.
    pub errors: Vec<serde_json::Value>,
}

/// Unified error type for all SDK operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A required identifier or field was missing; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The API rejected the request with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Network or connection error from the transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

// Verify Error is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
};
