//! Configuration types for the Lemon Squeezy API SDK.
//!
//! The only credential the API needs is an opaque bearer token, wrapped in
//! the validated [`ApiKey`] newtype. Configuration is instance-based and
//! passed explicitly; there is no process-wide state.

use std::fmt;

use crate::error::ConfigError;

/// The production API base URL.
///
/// Override it with [`Client::with_base_url`](crate::Client::with_base_url)
/// when pointing the client at a mock server or proxy.
pub const DEFAULT_BASE_URL: &str = "https://api.lemonsqueezy.com/v1";

/// A validated Lemon Squeezy API key.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output so the token never leaks into logs.
///
/// # Security
///
/// The `Debug` implementation displays `ApiKey(*****)` instead of the
/// actual token.
///
/// # Example
///
/// ```rust
/// use lemonsqueezy_api::ApiKey;
///
/// let key = ApiKey::new("lsq-token").unwrap();
/// assert_eq!(key.as_ref(), "lsq-token");
/// assert_eq!(format!("{key:?}"), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}
