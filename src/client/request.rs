//! Request descriptor types for the Lemon Squeezy API.
//!
//! A [`Request`] is constructed fresh for each call, is immutable once
//! built, and is discarded after the call completes.

use std::fmt;

use serde_json::Value;

/// HTTP methods used by the Lemon Squeezy API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Patch => write!(f, "PATCH"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// An HTTP request to be sent to the Lemon Squeezy API.
///
/// # Example
///
/// ```rust
/// use lemonsqueezy_api::client::{HttpMethod, Request};
/// use serde_json::json;
///
/// let list = Request::new(HttpMethod::Get, "orders")
///     .query(vec![("filter[store_id]".to_string(), "5".to_string())]);
///
/// let create = Request::new(HttpMethod::Post, "webhooks")
///     .body(json!({"data": {"type": "webhooks"}}));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The path relative to the API base URL (e.g. `"orders/123"`).
    pub path: String,
    /// Query parameters in insertion order. Only sent for GET requests.
    pub query: Vec<(String, String)>,
    /// Optional JSON body, serialized regardless of method when present.
    pub body: Option<Value>,
}

impl Request {
    /// Creates a request for the given method and path with no query or body.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}
