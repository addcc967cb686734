//! # Lemon Squeezy API Rust SDK
//!
//! A Rust SDK for the Lemon Squeezy API, providing a validated API key
//! newtype, JSON:API request plumbing, and typed per-resource methods for
//! stores, products, orders, subscriptions, discounts, license keys,
//! checkouts and webhooks.
//!
//! ## Overview
//!
//! This SDK provides:
//! - A validated [`ApiKey`] newtype that never leaks the key via `Debug`
//! - An async [`Client`] speaking the `application/vnd.api+json` media type
//! - Typed list options translated to `filter[...]`/`page[...]` query
//!   parameters through a per-endpoint allow-list
//! - Create/update bodies assembled into JSON:API documents with the
//!   correct relationships
//! - Tagged errors distinguishing local validation failures, API error
//!   responses, and transport failures
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lemonsqueezy_api::{ApiKey, Client, ListOrdersOptions};
//!
//! let client = Client::new(ApiKey::new("lsq_api_key")?);
//!
//! // List the first page of orders for one store
//! let orders = client
//!     .list_orders(ListOrdersOptions {
//!         store_id: Some(1234),
//!         page: Some(1),
//!         per_page: Some(25),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Fetch a single subscription with its customer side-loaded
//! let subscription = client
//!     .get_subscription(
//!         "5678",
//!         Some(lemonsqueezy_api::GetOptions {
//!             include: Some(vec!["customer".to_string()]),
//!         }),
//!     )
//!     .await?;
//! ```
//!
//! ## Error Handling
//!
//! Every method returns [`Result<_, Error>`](Error). Validation failures
//! (empty identifiers, missing required fields) are detected locally and
//! never reach the network; API rejections carry the HTTP status and the
//! response's `errors` array verbatim:
//!
//! ```rust,ignore
//! use lemonsqueezy_api::Error;
//!
//! match client.get_order("", None).await {
//!     Err(Error::Validation(e)) => eprintln!("bad call: {e}"),
//!     Err(Error::Api(e)) => eprintln!("{} {}: {:?}", e.status, e.status_text, e.errors),
//!     Err(Error::Network(e)) => eprintln!("transport: {e}"),
//!     Ok(order) => println!("{order}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the API key and base URL live on the [`Client`]
//! - **Fail-fast validation**: bad input errors before any request is sent
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio async runtime
//! - **Transparent payloads**: response documents are returned as
//!   [`serde_json::Value`] without reshaping

pub mod client;
pub mod config;
pub mod error;
pub mod params;
pub mod resources;

// Re-export public types at crate root for convenience
pub use client::{Client, HttpMethod, Request, JSON_API_CONTENT_TYPE};
pub use config::{ApiKey, DEFAULT_BASE_URL};
pub use error::{ApiError, ConfigError, Error, ValidationError};
pub use params::GetOptions;

// Re-export per-resource option types
pub use resources::checkouts::ListCheckoutsOptions;
pub use resources::customers::ListCustomersOptions;
pub use resources::discount_redemptions::ListDiscountRedemptionsOptions;
pub use resources::discounts::{
    AmountType, CreateDiscountOptions, DiscountDuration, ListDiscountsOptions,
};
pub use resources::files::ListFilesOptions;
pub use resources::license_key_instances::ListLicenseKeyInstancesOptions;
pub use resources::license_keys::ListLicenseKeysOptions;
pub use resources::order_items::ListOrderItemsOptions;
pub use resources::orders::ListOrdersOptions;
pub use resources::products::ListProductsOptions;
pub use resources::stores::ListStoresOptions;
pub use resources::subscription_invoices::ListSubscriptionInvoicesOptions;
pub use resources::subscriptions::{
    ListSubscriptionsOptions, PauseMode, PauseSubscriptionOptions, Proration,
    UpdateSubscriptionOptions,
};
pub use resources::variants::ListVariantsOptions;
pub use resources::webhooks::{CreateWebhookOptions, ListWebhooksOptions, UpdateWebhookOptions};
