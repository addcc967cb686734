//! Per-resource method surfaces for the Lemon Squeezy API.
//!
//! Each module adds inherent methods to [`Client`](crate::Client) for one
//! resource: a list method that runs its options through the parameter
//! builder with that endpoint's filter allow-list, a get-by-id method, and —
//! where the API supports them — create/update/delete and lifecycle actions.
//!
//! Get- and mutate-by-id methods validate their target identifier locally
//! and fail with a [`ValidationError`](crate::ValidationError) naming the
//! method and field before any network call is attempted.

pub mod checkouts;
pub mod customers;
pub mod discount_redemptions;
pub mod discounts;
pub mod files;
pub mod license_key_instances;
pub mod license_keys;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod stores;
pub mod subscription_invoices;
pub mod subscriptions;
pub mod variants;
pub mod webhooks;

use serde_json::{json, Value};

use crate::error::{Error, ValidationError};

/// Rejects absent or empty target identifiers before any network call.
pub(crate) fn require_id(
    method: &'static str,
    field: &'static str,
    id: &str,
) -> Result<(), Error> {
    if id.trim().is_empty() {
        return Err(ValidationError { method, field }.into());
    }
    Ok(())
}

/// Builds a to-one JSON:API relationship with a stringified identifier.
pub(crate) fn relationship(resource_type: &str, id: u64) -> Value {
    json!({ "data": { "type": resource_type, "id": id.to_string() } })
}
