//! Checkout operations.
//!
//! A checkout is a hosted payment page for one variant of one store's
//! product. Creating one returns the URL the buyer is sent to.

use serde_json::{json, Value};

use crate::client::Client;
use crate::error::Error;
use crate::params::{self, build_params, GetOptions};
use crate::resources::{relationship, require_id};

/// Filter names accepted by the checkouts list endpoint.
const FILTERS: &[&str] = &["storeId", "variantId"];

/// Options for [`Client::list_checkouts`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCheckoutsOptions {
    /// Only return checkouts belonging to this store.
    pub store_id: Option<u64>,
    /// Only return checkouts for this variant.
    pub variant_id: Option<u64>,
    /// Related resources to side-load (e.g. `store`, `variant`).
    pub include: Option<Vec<String>>,
    /// Page number to fetch.
    pub page: Option<u32>,
    /// Results per page.
    pub per_page: Option<u32>,
}

impl ListCheckoutsOptions {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        params::push(&mut pairs, "storeId", self.store_id);
        params::push(&mut pairs, "variantId", self.variant_id);
        params::push_include(&mut pairs, self.include.as_ref());
        params::push(&mut pairs, "page", self.page);
        params::push(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

/// Builds the JSON:API document for checkout creation.
///
/// The store and variant identifiers are stringified in the relationship
/// data, as JSON:API requires. Custom checkout attributes (prices, product
/// overrides, checkout options...) are passed through as given.
fn checkout_body(store_id: u64, variant_id: u64, attributes: Option<Value>) -> Value {
    json!({
        "data": {
            "type": "checkouts",
            "attributes": attributes.unwrap_or_else(|| json!({})),
            "relationships": {
                "store": relationship("stores", store_id),
                "variant": relationship("variants", variant_id),
            },
        },
    })
}

impl Client {
    /// Lists checkouts, optionally filtered by store or variant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Network`]
    /// for transport failures.
    pub async fn list_checkouts(&self, options: ListCheckoutsOptions) -> Result<Value, Error> {
        let query = build_params(&options.to_pairs(), FILTERS);
        self.get("checkouts", query).await
    }

    /// Retrieves a single checkout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `checkout_id` is empty; no request is
    /// sent in that case.
    pub async fn get_checkout(
        &self,
        checkout_id: &str,
        options: Option<GetOptions>,
    ) -> Result<Value, Error> {
        require_id("get_checkout", "checkout_id", checkout_id)?;
        let query = build_params(&options.unwrap_or_default().to_pairs(), &[]);
        self.get(&format!("checkouts/{checkout_id}"), query).await
    }

    /// Creates a checkout for one variant of one store.
    ///
    /// `attributes` is the optional free-form checkout configuration object
    /// (custom price, product overrides, checkout options and the like) and
    /// is passed through to the API unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Network`]
    /// for transport failures.
    pub async fn create_checkout(
        &self,
        store_id: u64,
        variant_id: u64,
        attributes: Option<Value>,
    ) -> Result<Value, Error> {
        let body = checkout_body(store_id, variant_id, attributes);
        self.post("checkouts", body).await
    }
}
