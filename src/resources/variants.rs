//! Variant operations.

use serde_json::Value;

use crate::client::Client;
use crate::error::Error;
use crate::params::{self, build_params, GetOptions};
use crate::resources::require_id;

/// Filter names accepted by the variants list endpoint.
const FILTERS: &[&str] = &["productId"];

/// Options for [`Client::list_variants`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListVariantsOptions {
    /// Only return variants belonging to this product.
    pub product_id: Option<u64>,
    /// Related resources to side-load (e.g. `product`, `files`).
    pub include: Option<Vec<String>>,
    /// Page number to fetch.
    pub page: Option<u32>,
    /// Results per page.
    pub per_page: Option<u32>,
}

impl ListVariantsOptions {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        params::push(&mut pairs, "productId", self.product_id);
        params::push_include(&mut pairs, self.include.as_ref());
        params::push(&mut pairs, "page", self.page);
        params::push(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

impl Client {
    /// Lists variants, optionally filtered by product.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Network`]
    /// for transport failures.
    pub async fn list_variants(&self, options: ListVariantsOptions) -> Result<Value, Error> {
        let query = build_params(&options.to_pairs(), FILTERS);
        self.get("variants", query).await
    }

    /// Retrieves a single variant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `variant_id` is empty; no request is
    /// sent in that case.
    pub async fn get_variant(
        &self,
        variant_id: &str,
        options: Option<GetOptions>,
    ) -> Result<Value, Error> {
        require_id("get_variant", "variant_id", variant_id)?;
        let query = build_params(&options.unwrap_or_default().to_pairs(), &[]);
        self.get(&format!("variants/{variant_id}"), query).await
    }
}
