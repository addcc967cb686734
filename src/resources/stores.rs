//! Store operations.
//!
//! Stores are the top-level account container; every other resource hangs
//! off a store. The list endpoint accepts no filters, only side-loading and
//! pagination.

use serde_json::Value;

use crate::client::Client;
use crate::error::Error;
use crate::params::{self, build_params, GetOptions};
use crate::resources::require_id;

/// Filter names accepted by the stores list endpoint.
const FILTERS: &[&str] = &[];

/// Options for [`Client::list_stores`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStoresOptions {
    /// Related resources to side-load (e.g. `products`, `orders`).
    pub include: Option<Vec<String>>,
    /// Page number to fetch.
    pub page: Option<u32>,
    /// Results per page.
    pub per_page: Option<u32>,
}

impl ListStoresOptions {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        params::push_include(&mut pairs, self.include.as_ref());
        params::push(&mut pairs, "page", self.page);
        params::push(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

impl Client {
    /// Lists the stores the API key has access to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Network`]
    /// for transport failures.
    pub async fn list_stores(&self, options: ListStoresOptions) -> Result<Value, Error> {
        let query = build_params(&options.to_pairs(), FILTERS);
        self.get("stores", query).await
    }

    /// Retrieves a single store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `store_id` is empty; no request is
    /// sent in that case. Returns [`Error::Api`] or [`Error::Network`]
    /// otherwise.
    pub async fn get_store(
        &self,
        store_id: &str,
        options: Option<GetOptions>,
    ) -> Result<Value, Error> {
        require_id("get_store", "store_id", store_id)?;
        let query = build_params(&options.unwrap_or_default().to_pairs(), FILTERS);
        self.get(&format!("stores/{store_id}"), query).await
    }
}
