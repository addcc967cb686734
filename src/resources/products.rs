//! Product operations.

use serde_json::Value;

use crate::client::Client;
use crate::error::Error;
use crate::params::{self, build_params, GetOptions};
use crate::resources::require_id;

/// Filter names accepted by the products list endpoint.
const FILTERS: &[&str] = &["storeId"];

/// Options for [`Client::list_products`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListProductsOptions {
    /// Only return products belonging to this store.
    pub store_id: Option<u64>,
    /// Related resources to side-load (e.g. `store`, `variants`).
    pub include: Option<Vec<String>>,
    /// Page number to fetch.
    pub page: Option<u32>,
    /// Results per page.
    pub per_page: Option<u32>,
}

impl ListProductsOptions {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        params::push(&mut pairs, "storeId", self.store_id);
        params::push_include(&mut pairs, self.include.as_ref());
        params::push(&mut pairs, "page", self.page);
        params::push(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

impl Client {
    /// Lists products, optionally filtered by store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Network`]
    /// for transport failures.
    pub async fn list_products(&self, options: ListProductsOptions) -> Result<Value, Error> {
        let query = build_params(&options.to_pairs(), FILTERS);
        self.get("products", query).await
    }

    /// Retrieves a single product.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `product_id` is empty; no request is
    /// sent in that case.
    pub async fn get_product(
        &self,
        product_id: &str,
        options: Option<GetOptions>,
    ) -> Result<Value, Error> {
        require_id("get_product", "product_id", product_id)?;
        let query = build_params(&options.unwrap_or_default().to_pairs(), &[]);
        self.get(&format!("products/{product_id}"), query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_filter_is_allow_listed() {
        let options = ListProductsOptions {
            store_id: Some(5),
            ..Default::default()
        };
        let query = build_params(&options.to_pairs(), FILTERS);
        assert_eq!(
            query,
            vec![("filter[store_id]".to_string(), "5".to_string())],
        );
    }
}
