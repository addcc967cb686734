//! License key operations.

use serde_json::Value;

use crate::client::Client;
use crate::error::Error;
use crate::params::{self, build_params, GetOptions};
use crate::resources::require_id;

/// Filter names accepted by the license keys list endpoint.
const FILTERS: &[&str] = &["storeId", "orderId", "orderItemId", "productId"];

/// Options for [`Client::list_license_keys`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListLicenseKeysOptions {
    /// Only return license keys belonging to this store.
    pub store_id: Option<u64>,
    /// Only return license keys issued by this order.
    pub order_id: Option<u64>,
    /// Only return license keys issued by this order item.
    pub order_item_id: Option<u64>,
    /// Only return license keys for this product.
    pub product_id: Option<u64>,
    /// Related resources to side-load (e.g. `license-key-instances`).
    pub include: Option<Vec<String>>,
    /// Page number to fetch.
    pub page: Option<u32>,
    /// Results per page.
    pub per_page: Option<u32>,
}

impl ListLicenseKeysOptions {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        params::push(&mut pairs, "storeId", self.store_id);
        params::push(&mut pairs, "orderId", self.order_id);
        params::push(&mut pairs, "orderItemId", self.order_item_id);
        params::push(&mut pairs, "productId", self.product_id);
        params::push_include(&mut pairs, self.include.as_ref());
        params::push(&mut pairs, "page", self.page);
        params::push(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

impl Client {
    /// Lists license keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Network`]
    /// for transport failures.
    pub async fn list_license_keys(
        &self,
        options: ListLicenseKeysOptions,
    ) -> Result<Value, Error> {
        let query = build_params(&options.to_pairs(), FILTERS);
        self.get("license-keys", query).await
    }

    /// Retrieves a single license key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `license_key_id` is empty; no request
    /// is sent in that case.
    pub async fn get_license_key(
        &self,
        license_key_id: &str,
        options: Option<GetOptions>,
    ) -> Result<Value, Error> {
        require_id("get_license_key", "license_key_id", license_key_id)?;
        let query = build_params(&options.unwrap_or_default().to_pairs(), &[]);
        self.get(&format!("license-keys/{license_key_id}"), query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_item_filter_translates_multi_word_name() {
        let options = ListLicenseKeysOptions {
            order_item_id: Some(44),
            ..Default::default()
        };
        let query = build_params(&options.to_pairs(), FILTERS);
        assert_eq!(
            query,
            vec![("filter[order_item_id]".to_string(), "44".to_string())],
        );
    }
}
