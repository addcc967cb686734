//! Order item operations.

use serde_json::Value;

use crate::client::Client;
use crate::error::Error;
use crate::params::{self, build_params, GetOptions};
use crate::resources::require_id;

/// Filter names accepted by the order items list endpoint.
const FILTERS: &[&str] = &["orderId", "productId", "variantId"];

/// Options for [`Client::list_order_items`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOrderItemsOptions {
    /// Only return items belonging to this order.
    pub order_id: Option<u64>,
    /// Only return items for this product.
    pub product_id: Option<u64>,
    /// Only return items for this variant.
    pub variant_id: Option<u64>,
    /// Related resources to side-load (e.g. `order`, `product`, `variant`).
    pub include: Option<Vec<String>>,
    /// Page number to fetch.
    pub page: Option<u32>,
    /// Results per page.
    pub per_page: Option<u32>,
}

impl ListOrderItemsOptions {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        params::push(&mut pairs, "orderId", self.order_id);
        params::push(&mut pairs, "productId", self.product_id);
        params::push(&mut pairs, "variantId", self.variant_id);
        params::push_include(&mut pairs, self.include.as_ref());
        params::push(&mut pairs, "page", self.page);
        params::push(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

impl Client {
    /// Lists order items, optionally filtered by order, product or variant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Network`]
    /// for transport failures.
    pub async fn list_order_items(&self, options: ListOrderItemsOptions) -> Result<Value, Error> {
        let query = build_params(&options.to_pairs(), FILTERS);
        self.get("order-items", query).await
    }

    /// Retrieves a single order item.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `order_item_id` is empty; no request
    /// is sent in that case.
    pub async fn get_order_item(
        &self,
        order_item_id: &str,
        options: Option<GetOptions>,
    ) -> Result<Value, Error> {
        require_id("get_order_item", "order_item_id", order_item_id)?;
        let query = build_params(&options.unwrap_or_default().to_pairs(), &[]);
        self.get(&format!("order-items/{order_item_id}"), query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_three_filters_translate() {
        let options = ListOrderItemsOptions {
            order_id: Some(1),
            product_id: Some(2),
            variant_id: Some(3),
            ..Default::default()
        };
        let query = build_params(&options.to_pairs(), FILTERS);
        assert_eq!(
            query,
            vec![
                ("filter[order_id]".to_string(), "1".to_string()),
                ("filter[product_id]".to_string(), "2".to_string()),
                ("filter[variant_id]".to_string(), "3".to_string()),
            ],
        );
    }
}
