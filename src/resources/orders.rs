//! Order operations.

use serde_json::Value;

use crate::client::Client;
use crate::error::Error;
use crate::params::{self, build_params, GetOptions};
use crate::resources::require_id;

/// Filter names accepted by the orders list endpoint.
const FILTERS: &[&str] = &["storeId", "userEmail"];

/// Options for [`Client::list_orders`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOrdersOptions {
    /// Only return orders belonging to this store.
    pub store_id: Option<u64>,
    /// Only return orders placed with this email address.
    pub user_email: Option<String>,
    /// Related resources to side-load (e.g. `store`, `order-items`).
    pub include: Option<Vec<String>>,
    /// Page number to fetch.
    pub page: Option<u32>,
    /// Results per page.
    pub per_page: Option<u32>,
}

impl ListOrdersOptions {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        params::push(&mut pairs, "storeId", self.store_id);
        params::push(&mut pairs, "userEmail", self.user_email.clone());
        params::push_include(&mut pairs, self.include.as_ref());
        params::push(&mut pairs, "page", self.page);
        params::push(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

impl Client {
    /// Lists orders, optionally filtered by store or buyer email.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Network`]
    /// for transport failures.
    pub async fn list_orders(&self, options: ListOrdersOptions) -> Result<Value, Error> {
        let query = build_params(&options.to_pairs(), FILTERS);
        self.get("orders", query).await
    }

    /// Retrieves a single order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `order_id` is empty; no request is
    /// sent in that case.
    pub async fn get_order(
        &self,
        order_id: &str,
        options: Option<GetOptions>,
    ) -> Result<Value, Error> {
        require_id("get_order", "order_id", order_id)?;
        let query = build_params(&options.unwrap_or_default().to_pairs(), &[]);
        self.get(&format!("orders/{order_id}"), query).await
    }
}
