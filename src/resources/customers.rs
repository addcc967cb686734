//! Customer operations.

use serde_json::Value;

use crate::client::Client;
use crate::error::Error;
use crate::params::{self, build_params, GetOptions};
use crate::resources::require_id;

/// Filter names accepted by the customers list endpoint.
const FILTERS: &[&str] = &["storeId", "email"];

/// Options for [`Client::list_customers`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCustomersOptions {
    /// Only return customers belonging to this store.
    pub store_id: Option<u64>,
    /// Only return customers with this email address.
    pub email: Option<String>,
    /// Related resources to side-load (e.g. `orders`, `subscriptions`).
    pub include: Option<Vec<String>>,
    /// Page number to fetch.
    pub page: Option<u32>,
    /// Results per page.
    pub per_page: Option<u32>,
}

impl ListCustomersOptions {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        params::push(&mut pairs, "storeId", self.store_id);
        params::push(&mut pairs, "email", self.email.clone());
        params::push_include(&mut pairs, self.include.as_ref());
        params::push(&mut pairs, "page", self.page);
        params::push(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

impl Client {
    /// Lists customers, optionally filtered by store or email.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Network`]
    /// for transport failures.
    pub async fn list_customers(&self, options: ListCustomersOptions) -> Result<Value, Error> {
        let query = build_params(&options.to_pairs(), FILTERS);
        self.get("customers", query).await
    }

    /// Retrieves a single customer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `customer_id` is empty; no request is
    /// sent in that case.
    pub async fn get_customer(
        &self,
        customer_id: &str,
        options: Option<GetOptions>,
    ) -> Result<Value, Error> {
        require_id("get_customer", "customer_id", customer_id)?;
        let query = build_params(&options.unwrap_or_default().to_pairs(), &[]);
        self.get(&format!("customers/{customer_id}"), query).await
    }
}
