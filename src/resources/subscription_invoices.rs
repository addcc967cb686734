//! Subscription invoice operations.
//!
//! Invoices are generated by the platform for each subscription billing
//! cycle; this surface is read-only.

use serde_json::Value;

use crate::client::Client;
use crate::error::Error;
use crate::params::{self, build_params, GetOptions};
use crate::resources::require_id;

/// Filter names accepted by the subscription invoices list endpoint.
const FILTERS: &[&str] = &["storeId", "status", "refunded", "subscriptionId"];

/// Options for [`Client::list_subscription_invoices`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSubscriptionInvoicesOptions {
    /// Only return invoices belonging to this store.
    pub store_id: Option<u64>,
    /// Only return invoices with this status (e.g. `paid`, `refunded`).
    pub status: Option<String>,
    /// Only return refunded (`true`) or non-refunded (`false`) invoices.
    pub refunded: Option<bool>,
    /// Only return invoices belonging to this subscription.
    pub subscription_id: Option<u64>,
    /// Related resources to side-load (e.g. `store`, `subscription`).
    pub include: Option<Vec<String>>,
    /// Page number to fetch.
    pub page: Option<u32>,
    /// Results per page.
    pub per_page: Option<u32>,
}

impl ListSubscriptionInvoicesOptions {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        params::push(&mut pairs, "storeId", self.store_id);
        params::push(&mut pairs, "status", self.status.clone());
        params::push(&mut pairs, "refunded", self.refunded);
        params::push(&mut pairs, "subscriptionId", self.subscription_id);
        params::push_include(&mut pairs, self.include.as_ref());
        params::push(&mut pairs, "page", self.page);
        params::push(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

impl Client {
    /// Lists subscription invoices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Network`]
    /// for transport failures.
    pub async fn list_subscription_invoices(
        &self,
        options: ListSubscriptionInvoicesOptions,
    ) -> Result<Value, Error> {
        let query = build_params(&options.to_pairs(), FILTERS);
        self.get("subscription-invoices", query).await
    }

    /// Retrieves a single subscription invoice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `subscription_invoice_id` is empty;
    /// no request is sent in that case.
    pub async fn get_subscription_invoice(
        &self,
        subscription_invoice_id: &str,
        options: Option<GetOptions>,
    ) -> Result<Value, Error> {
        require_id(
            "get_subscription_invoice",
            "subscription_invoice_id",
            subscription_invoice_id,
        )?;
        let query = build_params(&options.unwrap_or_default().to_pairs(), &[]);
        self.get(
            &format!("subscription-invoices/{subscription_invoice_id}"),
            query,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_and_camel_case_filters_translate() {
        let options = ListSubscriptionInvoicesOptions {
            refunded: Some(true),
            subscription_id: Some(12),
            ..Default::default()
        };
        let query = build_params(&options.to_pairs(), FILTERS);
        assert_eq!(
            query,
            vec![
                ("filter[refunded]".to_string(), "true".to_string()),
                ("filter[subscription_id]".to_string(), "12".to_string()),
            ],
        );
    }
}
