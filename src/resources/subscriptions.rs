//! Subscription operations.
//!
//! Besides list/get, subscriptions support a partial update (plan change,
//! billing anchor, proration control) and four lifecycle actions. The
//! lifecycle actions are not separate endpoints: cancel/resume are PATCH
//! requests with a `cancelled` attribute, pause/unpause are PATCH requests
//! with a `pause` object (or `null` to unpause).

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::client::Client;
use crate::error::Error;
use crate::params::{self, build_params, GetOptions};
use crate::resources::require_id;

/// Filter names accepted by the subscriptions list endpoint.
const FILTERS: &[&str] = &[
    "storeId",
    "orderId",
    "orderItemId",
    "productId",
    "variantId",
    "status",
];

/// Options for [`Client::list_subscriptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSubscriptionsOptions {
    /// Only return subscriptions belonging to this store.
    pub store_id: Option<u64>,
    /// Only return subscriptions created by this order.
    pub order_id: Option<u64>,
    /// Only return subscriptions created by this order item.
    pub order_item_id: Option<u64>,
    /// Only return subscriptions for this product.
    pub product_id: Option<u64>,
    /// Only return subscriptions for this variant.
    pub variant_id: Option<u64>,
    /// Only return subscriptions with this status (e.g. `active`, `paused`).
    pub status: Option<String>,
    /// Related resources to side-load (e.g. `store`, `customer`).
    pub include: Option<Vec<String>>,
    /// Page number to fetch.
    pub page: Option<u32>,
    /// Results per page.
    pub per_page: Option<u32>,
}

impl ListSubscriptionsOptions {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        params::push(&mut pairs, "storeId", self.store_id);
        params::push(&mut pairs, "orderId", self.order_id);
        params::push(&mut pairs, "orderItemId", self.order_item_id);
        params::push(&mut pairs, "productId", self.product_id);
        params::push(&mut pairs, "variantId", self.variant_id);
        params::push(&mut pairs, "status", self.status.clone());
        params::push_include(&mut pairs, self.include.as_ref());
        params::push(&mut pairs, "page", self.page);
        params::push(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

/// How to handle proration when changing a subscription's plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proration {
    /// Change the plan without creating a proration adjustment.
    Disable,
    /// Invoice the prorated difference immediately.
    Immediate,
}

/// How a paused subscription treats access.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PauseMode {
    /// The customer loses access while payments are paused.
    #[default]
    Void,
    /// The customer keeps access for free while payments are paused.
    Free,
}

/// Options for [`Client::update_subscription`].
///
/// Omitted fields are not sent, preserving partial-update semantics
/// server-side: leaving `variant_id` and `product_id` unset means no plan
/// change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSubscriptionOptions {
    /// Move the subscription to this product (plan change).
    pub product_id: Option<u64>,
    /// Move the subscription to this variant (plan change).
    pub variant_id: Option<u64>,
    /// Day of the month to anchor billing to (1-31).
    pub billing_anchor: Option<u32>,
    /// Proration behavior for a plan change. When unset, the API's default
    /// proration applies and no proration key is sent.
    pub proration: Option<Proration>,
}

/// Options for [`Client::pause_subscription`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PauseSubscriptionOptions {
    /// Pause mode; defaults to [`PauseMode::Void`].
    pub mode: Option<PauseMode>,
    /// ISO 8601 timestamp at which payments automatically resume.
    pub resumes_at: Option<String>,
}

/// Builds the partial-update document, populating only supplied fields.
fn update_body(subscription_id: &str, options: &UpdateSubscriptionOptions) -> Value {
    let mut attributes = Map::new();
    if let Some(product_id) = options.product_id {
        attributes.insert("product_id".to_string(), json!(product_id));
    }
    if let Some(variant_id) = options.variant_id {
        attributes.insert("variant_id".to_string(), json!(variant_id));
    }
    if let Some(billing_anchor) = options.billing_anchor {
        attributes.insert("billing_anchor".to_string(), json!(billing_anchor));
    }
    match options.proration {
        Some(Proration::Disable) => {
            attributes.insert("disable_prorations".to_string(), json!(true));
        }
        Some(Proration::Immediate) => {
            attributes.insert("invoice_immediately".to_string(), json!(true));
        }
        None => {}
    }
    subscription_patch(subscription_id, Value::Object(attributes))
}

/// Wraps attributes in the `{data: {type, id, attributes}}` envelope.
fn subscription_patch(subscription_id: &str, attributes: Value) -> Value {
    json!({
        "data": {
            "type": "subscriptions",
            "id": subscription_id,
            "attributes": attributes,
        },
    })
}

impl Client {
    /// Lists subscriptions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Network`]
    /// for transport failures.
    pub async fn list_subscriptions(
        &self,
        options: ListSubscriptionsOptions,
    ) -> Result<Value, Error> {
        let query = build_params(&options.to_pairs(), FILTERS);
        self.get("subscriptions", query).await
    }

    /// Retrieves a single subscription.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `subscription_id` is empty; no
    /// request is sent in that case.
    pub async fn get_subscription(
        &self,
        subscription_id: &str,
        options: Option<GetOptions>,
    ) -> Result<Value, Error> {
        require_id("get_subscription", "subscription_id", subscription_id)?;
        let query = build_params(&options.unwrap_or_default().to_pairs(), &[]);
        self.get(&format!("subscriptions/{subscription_id}"), query)
            .await
    }

    /// Updates a subscription (plan change, billing anchor, proration).
    ///
    /// Only the fields set in `options` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `subscription_id` is empty; no
    /// request is sent in that case.
    pub async fn update_subscription(
        &self,
        subscription_id: &str,
        options: UpdateSubscriptionOptions,
    ) -> Result<Value, Error> {
        require_id("update_subscription", "subscription_id", subscription_id)?;
        let body = update_body(subscription_id, &options);
        self.patch(&format!("subscriptions/{subscription_id}"), body)
            .await
    }

    /// Cancels a subscription at the end of the current billing period.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `subscription_id` is empty; no
    /// request is sent in that case.
    pub async fn cancel_subscription(&self, subscription_id: &str) -> Result<Value, Error> {
        require_id("cancel_subscription", "subscription_id", subscription_id)?;
        let body = subscription_patch(subscription_id, json!({ "cancelled": true }));
        self.patch(&format!("subscriptions/{subscription_id}"), body)
            .await
    }

    /// Resumes a subscription that was scheduled for cancellation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `subscription_id` is empty; no
    /// request is sent in that case.
    pub async fn resume_subscription(&self, subscription_id: &str) -> Result<Value, Error> {
        require_id("resume_subscription", "subscription_id", subscription_id)?;
        let body = subscription_patch(subscription_id, json!({ "cancelled": false }));
        self.patch(&format!("subscriptions/{subscription_id}"), body)
            .await
    }

    /// Pauses payment collection on a subscription.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `subscription_id` is empty; no
    /// request is sent in that case.
    pub async fn pause_subscription(
        &self,
        subscription_id: &str,
        options: PauseSubscriptionOptions,
    ) -> Result<Value, Error> {
        require_id("pause_subscription", "subscription_id", subscription_id)?;

        let mut pause = Map::new();
        pause.insert("mode".to_string(), json!(options.mode.unwrap_or_default()));
        if let Some(resumes_at) = options.resumes_at {
            pause.insert("resumes_at".to_string(), json!(resumes_at));
        }

        let body = subscription_patch(subscription_id, json!({ "pause": Value::Object(pause) }));
        self.patch(&format!("subscriptions/{subscription_id}"), body)
            .await
    }

    /// Unpauses a paused subscription.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `subscription_id` is empty; no
    /// request is sent in that case.
    pub async fn unpause_subscription(&self, subscription_id: &str) -> Result<Value, Error> {
        require_id("unpause_subscription", "subscription_id", subscription_id)?;
        let body = subscription_patch(subscription_id, json!({ "pause": Value::Null }));
        self.patch(&format!("subscriptions/{subscription_id}"), body)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_body_with_only_billing_anchor() {
        let options = UpdateSubscriptionOptions {
            billing_anchor: Some(15),
            ..Default::default()
        };
        let body = update_body("1", &options);
        let attributes = body["data"]["attributes"].as_object().unwrap();

        assert_eq!(attributes.get("billing_anchor"), Some(&json!(15)));
        // No plan change and no proration override: those keys must be absent
        assert!(!attributes.contains_key("variant_id"));
        assert!(!attributes.contains_key("product_id"));
        assert!(!attributes.contains_key("disable_prorations"));
        assert!(!attributes.contains_key("invoice_immediately"));
    }

    #[test]
    fn test_update_body_with_plan_change_and_disabled_prorations() {
        let options = UpdateSubscriptionOptions {
            product_id: Some(10),
            variant_id: Some(20),
            proration: Some(Proration::Disable),
            ..Default::default()
        };
        let body = update_body("7", &options);
        let attributes = body["data"]["attributes"].as_object().unwrap();

        assert_eq!(attributes.get("product_id"), Some(&json!(10)));
        assert_eq!(attributes.get("variant_id"), Some(&json!(20)));
        assert_eq!(attributes.get("disable_prorations"), Some(&json!(true)));
        assert!(!attributes.contains_key("invoice_immediately"));
        assert_eq!(body["data"]["id"], "7");
        assert_eq!(body["data"]["type"], "subscriptions");
    }

    #[test]
    fn test_update_body_with_immediate_invoicing() {
        let options = UpdateSubscriptionOptions {
            variant_id: Some(20),
            proration: Some(Proration::Immediate),
            ..Default::default()
        };
        let body = update_body("7", &options);
        let attributes = body["data"]["attributes"].as_object().unwrap();

        assert_eq!(attributes.get("invoice_immediately"), Some(&json!(true)));
        assert!(!attributes.contains_key("disable_prorations"));
    }

    #[test]
    fn test_cancel_and_resume_payloads() {
        let cancel = subscription_patch("3", json!({ "cancelled": true }));
        assert_eq!(cancel["data"]["attributes"]["cancelled"], true);

        let resume = subscription_patch("3", json!({ "cancelled": false }));
        assert_eq!(resume["data"]["attributes"]["cancelled"], false);
    }

    #[test]
    fn test_pause_mode_defaults_to_void() {
        assert_eq!(json!(PauseMode::default()), json!("void"));
        assert_eq!(json!(PauseMode::Free), json!("free"));
    }

    #[test]
    fn test_status_filter_translates() {
        let options = ListSubscriptionsOptions {
            store_id: Some(5),
            status: Some("active".to_string()),
            ..Default::default()
        };
        let query = build_params(&options.to_pairs(), FILTERS);
        assert_eq!(
            query,
            vec![
                ("filter[store_id]".to_string(), "5".to_string()),
                ("filter[status]".to_string(), "active".to_string()),
            ],
        );
    }
}
