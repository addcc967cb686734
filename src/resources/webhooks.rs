//! Webhook operations.
//!
//! Webhooks are the only resource with full CRUD: create a subscription to
//! store events, update its URL/events/secret, and delete it. The signing
//! secret is write-only server-side; it is sent on create/update but never
//! returned in responses.

use serde_json::{json, Map, Value};

use crate::client::Client;
use crate::error::{Error, ValidationError};
use crate::params::{self, build_params, GetOptions};
use crate::resources::{relationship, require_id};

/// Filter names accepted by the webhooks list endpoint.
const FILTERS: &[&str] = &["storeId"];

/// Options for [`Client::list_webhooks`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListWebhooksOptions {
    /// Only return webhooks belonging to this store.
    pub store_id: Option<u64>,
    /// Related resources to side-load (e.g. `store`).
    pub include: Option<Vec<String>>,
    /// Page number to fetch.
    pub page: Option<u32>,
    /// Results per page.
    pub per_page: Option<u32>,
}

impl ListWebhooksOptions {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        params::push(&mut pairs, "storeId", self.store_id);
        params::push_include(&mut pairs, self.include.as_ref());
        params::push(&mut pairs, "page", self.page);
        params::push(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

/// Options for [`Client::create_webhook`]. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWebhookOptions {
    /// The store the webhook belongs to.
    pub store_id: u64,
    /// The endpoint the events are delivered to.
    pub url: String,
    /// Event names to subscribe to (e.g. `order_created`).
    pub events: Vec<String>,
    /// Secret used to sign delivery payloads.
    pub secret: String,
}

/// Options for [`Client::update_webhook`].
///
/// Omitted fields are left unchanged server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateWebhookOptions {
    /// New delivery endpoint.
    pub url: Option<String>,
    /// New event subscription list, replacing the current one.
    pub events: Option<Vec<String>>,
    /// New signing secret.
    pub secret: Option<String>,
}

/// Builds the JSON:API document for webhook creation.
fn create_body(options: &CreateWebhookOptions) -> Value {
    json!({
        "data": {
            "type": "webhooks",
            "attributes": {
                "url": options.url,
                "events": options.events,
                "secret": options.secret,
            },
            "relationships": {
                "store": relationship("stores", options.store_id),
            },
        },
    })
}

/// Builds the partial-update document, populating only supplied fields.
fn update_body(webhook_id: &str, options: &UpdateWebhookOptions) -> Value {
    let mut attributes = Map::new();
    if let Some(url) = &options.url {
        attributes.insert("url".to_string(), json!(url));
    }
    if let Some(events) = &options.events {
        attributes.insert("events".to_string(), json!(events));
    }
    if let Some(secret) = &options.secret {
        attributes.insert("secret".to_string(), json!(secret));
    }
    json!({
        "data": {
            "type": "webhooks",
            "id": webhook_id,
            "attributes": Value::Object(attributes),
        },
    })
}

impl Client {
    /// Lists webhooks, optionally filtered by store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Network`]
    /// for transport failures.
    pub async fn list_webhooks(&self, options: ListWebhooksOptions) -> Result<Value, Error> {
        let query = build_params(&options.to_pairs(), FILTERS);
        self.get("webhooks", query).await
    }

    /// Retrieves a single webhook.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `webhook_id` is empty; no request
    /// is sent in that case.
    pub async fn get_webhook(
        &self,
        webhook_id: &str,
        options: Option<GetOptions>,
    ) -> Result<Value, Error> {
        require_id("get_webhook", "webhook_id", webhook_id)?;
        let query = build_params(&options.unwrap_or_default().to_pairs(), &[]);
        self.get(&format!("webhooks/{webhook_id}"), query).await
    }

    /// Creates a webhook subscription for a store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `url` or `secret` is empty or
    /// `events` is empty; no request is sent in that case.
    pub async fn create_webhook(&self, options: CreateWebhookOptions) -> Result<Value, Error> {
        if options.url.trim().is_empty() {
            return Err(ValidationError {
                method: "create_webhook",
                field: "url",
            }
            .into());
        }
        if options.events.is_empty() {
            return Err(ValidationError {
                method: "create_webhook",
                field: "events",
            }
            .into());
        }
        if options.secret.trim().is_empty() {
            return Err(ValidationError {
                method: "create_webhook",
                field: "secret",
            }
            .into());
        }

        let body = create_body(&options);
        self.post("webhooks", body).await
    }

    /// Updates a webhook. Only the fields set in `options` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `webhook_id` is empty; no request
    /// is sent in that case.
    pub async fn update_webhook(
        &self,
        webhook_id: &str,
        options: UpdateWebhookOptions,
    ) -> Result<Value, Error> {
        require_id("update_webhook", "webhook_id", webhook_id)?;
        let body = update_body(webhook_id, &options);
        self.patch(&format!("webhooks/{webhook_id}"), body).await
    }

    /// Deletes a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `webhook_id` is empty; no request
    /// is sent in that case.
    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<(), Error> {
        require_id("delete_webhook", "webhook_id", webhook_id)?;
        self.delete(&format!("webhooks/{webhook_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_options() -> CreateWebhookOptions {
        CreateWebhookOptions {
            store_id: 1,
            url: "https://example.com/hooks".to_string(),
            events: vec!["order_created".to_string()],
            secret: "shhh".to_string(),
        }
    }

    #[test]
    fn test_create_body_includes_all_attributes_and_store() {
        let body = create_body(&valid_options());
        let data = &body["data"];

        assert_eq!(data["type"], "webhooks");
        assert_eq!(data["attributes"]["url"], "https://example.com/hooks");
        assert_eq!(data["attributes"]["events"], json!(["order_created"]));
        assert_eq!(data["attributes"]["secret"], "shhh");
        assert_eq!(data["relationships"]["store"]["data"]["id"], "1");
    }

    #[test]
    fn test_update_body_only_sends_supplied_fields() {
        let options = UpdateWebhookOptions {
            events: Some(vec![
                "order_created".to_string(),
                "order_refunded".to_string(),
            ]),
            ..Default::default()
        };
        let body = update_body("9", &options);
        let attributes = body["data"]["attributes"].as_object().unwrap();

        assert_eq!(
            attributes.get("events"),
            Some(&json!(["order_created", "order_refunded"])),
        );
        assert!(!attributes.contains_key("url"));
        assert!(!attributes.contains_key("secret"));
        assert_eq!(body["data"]["id"], "9");
    }
}
