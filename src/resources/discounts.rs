//! Discount operations.
//!
//! Discount creation has the most involved body in the API: several
//! attributes are conditional on other options. `duration_in_months` only
//! makes sense for a repeating duration; the redemption-cap pair
//! (`is_limited_redemptions`/`max_redemptions`) is only sent when a cap is
//! given; variant limiting adds both an attribute flag and a to-many
//! `variants` relationship.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::client::Client;
use crate::error::{Error, ValidationError};
use crate::params::{self, build_params, GetOptions};
use crate::resources::{relationship, require_id};

/// Filter names accepted by the discounts list endpoint.
const FILTERS: &[&str] = &["storeId"];

/// Options for [`Client::list_discounts`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDiscountsOptions {
    /// Only return discounts belonging to this store.
    pub store_id: Option<u64>,
    /// Related resources to side-load (e.g. `store`, `variants`).
    pub include: Option<Vec<String>>,
    /// Page number to fetch.
    pub page: Option<u32>,
    /// Results per page.
    pub per_page: Option<u32>,
}

impl ListDiscountsOptions {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        params::push(&mut pairs, "storeId", self.store_id);
        params::push_include(&mut pairs, self.include.as_ref());
        params::push(&mut pairs, "page", self.page);
        params::push(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

/// Whether a discount amount is a percentage or a fixed sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountType {
    /// `amount` is a percentage (e.g. `10` = 10% off).
    #[default]
    Percent,
    /// `amount` is a fixed sum in the store currency's smallest unit.
    Fixed,
}

/// How long a discount applies to a subscription.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountDuration {
    /// Applies to the first payment only.
    #[default]
    Once,
    /// Applies for `duration_in_months` payments.
    Repeating,
    /// Applies to every payment.
    Forever,
}

/// Options for [`Client::create_discount`].
///
/// Required fields are constructor arguments; everything else is optional
/// and defaults to the API's defaults (`percent`, `once`, no cap, no
/// variant limiting).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDiscountOptions {
    /// The store the discount belongs to.
    pub store_id: u64,
    /// Display name of the discount.
    pub name: String,
    /// The code customers enter at checkout.
    pub code: String,
    /// The discount amount; interpreted per `amount_type`.
    pub amount: u64,
    /// Percentage or fixed amount.
    pub amount_type: AmountType,
    /// How long the discount applies to subscription payments.
    pub duration: DiscountDuration,
    /// Number of payments a `Repeating` discount applies to. Only sent for
    /// a non-once duration.
    pub duration_in_months: Option<u32>,
    /// Maximum number of redemptions. Setting this also sends
    /// `is_limited_redemptions: true`.
    pub max_redemptions: Option<u64>,
    /// ISO 8601 timestamp the discount becomes valid.
    pub starts_at: Option<String>,
    /// ISO 8601 timestamp the discount expires.
    pub expires_at: Option<String>,
    /// Restrict the discount to these variants. Setting this also sends
    /// `is_limited_to_products: true` and a `variants` relationship.
    pub variant_ids: Option<Vec<u64>>,
}

impl CreateDiscountOptions {
    /// Creates options with the required fields and API defaults for the
    /// rest (`percent`, `once`, unlimited redemptions, all products).
    #[must_use]
    pub fn new(
        store_id: u64,
        name: impl Into<String>,
        code: impl Into<String>,
        amount: u64,
    ) -> Self {
        Self {
            store_id,
            name: name.into(),
            code: code.into(),
            amount,
            amount_type: AmountType::default(),
            duration: DiscountDuration::default(),
            duration_in_months: None,
            max_redemptions: None,
            starts_at: None,
            expires_at: None,
            variant_ids: None,
        }
    }
}

/// Builds the JSON:API document for discount creation, applying the
/// conditional-attribute rules.
fn discount_body(options: &CreateDiscountOptions) -> Value {
    let mut attributes = Map::new();
    attributes.insert("name".to_string(), json!(options.name));
    attributes.insert("code".to_string(), json!(options.code));
    attributes.insert("amount".to_string(), json!(options.amount));
    attributes.insert("amount_type".to_string(), json!(options.amount_type));
    attributes.insert("duration".to_string(), json!(options.duration));

    if options.duration != DiscountDuration::Once {
        if let Some(months) = options.duration_in_months {
            attributes.insert("duration_in_months".to_string(), json!(months));
        }
    }
    if let Some(starts_at) = &options.starts_at {
        attributes.insert("starts_at".to_string(), json!(starts_at));
    }
    if let Some(expires_at) = &options.expires_at {
        attributes.insert("expires_at".to_string(), json!(expires_at));
    }
    if let Some(max) = options.max_redemptions {
        attributes.insert("is_limited_redemptions".to_string(), json!(true));
        attributes.insert("max_redemptions".to_string(), json!(max));
    }

    let mut relationships = Map::new();
    relationships.insert("store".to_string(), relationship("stores", options.store_id));

    if let Some(variant_ids) = &options.variant_ids {
        if !variant_ids.is_empty() {
            attributes.insert("is_limited_to_products".to_string(), json!(true));
            let data: Vec<Value> = variant_ids
                .iter()
                .map(|id| json!({ "type": "variants", "id": id.to_string() }))
                .collect();
            relationships.insert("variants".to_string(), json!({ "data": data }));
        }
    }

    json!({
        "data": {
            "type": "discounts",
            "attributes": Value::Object(attributes),
            "relationships": Value::Object(relationships),
        },
    })
}

impl Client {
    /// Lists discounts, optionally filtered by store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Network`]
    /// for transport failures.
    pub async fn list_discounts(&self, options: ListDiscountsOptions) -> Result<Value, Error> {
        let query = build_params(&options.to_pairs(), FILTERS);
        self.get("discounts", query).await
    }

    /// Retrieves a single discount.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `discount_id` is empty; no request
    /// is sent in that case.
    pub async fn get_discount(
        &self,
        discount_id: &str,
        options: Option<GetOptions>,
    ) -> Result<Value, Error> {
        require_id("get_discount", "discount_id", discount_id)?;
        let query = build_params(&options.unwrap_or_default().to_pairs(), &[]);
        self.get(&format!("discounts/{discount_id}"), query).await
    }

    /// Creates a discount.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `name` or `code` is empty; no
    /// request is sent in that case. Returns [`Error::Api`] or
    /// [`Error::Network`] otherwise.
    pub async fn create_discount(&self, options: CreateDiscountOptions) -> Result<Value, Error> {
        if options.name.trim().is_empty() {
            return Err(ValidationError {
                method: "create_discount",
                field: "name",
            }
            .into());
        }
        if options.code.trim().is_empty() {
            return Err(ValidationError {
                method: "create_discount",
                field: "code",
            }
            .into());
        }

        let body = discount_body(&options);
        self.post("discounts", body).await
    }

    /// Deletes a discount.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `discount_id` is empty; no request
    /// is sent in that case.
    pub async fn delete_discount(&self, discount_id: &str) -> Result<(), Error> {
        require_id("delete_discount", "discount_id", discount_id)?;
        self.delete(&format!("discounts/{discount_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_discount_body_omits_conditional_attributes() {
        let options = CreateDiscountOptions::new(1, "X", "ABC123", 10);
        let body = discount_body(&options);
        let attributes = body["data"]["attributes"].as_object().unwrap();

        assert_eq!(attributes.get("name"), Some(&json!("X")));
        assert_eq!(attributes.get("code"), Some(&json!("ABC123")));
        assert_eq!(attributes.get("amount"), Some(&json!(10)));
        assert_eq!(attributes.get("amount_type"), Some(&json!("percent")));
        assert_eq!(attributes.get("duration"), Some(&json!("once")));
        assert!(!attributes.contains_key("duration_in_months"));
        assert!(!attributes.contains_key("is_limited_redemptions"));
        assert!(!attributes.contains_key("max_redemptions"));
        assert!(!attributes.contains_key("is_limited_to_products"));

        let relationships = body["data"]["relationships"].as_object().unwrap();
        assert_eq!(relationships["store"]["data"]["id"], "1");
        assert!(!relationships.contains_key("variants"));
    }

    #[test]
    fn test_repeating_duration_includes_months() {
        let mut options = CreateDiscountOptions::new(1, "X", "ABC123", 10);
        options.duration = DiscountDuration::Repeating;
        options.duration_in_months = Some(3);

        let body = discount_body(&options);
        let attributes = body["data"]["attributes"].as_object().unwrap();

        assert_eq!(attributes.get("duration"), Some(&json!("repeating")));
        assert_eq!(attributes.get("duration_in_months"), Some(&json!(3)));
    }

    #[test]
    fn test_once_duration_suppresses_months_even_when_set() {
        let mut options = CreateDiscountOptions::new(1, "X", "ABC123", 10);
        options.duration_in_months = Some(3);

        let body = discount_body(&options);
        let attributes = body["data"]["attributes"].as_object().unwrap();

        assert!(!attributes.contains_key("duration_in_months"));
    }

    #[test]
    fn test_redemption_cap_sends_flag_and_count() {
        let mut options = CreateDiscountOptions::new(1, "X", "ABC123", 10);
        options.max_redemptions = Some(100);

        let body = discount_body(&options);
        let attributes = body["data"]["attributes"].as_object().unwrap();

        assert_eq!(attributes.get("is_limited_redemptions"), Some(&json!(true)));
        assert_eq!(attributes.get("max_redemptions"), Some(&json!(100)));
    }

    #[test]
    fn test_variant_limiting_adds_flag_and_relationship() {
        let mut options = CreateDiscountOptions::new(1, "X", "ABC123", 10);
        options.variant_ids = Some(vec![11, 22]);

        let body = discount_body(&options);
        let attributes = body["data"]["attributes"].as_object().unwrap();
        assert_eq!(attributes.get("is_limited_to_products"), Some(&json!(true)));

        let variants = body["data"]["relationships"]["variants"]["data"]
            .as_array()
            .unwrap();
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0], json!({ "type": "variants", "id": "11" }));
        assert_eq!(variants[1], json!({ "type": "variants", "id": "22" }));
    }

    #[test]
    fn test_empty_variant_list_is_treated_as_unlimited() {
        let mut options = CreateDiscountOptions::new(1, "X", "ABC123", 10);
        options.variant_ids = Some(Vec::new());

        let body = discount_body(&options);
        let attributes = body["data"]["attributes"].as_object().unwrap();
        assert!(!attributes.contains_key("is_limited_to_products"));
        assert!(body["data"]["relationships"]
            .as_object()
            .unwrap()
            .get("variants")
            .is_none());
    }

    #[test]
    fn test_enum_wire_forms_are_lowercase() {
        assert_eq!(json!(AmountType::Percent), json!("percent"));
        assert_eq!(json!(AmountType::Fixed), json!("fixed"));
        assert_eq!(json!(DiscountDuration::Once), json!("once"));
        assert_eq!(json!(DiscountDuration::Repeating), json!("repeating"));
        assert_eq!(json!(DiscountDuration::Forever), json!("forever"));
    }

    #[test]
    fn test_fixed_amount_type_serializes() {
        let mut options = CreateDiscountOptions::new(1, "X", "ABC123", 500);
        options.amount_type = AmountType::Fixed;

        let body = discount_body(&options);
        assert_eq!(body["data"]["attributes"]["amount_type"], "fixed");
    }
}
