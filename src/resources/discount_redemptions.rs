//! Discount redemption operations.
//!
//! Redemptions record each use of a discount code against an order; this
//! surface is read-only.

use serde_json::Value;

use crate::client::Client;
use crate::error::Error;
use crate::params::{self, build_params, GetOptions};
use crate::resources::require_id;

/// Filter names accepted by the discount redemptions list endpoint.
const FILTERS: &[&str] = &["discountId", "orderId"];

/// Options for [`Client::list_discount_redemptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDiscountRedemptionsOptions {
    /// Only return redemptions of this discount.
    pub discount_id: Option<u64>,
    /// Only return redemptions applied to this order.
    pub order_id: Option<u64>,
    /// Related resources to side-load (e.g. `discount`, `order`).
    pub include: Option<Vec<String>>,
    /// Page number to fetch.
    pub page: Option<u32>,
    /// Results per page.
    pub per_page: Option<u32>,
}

impl ListDiscountRedemptionsOptions {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        params::push(&mut pairs, "discountId", self.discount_id);
        params::push(&mut pairs, "orderId", self.order_id);
        params::push_include(&mut pairs, self.include.as_ref());
        params::push(&mut pairs, "page", self.page);
        params::push(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

impl Client {
    /// Lists discount redemptions, optionally filtered by discount or order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Network`]
    /// for transport failures.
    pub async fn list_discount_redemptions(
        &self,
        options: ListDiscountRedemptionsOptions,
    ) -> Result<Value, Error> {
        let query = build_params(&options.to_pairs(), FILTERS);
        self.get("discount-redemptions", query).await
    }

    /// Retrieves a single discount redemption.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `discount_redemption_id` is empty;
    /// no request is sent in that case.
    pub async fn get_discount_redemption(
        &self,
        discount_redemption_id: &str,
        options: Option<GetOptions>,
    ) -> Result<Value, Error> {
        require_id(
            "get_discount_redemption",
            "discount_redemption_id",
            discount_redemption_id,
        )?;
        let query = build_params(&options.unwrap_or_default().to_pairs(), &[]);
        self.get(
            &format!("discount-redemptions/{discount_redemption_id}"),
            query,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_filter_translates() {
        let options = ListDiscountRedemptionsOptions {
            discount_id: Some(3),
            ..Default::default()
        };
        let query = build_params(&options.to_pairs(), FILTERS);
        assert_eq!(
            query,
            vec![("filter[discount_id]".to_string(), "3".to_string())],
        );
    }
}
