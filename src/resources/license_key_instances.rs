//! License key instance operations.
//!
//! An instance is one activation of a license key on a device or install.

use serde_json::Value;

use crate::client::Client;
use crate::error::Error;
use crate::params::{self, build_params, GetOptions};
use crate::resources::require_id;

/// Filter names accepted by the license key instances list endpoint.
const FILTERS: &[&str] = &["licenseKeyId"];

/// Options for [`Client::list_license_key_instances`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListLicenseKeyInstancesOptions {
    /// Only return instances of this license key.
    pub license_key_id: Option<u64>,
    /// Related resources to side-load (e.g. `license-key`).
    pub include: Option<Vec<String>>,
    /// Page number to fetch.
    pub page: Option<u32>,
    /// Results per page.
    pub per_page: Option<u32>,
}

impl ListLicenseKeyInstancesOptions {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        params::push(&mut pairs, "licenseKeyId", self.license_key_id);
        params::push_include(&mut pairs, self.include.as_ref());
        params::push(&mut pairs, "page", self.page);
        params::push(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

impl Client {
    /// Lists license key instances.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Network`]
    /// for transport failures.
    pub async fn list_license_key_instances(
        &self,
        options: ListLicenseKeyInstancesOptions,
    ) -> Result<Value, Error> {
        let query = build_params(&options.to_pairs(), FILTERS);
        self.get("license-key-instances", query).await
    }

    /// Retrieves a single license key instance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `license_key_instance_id` is empty;
    /// no request is sent in that case.
    pub async fn get_license_key_instance(
        &self,
        license_key_instance_id: &str,
        options: Option<GetOptions>,
    ) -> Result<Value, Error> {
        require_id(
            "get_license_key_instance",
            "license_key_instance_id",
            license_key_instance_id,
        )?;
        let query = build_params(&options.unwrap_or_default().to_pairs(), &[]);
        self.get(
            &format!("license-key-instances/{license_key_instance_id}"),
            query,
        )
        .await
    }
}
