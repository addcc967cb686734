//! File operations.
//!
//! Files are downloadable artifacts attached to variants.

use serde_json::Value;

use crate::client::Client;
use crate::error::Error;
use crate::params::{self, build_params, GetOptions};
use crate::resources::require_id;

/// Filter names accepted by the files list endpoint.
const FILTERS: &[&str] = &["variantId"];

/// Options for [`Client::list_files`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilesOptions {
    /// Only return files attached to this variant.
    pub variant_id: Option<u64>,
    /// Related resources to side-load (e.g. `variant`).
    pub include: Option<Vec<String>>,
    /// Page number to fetch.
    pub page: Option<u32>,
    /// Results per page.
    pub per_page: Option<u32>,
}

impl ListFilesOptions {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        params::push(&mut pairs, "variantId", self.variant_id);
        params::push_include(&mut pairs, self.include.as_ref());
        params::push(&mut pairs, "page", self.page);
        params::push(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

impl Client {
    /// Lists files, optionally filtered by variant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx responses and [`Error::Network`]
    /// for transport failures.
    pub async fn list_files(&self, options: ListFilesOptions) -> Result<Value, Error> {
        let query = build_params(&options.to_pairs(), FILTERS);
        self.get("files", query).await
    }

    /// Retrieves a single file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `file_id` is empty; no request is
    /// sent in that case.
    pub async fn get_file(
        &self,
        file_id: &str,
        options: Option<GetOptions>,
    ) -> Result<Value, Error> {
        require_id("get_file", "file_id", file_id)?;
        let query = build_params(&options.unwrap_or_default().to_pairs(), &[]);
        self.get(&format!("files/{file_id}"), query).await
    }
}
