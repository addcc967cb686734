//! Query-parameter building for list and get endpoints.
//!
//! The API speaks JSON:API query conventions: filters are
//! `filter[<snake_case_field>]`, side-loading is `include=<comma-list>`, and
//! pagination is `page[number]`/`page[size]`. Callers supply camelCase option
//! names; [`build_params`] translates them against a per-endpoint allow-list.
//!
//! This layer is pure: no network, no state, total on all inputs.

/// Converts a camelCase name to snake_case.
///
/// Inserts `_` before each ASCII uppercase letter and lowercases it. The
/// conversion is idempotent on input that is already snake_case.
///
/// # Example
///
/// ```rust
/// use lemonsqueezy_api::params::to_snake_case;
///
/// assert_eq!(to_snake_case("storeId"), "store_id");
/// assert_eq!(to_snake_case("orderItemId"), "order_item_id");
/// assert_eq!(to_snake_case("store_id"), "store_id");
/// ```
#[must_use]
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Translates camelCase call options into the API's query-parameter mapping.
///
/// For each `(key, value)` pair in `options`, in order:
///
/// - key in `allowed` → emit `filter[<snake_case(key)>]`
/// - `include` → emitted as-is (value is already a comma-joined list)
/// - `page` → emitted as `page[number]`
/// - `perPage` → emitted as `page[size]`
/// - anything else is silently dropped
///
/// Dropping unknown keys is deliberate: this is a permissive filter, not a
/// validator. The typed per-endpoint option structs are the guard against
/// typos; a misspelled key arriving here simply never reaches the wire.
///
/// # Example
///
/// ```rust
/// use lemonsqueezy_api::params::build_params;
///
/// let query = build_params(
///     &[
///         ("storeId", "5".to_string()),
///         ("page", "2".to_string()),
///         ("perPage", "10".to_string()),
///         ("bogus", "x".to_string()),
///     ],
///     &["storeId"],
/// );
/// assert_eq!(
///     query,
///     vec![
///         ("filter[store_id]".to_string(), "5".to_string()),
///         ("page[number]".to_string(), "2".to_string()),
///         ("page[size]".to_string(), "10".to_string()),
///     ],
/// );
/// ```
#[must_use]
pub fn build_params(options: &[(&str, String)], allowed: &[&str]) -> Vec<(String, String)> {
    let mut query = Vec::with_capacity(options.len());
    for (key, value) in options {
        if allowed.contains(key) {
            query.push((format!("filter[{}]", to_snake_case(key)), value.clone()));
        } else {
            match *key {
                "include" => query.push(("include".to_string(), value.clone())),
                "page" => query.push(("page[number]".to_string(), value.clone())),
                "perPage" => query.push(("page[size]".to_string(), value.clone())),
                _ => {}
            }
        }
    }
    query
}

/// Options shared by all get-by-id endpoints.
///
/// # Example
///
/// ```rust
/// use lemonsqueezy_api::GetOptions;
///
/// let options = GetOptions {
///     include: Some(vec!["product".to_string(), "store".to_string()]),
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOptions {
    /// Related resources to side-load under the response's `included` array.
    pub include: Option<Vec<String>>,
}

impl GetOptions {
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_include(&mut pairs, self.include.as_ref());
        pairs
    }
}

/// Appends `(key, value)` when the value is present.
pub(crate) fn push<T: ToString>(
    pairs: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: Option<T>,
) {
    if let Some(value) = value {
        pairs.push((key, value.to_string()));
    }
}

/// Appends the comma-joined `include` pair when present.
pub(crate) fn push_include(pairs: &mut Vec<(&'static str, String)>, include: Option<&Vec<String>>) {
    if let Some(include) = include {
        if !include.is_empty() {
            pairs.push(("include", include.join(",")));
        }
    }
}
