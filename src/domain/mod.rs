//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains the resource's path-building types (where the
//! resource has any) and its sub-client. Sub-clients borrow the top-level
//! [`CryptowatchClient`](crate::client::CryptowatchClient) and are created
//! through its accessor methods.

pub mod aggregate;
pub mod asset;
pub mod exchange;
pub mod market;
pub mod pair;

/// Path for a symbol-indexed resource: `{base}` or `{base}/{symbol}`.
pub(crate) fn symbol_path(base: &str, symbol: Option<&str>) -> String {
    match symbol {
        Some(s) => format!("{}/{}", base, s),
        None => base.to_string(),
    }
}
