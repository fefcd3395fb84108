//! Pair domain — base/quote asset combinations.

use crate::client::CryptowatchClient;
use crate::domain::symbol_path;
use crate::error::SdkError;

use serde_json::Value;

/// Sub-client for pair lookups.
pub struct Pairs<'a> {
    pub(crate) client: &'a CryptowatchClient,
}

impl<'a> Pairs<'a> {
    /// All supported pairs, in no particular order.
    pub fn list(&self) -> Result<Value, SdkError> {
        Ok(self.client.http.get(&symbol_path("pairs", None))?)
    }

    /// A single pair, with all markets listing it.
    pub fn get(&self, symbol: &str) -> Result<Value, SdkError> {
        Ok(self.client.http.get(&symbol_path("pairs", Some(symbol)))?)
    }
}
