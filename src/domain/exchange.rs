//! Exchange domain — venues listing markets.

use crate::client::CryptowatchClient;
use crate::domain::symbol_path;
use crate::error::SdkError;

use serde_json::Value;

/// Sub-client for exchange lookups.
pub struct Exchanges<'a> {
    pub(crate) client: &'a CryptowatchClient,
}

impl<'a> Exchanges<'a> {
    /// All supported exchanges.
    pub fn list(&self) -> Result<Value, SdkError> {
        Ok(self.client.http.get(&symbol_path("exchanges", None))?)
    }

    /// A single exchange, with its associated routes.
    pub fn get(&self, symbol: &str) -> Result<Value, SdkError> {
        Ok(self
            .client
            .http
            .get(&symbol_path("exchanges", Some(symbol)))?)
    }
}
