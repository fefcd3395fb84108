//! Asset domain — tradable crypto and fiat currencies.

use crate::client::CryptowatchClient;
use crate::domain::symbol_path;
use crate::error::SdkError;

use serde_json::Value;

/// Sub-client for asset lookups.
pub struct Assets<'a> {
    pub(crate) client: &'a CryptowatchClient,
}

impl<'a> Assets<'a> {
    /// All supported assets.
    pub fn list(&self) -> Result<Value, SdkError> {
        Ok(self.client.http.get(&symbol_path("assets", None))?)
    }

    /// A single asset, with the markets it appears in as base or quote.
    pub fn get(&self, symbol: &str) -> Result<Value, SdkError> {
        Ok(self.client.http.get(&symbol_path("assets", Some(symbol)))?)
    }
}
