//! High-level client — `CryptowatchClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>.rs`. This module
//! keeps the builder and the accessor methods.

use crate::domain::aggregate::Aggregates;
use crate::domain::asset::Assets;
use crate::domain::exchange::Exchanges;
use crate::domain::market::Markets;
use crate::domain::pair::Pairs;
use crate::http::CryptowatchHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::aggregate::Aggregates as AggregatesClient;
pub use crate::domain::asset::Assets as AssetsClient;
pub use crate::domain::exchange::Exchanges as ExchangesClient;
pub use crate::domain::market::Markets as MarketsClient;
pub use crate::domain::pair::Pairs as PairsClient;

/// The primary entry point for the Cryptowatch SDK.
///
/// Provides nested sub-client accessors for each resource:
/// `client.assets()`, `client.markets()`, etc. The client holds no state
/// beyond the reusable HTTP connection pool; calls are independent and
/// repeatable.
#[derive(Clone)]
pub struct CryptowatchClient {
    pub(crate) http: CryptowatchHttp,
}

impl CryptowatchClient {
    pub fn builder() -> CryptowatchClientBuilder {
        CryptowatchClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn assets(&self) -> Assets<'_> {
        Assets { client: self }
    }

    pub fn pairs(&self) -> Pairs<'_> {
        Pairs { client: self }
    }

    pub fn exchanges(&self) -> Exchanges<'_> {
        Exchanges { client: self }
    }

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn aggregates(&self) -> Aggregates<'_> {
        Aggregates { client: self }
    }
}

impl Default for CryptowatchClient {
    fn default() -> Self {
        Self::builder().build()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CryptowatchClientBuilder {
    base_url: String,
}

impl Default for CryptowatchClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
        }
    }
}

impl CryptowatchClientBuilder {
    /// Override the API origin. Mainly useful for tests.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn build(self) -> CryptowatchClient {
        CryptowatchClient {
            http: CryptowatchHttp::new(&self.base_url),
        }
    }
}
