//! # Cryptowatch SDK
//!
//! A Rust client for the Cryptowatch public market-data REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Domain types: market routes, route parameters, selectors
//! 2. **HTTP** — `CryptowatchHttp`, a thin blocking GET executor
//! 3. **High-Level Client** — `CryptowatchClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cryptowatch_sdk::prelude::*;
//!
//! let client = CryptowatchClient::builder().build();
//!
//! let btc = client.assets().get("btc")?;
//! let trades = client.markets().trades(
//!     "gdax",
//!     "btcusd",
//!     TradesParams { limit: Some(10), since: None },
//! )?;
//! ```
//!
//! Every accessor returns the decoded response body as a raw
//! [`serde_json::Value`]; the API wraps payloads in a `{"result": ...,
//! "allowance": ...}` envelope which the SDK passes through unchanged.

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): routes, parameters, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL and header constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Blocking HTTP executor.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CryptowatchClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types — markets
    pub use crate::domain::market::{MarketRoute, MarketSelector, OhlcParams, TradesParams};

    // Domain types — aggregates
    pub use crate::domain::aggregate::AggregateKind;

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Client + sub-clients
    pub use crate::client::{
        AggregatesClient, AssetsClient, CryptowatchClient, CryptowatchClientBuilder,
        ExchangesClient, MarketsClient, PairsClient,
    };
}
