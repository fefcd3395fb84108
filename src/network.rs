//! Network URL and header constants for the Cryptowatch SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.cryptowat.ch";

/// User-Agent sent with every request.
pub const USER_AGENT: &str = concat!("cryptowatch-sdk/", env!("CARGO_PKG_VERSION"));
