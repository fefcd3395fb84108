//! Market domain — routes, selectors, and the markets sub-client.
//!
//! A market is a pair listed on an exchange; pair `btceur` on exchange
//! `kraken` is a market. Each market exposes a fixed set of sub-resources
//! ([`MarketRoute`]), two of which take extra query parameters.

use crate::client::CryptowatchClient;
use crate::error::SdkError;

use serde_json::Value;

// ─── Route parameters ────────────────────────────────────────────────────────

/// Query parameters accepted by the `trades` route.
///
/// Absent fields are omitted from the query string; the server applies its
/// own defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TradesParams {
    /// Maximum number of trades returned.
    pub limit: Option<u32>,
    /// Only return trades at or after this Unix timestamp.
    pub since: Option<i64>,
}

/// Query parameters accepted by the `ohlc` route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OhlcParams {
    /// Only return candles opening before this Unix timestamp.
    pub before: Option<i64>,
    /// Only return candles opening after this Unix timestamp.
    pub after: Option<i64>,
    /// Candle periods to return, in seconds. Sent comma-joined.
    pub periods: Option<Vec<u32>>,
}

// ─── MarketRoute ─────────────────────────────────────────────────────────────

/// A market sub-resource.
///
/// `Trades` and `Ohlc` are the only routes that accept query parameters, so
/// they carry them inline; the remaining routes take none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketRoute {
    /// Last price.
    Price,
    /// Last price plus 24-hour sliding-window stats.
    Summary,
    /// Current asks and bids.
    Orderbook,
    /// Most recent trades, incrementing chronologically.
    Trades(TradesParams),
    /// OHLC candlestick data.
    Ohlc(OhlcParams),
}

impl MarketRoute {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Summary => "summary",
            Self::Orderbook => "orderbook",
            Self::Trades(_) => "trades",
            Self::Ohlc(_) => "ohlc",
        }
    }

    /// Query string for the route's parameters, keys in their fixed order,
    /// values percent-encoded. `None` when no parameter is present.
    fn query(&self) -> Option<String> {
        let mut params = Vec::new();
        match self {
            Self::Trades(p) => {
                if let Some(limit) = p.limit {
                    params.push(format!("limit={}", limit));
                }
                if let Some(since) = p.since {
                    params.push(format!("since={}", since));
                }
            }
            Self::Ohlc(p) => {
                if let Some(before) = p.before {
                    params.push(format!("before={}", before));
                }
                if let Some(after) = p.after {
                    params.push(format!("after={}", after));
                }
                if let Some(periods) = &p.periods {
                    let joined = periods
                        .iter()
                        .map(u32::to_string)
                        .collect::<Vec<_>>()
                        .join(",");
                    params.push(format!("periods={}", urlencoding::encode(&joined)));
                }
            }
            _ => {}
        }

        if params.is_empty() {
            None
        } else {
            Some(params.join("&"))
        }
    }
}

impl std::fmt::Display for MarketRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── MarketSelector ──────────────────────────────────────────────────────────

/// Selector for a market and an optional sub-resource.
///
/// The path grades with the fields present: an exchange alone addresses that
/// exchange's market index, exchange + pair a single market, and a route a
/// sub-resource of that market. A route set without a pair is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSelector {
    exchange: String,
    pair: Option<String>,
    route: Option<MarketRoute>,
}

impl MarketSelector {
    pub fn exchange(exchange: &str) -> Self {
        Self {
            exchange: exchange.to_string(),
            pair: None,
            route: None,
        }
    }

    pub fn pair(mut self, pair: &str) -> Self {
        self.pair = Some(pair.to_string());
        self
    }

    pub fn route(mut self, route: MarketRoute) -> Self {
        self.route = Some(route);
        self
    }

    /// URL path (and query string, when the route carries parameters) for
    /// this selector, relative to the API origin.
    pub fn path(&self) -> String {
        let mut path = format!("markets/{}", self.exchange);
        if let Some(pair) = &self.pair {
            path.push('/');
            path.push_str(pair);
            if let Some(route) = &self.route {
                path.push('/');
                path.push_str(route.as_str());
                if let Some(query) = route.query() {
                    path.push('?');
                    path.push_str(&query);
                }
            }
        }
        path
    }
}

// ─── Sub-client ──────────────────────────────────────────────────────────────

/// Sub-client for market operations.
pub struct Markets<'a> {
    pub(crate) client: &'a CryptowatchClient,
}

impl<'a> Markets<'a> {
    /// All supported markets across all exchanges.
    pub fn list(&self) -> Result<Value, SdkError> {
        Ok(self.client.http.get("markets")?)
    }

    /// Markets listed on a single exchange.
    pub fn by_exchange(&self, exchange: &str) -> Result<Value, SdkError> {
        self.get(&MarketSelector::exchange(exchange))
    }

    /// The market or sub-resource addressed by `selector`.
    pub fn get(&self, selector: &MarketSelector) -> Result<Value, SdkError> {
        Ok(self.client.http.get(&selector.path())?)
    }

    /// A market's last price.
    pub fn price(&self, exchange: &str, pair: &str) -> Result<Value, SdkError> {
        self.get(
            &MarketSelector::exchange(exchange)
                .pair(pair)
                .route(MarketRoute::Price),
        )
    }

    /// A market's last price and 24-hour sliding-window stats.
    pub fn summary(&self, exchange: &str, pair: &str) -> Result<Value, SdkError> {
        self.get(
            &MarketSelector::exchange(exchange)
                .pair(pair)
                .route(MarketRoute::Summary),
        )
    }

    /// A market's order book. Orders are `[price, amount]` lists.
    pub fn orderbook(&self, exchange: &str, pair: &str) -> Result<Value, SdkError> {
        self.get(
            &MarketSelector::exchange(exchange)
                .pair(pair)
                .route(MarketRoute::Orderbook),
        )
    }

    /// A market's most recent trades. Trades are
    /// `[id, timestamp, price, amount]` lists.
    pub fn trades(
        &self,
        exchange: &str,
        pair: &str,
        params: TradesParams,
    ) -> Result<Value, SdkError> {
        self.get(
            &MarketSelector::exchange(exchange)
                .pair(pair)
                .route(MarketRoute::Trades(params)),
        )
    }

    /// A market's OHLC candlestick data, keyed by period. Candles are
    /// `[close_time, open, high, low, close, volume, quote_volume]` lists.
    pub fn ohlc(
        &self,
        exchange: &str,
        pair: &str,
        params: OhlcParams,
    ) -> Result<Value, SdkError> {
        self.get(
            &MarketSelector::exchange(exchange)
                .pair(pair)
                .route(MarketRoute::Ohlc(params)),
        )
    }
}
