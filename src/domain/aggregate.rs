//! Aggregate domain — cross-market snapshots.
//!
//! Aggregates return the price or summary of every supported market in a
//! single request, keyed `"{exchange}:{pair}"`.

use crate::client::CryptowatchClient;
use crate::error::SdkError;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Cross-market snapshot kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateKind {
    Prices,
    Summaries,
}

impl AggregateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prices => "prices",
            Self::Summaries => "summaries",
        }
    }

    pub(crate) fn path(&self) -> String {
        format!("markets/{}", self.as_str())
    }
}

impl std::fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AggregateKind {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prices" => Ok(Self::Prices),
            "summaries" => Ok(Self::Summaries),
            other => Err(SdkError::InvalidArgument(format!(
                "unknown aggregate kind {:?}: use either \"prices\" or \"summaries\"",
                other
            ))),
        }
    }
}

/// Sub-client for aggregate snapshots.
pub struct Aggregates<'a> {
    pub(crate) client: &'a CryptowatchClient,
}

impl<'a> Aggregates<'a> {
    pub fn get(&self, kind: AggregateKind) -> Result<Value, SdkError> {
        Ok(self.client.http.get(&kind.path())?)
    }

    /// Current price of every supported market.
    pub fn prices(&self) -> Result<Value, SdkError> {
        self.get(AggregateKind::Prices)
    }

    /// 24-hour summary of every supported market.
    pub fn summaries(&self) -> Result<Value, SdkError> {
        self.get(AggregateKind::Summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_paths() {
        assert_eq!(AggregateKind::Prices.path(), "markets/prices");
        assert_eq!(AggregateKind::Summaries.path(), "markets/summaries");
    }

    #[test]
    fn test_parse_valid_kinds() {
        assert_eq!("prices".parse::<AggregateKind>().unwrap(), AggregateKind::Prices);
        assert_eq!(
            "summaries".parse::<AggregateKind>().unwrap(),
            AggregateKind::Summaries
        );
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        let err = "test".parse::<AggregateKind>().unwrap_err();
        assert!(matches!(err, SdkError::InvalidArgument(_)));
    }

    #[test]
    fn test_parse_rejects_empty() {
        let err = "".parse::<AggregateKind>().unwrap_err();
        assert!(matches!(err, SdkError::InvalidArgument(_)));
    }

    #[test]
    fn test_aggregate_kind_serde() {
        let k: AggregateKind = serde_json::from_str("\"prices\"").unwrap();
        assert_eq!(k, AggregateKind::Prices);
        assert_eq!(serde_json::to_string(&AggregateKind::Summaries).unwrap(), "\"summaries\"");
    }
}
