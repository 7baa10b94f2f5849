//! Market-Data Upstream
//!
//! Abstraction over the DexScreener-style API the resolver queries, plus the
//! payload shapes it may answer with.

mod dexscreener;
mod mock;
mod payload;

pub use dexscreener::{DexScreenerClient, DexScreenerConfig};
pub use mock::{MockMarketData, MockReply};
pub use payload::{CandidatePair, PairsPayload};

use std::fmt;

use async_trait::async_trait;

use crate::error::Result;

/// The three read endpoints of the market-data service
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Pair keyed by chain and pair address
    Pair { chain: String, address: String },
    /// All pairs trading a token address
    TokenPairs { address: String },
    /// Free-text search
    Search { query: String },
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pair { .. } => f.write_str("pair lookup"),
            Self::TokenPairs { .. } => f.write_str("token lookup"),
            Self::Search { .. } => f.write_str("search"),
        }
    }
}

/// Market-data client trait (Strategy pattern)
///
/// Implementations only move bytes: they return the decoded JSON body or a
/// transport/parse error. Shape detection is shared.
#[async_trait]
pub trait MarketDataClient: Send + Sync {
    /// Fetch the raw JSON body of one endpoint
    async fn fetch(&self, endpoint: &Endpoint) -> Result<serde_json::Value>;

    /// Client name for logs
    fn name(&self) -> &str;

    async fn pair(&self, chain: &str, address: &str) -> Result<PairsPayload> {
        let endpoint = Endpoint::Pair {
            chain: chain.to_string(),
            address: address.to_string(),
        };
        let body = self.fetch(&endpoint).await?;
        PairsPayload::detect(&endpoint, body)
    }

    async fn token_pairs(&self, address: &str) -> Result<PairsPayload> {
        let endpoint = Endpoint::TokenPairs {
            address: address.to_string(),
        };
        let body = self.fetch(&endpoint).await?;
        PairsPayload::detect(&endpoint, body)
    }

    async fn search(&self, query: &str) -> Result<PairsPayload> {
        let endpoint = Endpoint::Search {
            query: query.to_string(),
        };
        let body = self.fetch(&endpoint).await?;
        PairsPayload::detect(&endpoint, body)
    }
}
