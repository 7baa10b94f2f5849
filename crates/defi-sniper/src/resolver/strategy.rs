//! Resolution Strategies
//!
//! Each strategy maps a lookup query to zero or more candidates using one
//! upstream endpoint. The resolver walks them in order.

use async_trait::async_trait;

use super::LookupQuery;
use crate::error::Result;
use crate::upstream::{CandidatePair, MarketDataClient};

/// Chain used for a direct lookup when nothing else says otherwise
pub const FALLBACK_CHAIN: &str = "ethereum";

/// One step of the resolution cascade
#[async_trait]
pub trait ResolutionStrategy: Send + Sync {
    /// Label used in logs and error details
    fn name(&self) -> &'static str;

    /// Whether this strategy makes sense for the query at all
    fn applies(&self, _query: &LookupQuery) -> bool {
        true
    }

    /// Candidates for the query; empty means "nothing usable"
    async fn candidates(
        &self,
        client: &dyn MarketDataClient,
        query: &LookupQuery,
    ) -> Result<Vec<CandidatePair>>;
}

/// Pair keyed by `(chain, identifier)`
pub struct DirectPairLookup;

#[async_trait]
impl ResolutionStrategy for DirectPairLookup {
    fn name(&self) -> &'static str {
        "pair lookup"
    }

    fn applies(&self, query: &LookupQuery) -> bool {
        query.chain.is_some() || query.shape.is_address()
    }

    async fn candidates(
        &self,
        client: &dyn MarketDataClient,
        query: &LookupQuery,
    ) -> Result<Vec<CandidatePair>> {
        let chain = query
            .chain
            .as_deref()
            .or_else(|| query.shape.default_chain())
            .unwrap_or(FALLBACK_CHAIN);

        Ok(client
            .pair(chain, &query.identifier)
            .await?
            .into_candidates())
    }
}

/// Every pair trading the identifier as a token, filtered by chain hint
pub struct TokenPairsLookup;

#[async_trait]
impl ResolutionStrategy for TokenPairsLookup {
    fn name(&self) -> &'static str {
        "token lookup"
    }

    async fn candidates(
        &self,
        client: &dyn MarketDataClient,
        query: &LookupQuery,
    ) -> Result<Vec<CandidatePair>> {
        let candidates = client.token_pairs(&query.identifier).await?.into_candidates();
        let total = candidates.len();

        let kept: Vec<CandidatePair> = candidates
            .into_iter()
            .filter(|c| query.accepts_chain(c.chain_id()))
            .collect();

        if kept.len() < total {
            tracing::debug!(
                total,
                kept = kept.len(),
                chain = query.chain.as_deref().unwrap_or("any"),
                "filtered token pairs by chain"
            );
        }

        Ok(kept)
    }
}

/// Free-text search, first hit only
pub struct TextSearch;

#[async_trait]
impl ResolutionStrategy for TextSearch {
    fn name(&self) -> &'static str {
        "search"
    }

    async fn candidates(
        &self,
        client: &dyn MarketDataClient,
        query: &LookupQuery,
    ) -> Result<Vec<CandidatePair>> {
        Ok(client
            .search(&query.identifier)
            .await?
            .into_candidates()
            .into_iter()
            .take(1)
            .collect())
    }
}

/// Direct pair → token pairs → search
pub fn default_strategies() -> Vec<Box<dyn ResolutionStrategy>> {
    vec![
        Box::new(DirectPairLookup),
        Box::new(TokenPairsLookup),
        Box::new(TextSearch),
    ]
}
