//! Pair Resolver
//!
//! Turns a loose identifier (token address, pair address or symbol) into one
//! canonical [`PairRecord`]:
//!
//! ```text
//! identifier ─▶ pair lookup ─▶ token lookup ─▶ search ─▶ ResolutionError
//!                   │              │             │
//!                   └──────────────┴─────────────┴──▶ highest liquidity ─▶ normalize
//! ```
//!
//! A strategy that fails or comes back empty hands over to the next one.
//! Strategies never run concurrently and nothing is retried.

mod chain;
mod normalize;
mod strategy;

pub use chain::{AddressShape, ChainAliases};
pub use normalize::{PERIOD_KEYS, normalize, safe_number};
pub(crate) use normalize::{count, non_negative, text, token};
pub use strategy::{
    DirectPairLookup, FALLBACK_CHAIN, ResolutionStrategy, TextSearch, TokenPairsLookup,
    default_strategies,
};

use std::sync::Arc;

use crate::error::{Result, SniperError};
use crate::model::PairRecord;
use crate::upstream::{CandidatePair, MarketDataClient};

/// Cleaned-up resolver input
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupQuery {
    /// Trimmed identifier
    pub identifier: String,
    /// Hint exactly as given, lower-cased
    pub chain_hint: Option<String>,
    /// Hint mapped through the alias table
    pub chain: Option<String>,
    pub shape: AddressShape,
}

impl LookupQuery {
    /// Upstream is not guaranteed to use canonical keys, so both the
    /// canonical chain and the literal hint are accepted.
    pub fn accepts_chain(&self, chain_id: &str) -> bool {
        match (&self.chain, &self.chain_hint) {
            (Some(canonical), Some(literal)) => chain_id == canonical || chain_id == literal,
            _ => true,
        }
    }
}

/// Highest USD liquidity wins; first seen wins ties
pub fn select_best(candidates: Vec<CandidatePair>) -> Option<CandidatePair> {
    let mut best: Option<(f64, CandidatePair)> = None;
    for candidate in candidates {
        let liquidity = candidate.liquidity_usd();
        if best.as_ref().is_none_or(|(top, _)| liquidity > *top) {
            best = Some((liquidity, candidate));
        }
    }
    best.map(|(_, candidate)| candidate)
}

/// Cascading pair resolver
pub struct Resolver {
    client: Arc<dyn MarketDataClient>,
    aliases: ChainAliases,
    strategies: Vec<Box<dyn ResolutionStrategy>>,
}

impl Resolver {
    pub fn new(client: Arc<dyn MarketDataClient>) -> Self {
        Self {
            client,
            aliases: ChainAliases::default(),
            strategies: default_strategies(),
        }
    }

    #[must_use]
    pub fn with_aliases(mut self, aliases: ChainAliases) -> Self {
        self.aliases = aliases;
        self
    }

    #[must_use]
    pub fn with_strategies(mut self, strategies: Vec<Box<dyn ResolutionStrategy>>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn client_name(&self) -> &str {
        self.client.name()
    }

    pub fn query(&self, identifier: &str, chain_hint: Option<&str>) -> Result<LookupQuery> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(SniperError::InvalidInput("identifier is empty".into()));
        }

        let hint = chain_hint.map(str::trim).filter(|h| !h.is_empty());

        Ok(LookupQuery {
            identifier: identifier.to_string(),
            chain_hint: hint.map(str::to_lowercase),
            chain: hint.map(|h| self.aliases.normalize(h)),
            shape: AddressShape::detect(identifier),
        })
    }

    /// Resolve an identifier to its most representative pair
    pub async fn resolve(&self, identifier: &str, chain_hint: Option<&str>) -> Result<PairRecord> {
        let query = self.query(identifier, chain_hint)?;
        let mut last_failure: Option<String> = None;

        for strategy in &self.strategies {
            if !strategy.applies(&query) {
                tracing::debug!(strategy = strategy.name(), identifier = %query.identifier, "strategy skipped");
                continue;
            }

            match strategy.candidates(self.client.as_ref(), &query).await {
                Ok(candidates) => {
                    let found = candidates.len();
                    if let Some(best) = select_best(candidates) {
                        let pair = normalize(&best);
                        tracing::info!(
                            strategy = strategy.name(),
                            identifier = %query.identifier,
                            candidates = found,
                            pair = %pair.label(),
                            chain = %pair.chain_id,
                            liquidity_usd = pair.liquidity_usd,
                            "resolved pair"
                        );
                        return Ok(pair);
                    }
                    tracing::debug!(strategy = strategy.name(), identifier = %query.identifier, "no candidates");
                }
                Err(e) if e.is_recoverable() => {
                    tracing::warn!(strategy = strategy.name(), identifier = %query.identifier, error = %e, "strategy failed, falling through");
                    last_failure = Some(e.to_string());
                }
                Err(e) => return Err(e),
            }
        }

        Err(SniperError::Resolution {
            identifier: query.identifier,
            detail: last_failure,
        })
    }

    /// All pairs matching a symbol, highest liquidity first
    pub async fn search(&self, symbol: &str, chain_hint: Option<&str>) -> Result<Vec<PairRecord>> {
        let query = self.query(symbol, chain_hint)?;

        let mut candidates: Vec<CandidatePair> = self
            .client
            .search(&query.identifier)
            .await?
            .into_candidates()
            .into_iter()
            .filter(|c| query.accepts_chain(c.chain_id()))
            .collect();

        if candidates.is_empty() {
            return Err(SniperError::NoPairs(format!(
                "symbol {} on chain {}",
                query.identifier,
                query.chain.as_deref().unwrap_or("any")
            )));
        }

        candidates.sort_by(|a, b| b.liquidity_usd().total_cmp(&a.liquidity_usd()));
        Ok(candidates.iter().map(normalize).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::{Endpoint, MockMarketData, MockReply};
    use serde_json::{Value, json};

    const WETH: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
    const USDC_SOL: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

    fn raw_pair(chain: &str, dex: &str, address: &str, liquidity: Option<f64>) -> Value {
        let mut pair = json!({
            "chainId": chain,
            "dexId": dex,
            "pairAddress": address,
            "baseToken": {"address": WETH, "name": "Wrapped Ether", "symbol": "WETH"},
            "quoteToken": {"address": "0xa0b8", "name": "USD Coin", "symbol": "USDC"},
            "priceUsd": "3450.12",
            "txns": {"h24": {"buys": 100, "sells": 90}},
            "volume": {"h24": 50000}
        });
        if let Some(usd) = liquidity {
            pair["liquidity"] = json!({"usd": usd});
        }
        pair
    }

    fn resolver(mock: MockMarketData) -> (Resolver, Arc<MockMarketData>) {
        let mock = Arc::new(mock);
        (Resolver::new(mock.clone()), mock)
    }

    fn candidates(values: Vec<Value>) -> Vec<CandidatePair> {
        values.into_iter().filter_map(CandidatePair::from_value).collect()
    }

    #[test]
    fn test_select_highest_liquidity_regardless_of_order() {
        let a = raw_pair("ethereum", "uniswap", "A", Some(100.0));
        let b = raw_pair("ethereum", "uniswap", "B", Some(50.0));

        let forward = select_best(candidates(vec![a.clone(), b.clone()])).unwrap();
        let backward = select_best(candidates(vec![b, a])).unwrap();
        assert_eq!(forward.pair_address, json!("A"));
        assert_eq!(backward.pair_address, json!("A"));
    }

    #[test]
    fn test_select_ties_and_missing_liquidity_keep_first() {
        let tie = select_best(candidates(vec![
            raw_pair("ethereum", "uniswap", "first", Some(10.0)),
            raw_pair("ethereum", "uniswap", "second", Some(10.0)),
        ]))
        .unwrap();
        assert_eq!(tie.pair_address, json!("first"));

        let missing = select_best(candidates(vec![
            raw_pair("ethereum", "uniswap", "first", None),
            raw_pair("ethereum", "uniswap", "second", None),
        ]))
        .unwrap();
        assert_eq!(missing.pair_address, json!("first"));

        let missing_vs_zero = select_best(candidates(vec![
            raw_pair("ethereum", "uniswap", "first", None),
            raw_pair("ethereum", "uniswap", "second", Some(0.0)),
        ]))
        .unwrap();
        assert_eq!(missing_vs_zero.pair_address, json!("first"));

        assert!(select_best(Vec::new()).is_none());
    }

    #[test]
    fn test_query_normalization() {
        let (resolver, _) = resolver(MockMarketData::new());
        let query = resolver.query("  PEPE ", Some(" ETH ")).unwrap();
        assert_eq!(query.identifier, "PEPE");
        assert_eq!(query.chain.as_deref(), Some("ethereum"));
        assert_eq!(query.chain_hint.as_deref(), Some("eth"));
        assert!(query.accepts_chain("ethereum"));
        assert!(query.accepts_chain("eth"));
        assert!(!query.accepts_chain("bsc"));

        let blank_hint = resolver.query("PEPE", Some("  ")).unwrap();
        assert!(blank_hint.chain.is_none());
        assert!(blank_hint.accepts_chain("anything"));

        assert!(matches!(resolver.query("   ", None), Err(SniperError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_direct_pair_lookup_wins() {
        let (resolver, mock) = resolver(MockMarketData::new().with_pair(
            "ethereum",
            WETH,
            MockReply::Json(json!({"pairs": null, "pair": raw_pair("ethereum", "uniswap", WETH, Some(1e6))})),
        ));

        let pair = resolver.resolve(WETH, None).await.unwrap();
        assert_eq!(pair.dex_id, "uniswap");
        assert_eq!(mock.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_symbol_without_hint_skips_direct_lookup() {
        let (resolver, mock) = resolver(MockMarketData::new().with_search(
            "PEPE",
            MockReply::Json(json!({"pairs": [
                raw_pair("ethereum", "uniswap", "first", Some(10.0)),
                raw_pair("bsc", "pancakeswap", "richer", Some(1e9)),
            ]})),
        ));

        let pair = resolver.resolve("PEPE", None).await.unwrap();
        // search takes the first hit, not the richest
        assert_eq!(pair.pair_address, "first");
        assert_eq!(
            mock.calls(),
            vec![
                Endpoint::TokenPairs { address: "PEPE".into() },
                Endpoint::Search { query: "PEPE".into() },
            ]
        );
    }

    #[tokio::test]
    async fn test_truncated_hex_without_hint_skips_direct_lookup() {
        let (resolver, mock) = resolver(MockMarketData::new());

        let err = resolver.resolve("0x123", None).await.unwrap_err();
        assert!(matches!(err, SniperError::Resolution { .. }));
        assert_eq!(
            mock.calls(),
            vec![
                Endpoint::TokenPairs { address: "0x123".into() },
                Endpoint::Search { query: "0x123".into() },
            ]
        );
    }

    #[tokio::test]
    async fn test_solana_address_uses_solana_for_direct_lookup() {
        let (resolver, mock) = resolver(MockMarketData::new());
        let _ = resolver.resolve(USDC_SOL, None).await;
        assert_eq!(
            mock.calls().first(),
            Some(&Endpoint::Pair {
                chain: "solana".into(),
                address: USDC_SOL.into()
            })
        );
    }

    #[tokio::test]
    async fn test_hint_drives_direct_lookup_chain() {
        let (resolver, mock) = resolver(MockMarketData::new());
        let _ = resolver.resolve("SOMEPAIR", Some("bnb")).await;
        assert_eq!(
            mock.calls().first(),
            Some(&Endpoint::Pair {
                chain: "bsc".into(),
                address: "SOMEPAIR".into()
            })
        );
    }

    #[tokio::test]
    async fn test_token_lookup_picks_richest_pair_on_hinted_chain() {
        let (resolver, _) = resolver(MockMarketData::new().with_token(
            WETH,
            MockReply::Json(json!({"pairs": [
                raw_pair("ethereum", "sushiswap", "eth-small", Some(5_000.0)),
                raw_pair("bsc", "pancakeswap", "bsc-huge", Some(9e9)),
                raw_pair("eth", "uniswap", "eth-literal", Some(80_000.0)),
                raw_pair("ethereum", "uniswap", "eth-mid", Some(60_000.0)),
            ]})),
        ));

        let pair = resolver.resolve(WETH, Some("ETH")).await.unwrap();
        assert_eq!(pair.pair_address, "eth-literal");
    }

    #[tokio::test]
    async fn test_hint_filter_leaving_nothing_falls_through_to_search() {
        let (resolver, mock) = resolver(
            MockMarketData::new()
                .with_token(
                    WETH,
                    MockReply::Json(json!({"pairs": [raw_pair("bsc", "pancakeswap", "bsc", Some(1.0))]})),
                )
                .with_search(
                    WETH,
                    MockReply::Json(json!({"pairs": [raw_pair("polygon", "quickswap", "poly", Some(1.0))]})),
                ),
        );

        let pair = resolver.resolve(WETH, Some("polygon")).await.unwrap();
        assert_eq!(pair.pair_address, "poly");
        assert_eq!(mock.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_no_pairs_sentinel_continues_to_search() {
        let (resolver, _) = resolver(
            MockMarketData::new()
                .with_token("BONK", MockReply::Json(json!({"schemaVersion": "1.0.0", "pairs": null})))
                .with_search(
                    "BONK",
                    MockReply::Json(json!({"pairs": [raw_pair("solana", "raydium", "bonk-sol", Some(2e6))]})),
                ),
        );

        let pair = resolver.resolve("BONK", None).await.unwrap();
        assert_eq!(pair.dex_id, "raydium");
    }

    #[tokio::test]
    async fn test_failures_are_absorbed_by_the_cascade() {
        let (resolver, _) = resolver(
            MockMarketData::new()
                .with_pair("ethereum", WETH, MockReply::Unreachable)
                .with_token(WETH, MockReply::Garbage)
                .with_search(
                    WETH,
                    MockReply::Json(json!({"pair": raw_pair("ethereum", "uniswap", "found", None)})),
                ),
        );

        let pair = resolver.resolve(WETH, None).await.unwrap();
        assert_eq!(pair.pair_address, "found");
        assert_eq!(pair.liquidity_usd, 0.0);
    }

    #[tokio::test]
    async fn test_exhaustion_names_identifier() {
        let (resolver, _) = resolver(MockMarketData::new());

        let err = resolver.resolve("  NOPE_TOKEN ", None).await.unwrap_err();
        match err {
            SniperError::Resolution { identifier, detail } => {
                assert_eq!(identifier, "NOPE_TOKEN");
                assert!(detail.is_none());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_exhaustion_reports_last_status() {
        let (resolver, _) = resolver(
            MockMarketData::new()
                .with_token("RUG", MockReply::Status(429))
                .with_search("RUG", MockReply::Json(json!({"pairs": []}))),
        );

        let err = resolver.resolve("RUG", None).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("RUG"));
        assert!(message.contains("HTTP 429"), "{message}");
    }

    #[tokio::test]
    async fn test_custom_strategy_list() {
        let mock = Arc::new(MockMarketData::new().with_search(
            "WIF",
            MockReply::Json(json!({"pairs": [raw_pair("solana", "orca", "wif", Some(1.0))]})),
        ));
        let resolver = Resolver::new(mock.clone()).with_strategies(vec![Box::new(TextSearch)]);

        let pair = resolver.resolve("WIF", Some("sol")).await.unwrap();
        assert_eq!(pair.pair_address, "wif");
        assert_eq!(mock.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_search_sorts_and_filters() {
        let (resolver, _) = resolver(MockMarketData::new().with_search(
            "PEPE",
            MockReply::Json(json!({"pairs": [
                raw_pair("ethereum", "uniswap", "low", Some(10.0)),
                raw_pair("bsc", "pancakeswap", "bsc", Some(1e9)),
                raw_pair("ethereum", "uniswap", "high", Some(1000.0)),
                raw_pair("ethereum", "sushiswap", "none", None),
            ]})),
        ));

        let pairs = resolver.search("PEPE", Some("eth")).await.unwrap();
        let order: Vec<&str> = pairs.iter().map(|p| p.pair_address.as_str()).collect();
        assert_eq!(order, vec!["high", "low", "none"]);

        let err = resolver.search("PEPE", Some("solana")).await.unwrap_err();
        assert!(matches!(err, SniperError::NoPairs(_)));
    }
}
