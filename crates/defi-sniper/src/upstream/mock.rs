//! Mock Market-Data Client
//!
//! Scripted responses per endpoint for tests and offline demos. Endpoints
//! without a script answer with DexScreener's "no pairs" body.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use super::{Endpoint, MarketDataClient};
use crate::error::{Result, SniperError};

/// Canned reply for one endpoint
#[derive(Clone, Debug)]
pub enum MockReply {
    /// 200 with this JSON body
    Json(Value),
    /// Non-success HTTP status
    Status(u16),
    /// 200 with a body that is not JSON
    Garbage,
    /// Connection-level failure
    Unreachable,
}

#[derive(Default)]
pub struct MockMarketData {
    replies: HashMap<Endpoint, MockReply>,
    calls: Mutex<Vec<Endpoint>>,
}

impl MockMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pair(mut self, chain: &str, address: &str, reply: MockReply) -> Self {
        self.replies.insert(
            Endpoint::Pair {
                chain: chain.into(),
                address: address.into(),
            },
            reply,
        );
        self
    }

    #[must_use]
    pub fn with_token(mut self, address: &str, reply: MockReply) -> Self {
        self.replies.insert(
            Endpoint::TokenPairs {
                address: address.into(),
            },
            reply,
        );
        self
    }

    #[must_use]
    pub fn with_search(mut self, query: &str, reply: MockReply) -> Self {
        self.replies.insert(Endpoint::Search { query: query.into() }, reply);
        self
    }

    /// Endpoints hit so far, in order
    pub fn calls(&self) -> Vec<Endpoint> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl MarketDataClient for MockMarketData {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Value> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(endpoint.clone());
        }

        match self.replies.get(endpoint) {
            Some(MockReply::Json(body)) => Ok(body.clone()),
            Some(MockReply::Status(code)) => Err(SniperError::transport(
                endpoint,
                Some(*code),
                format!("HTTP {code}"),
            )),
            Some(MockReply::Garbage) => Err(SniperError::parse(endpoint, "expected value at line 1 column 1")),
            Some(MockReply::Unreachable) => Err(SniperError::transport(endpoint, None, "connection refused")),
            None => Ok(json!({"schemaVersion": "1.0.0", "pairs": null})),
        }
    }

    fn name(&self) -> &str {
        "MockMarketData"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unscripted_endpoint_has_no_pairs() {
        let mock = MockMarketData::new();
        let payload = mock.search("anything").await.unwrap();
        assert!(payload.is_empty());
        assert_eq!(mock.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_scripted_failures() {
        let mock = MockMarketData::new()
            .with_token("0xdead", MockReply::Status(503))
            .with_search("junk", MockReply::Garbage);

        let err = mock.token_pairs("0xdead").await.unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert!(matches!(mock.search("junk").await, Err(SniperError::Parse { .. })));
    }
}
