//! Pair Payload Shapes
//!
//! The API answers with `pairs` or `pair`, holding a list, a single object,
//! or null. Detection happens once here; nothing downstream sees the raw body.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::Endpoint;
use crate::error::{Result, SniperError};

/// One unnormalized pair exactly as upstream sent it
///
/// Every field stays an untyped JSON value so a single odd field never
/// rejects the whole candidate.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidatePair {
    pub chain_id: Value,
    pub dex_id: Value,
    pub url: Value,
    pub pair_address: Value,
    pub base_token: Value,
    pub quote_token: Value,
    pub price_usd: Value,
    pub txns: Value,
    pub volume: Value,
    pub price_change: Value,
    pub liquidity: Value,
    pub fdv: Value,
    pub market_cap: Value,
    pub pair_created_at: Value,
}

impl CandidatePair {
    /// `None` for anything that is not a JSON object
    pub fn from_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// Reported USD liquidity, 0 when missing or not a number
    pub fn liquidity_usd(&self) -> f64 {
        self.liquidity
            .get("usd")
            .and_then(Value::as_f64)
            .filter(|n| n.is_finite())
            .unwrap_or(0.0)
    }

    pub fn chain_id(&self) -> &str {
        self.chain_id.as_str().unwrap_or_default()
    }
}

/// Recognized payload shapes
#[derive(Clone, Debug, PartialEq)]
pub enum PairsPayload {
    Many(Vec<CandidatePair>),
    One(CandidatePair),
    /// Explicit "no pairs" answer
    Empty,
}

type Detector = fn(&Map<String, Value>) -> Option<PairsPayload>;

/// Tried in order; first match wins
const DETECTORS: [Detector; 4] = [pairs_list, pairs_object, pair_object, pair_list];

fn list(items: &[Value]) -> PairsPayload {
    let candidates: Vec<CandidatePair> = items
        .iter()
        .cloned()
        .filter_map(CandidatePair::from_value)
        .collect();
    if candidates.len() < items.len() {
        tracing::debug!(
            dropped = items.len() - candidates.len(),
            "ignoring non-object pair entries"
        );
    }
    if candidates.is_empty() {
        PairsPayload::Empty
    } else {
        PairsPayload::Many(candidates)
    }
}

fn object(value: &Value) -> Option<PairsPayload> {
    CandidatePair::from_value(value.clone()).map(PairsPayload::One)
}

fn pairs_list(body: &Map<String, Value>) -> Option<PairsPayload> {
    body.get("pairs").and_then(Value::as_array).map(|a| list(a))
}

fn pairs_object(body: &Map<String, Value>) -> Option<PairsPayload> {
    body.get("pairs").filter(|v| v.is_object()).and_then(object)
}

fn pair_object(body: &Map<String, Value>) -> Option<PairsPayload> {
    body.get("pair").filter(|v| v.is_object()).and_then(object)
}

fn pair_list(body: &Map<String, Value>) -> Option<PairsPayload> {
    body.get("pair").and_then(Value::as_array).map(|a| list(a))
}

impl PairsPayload {
    /// Classify a decoded response body
    pub fn detect(endpoint: &Endpoint, body: Value) -> Result<Self> {
        let Value::Object(map) = body else {
            return Err(SniperError::parse(endpoint, "response body is not a JSON object"));
        };

        if let Some(payload) = DETECTORS.iter().find_map(|detect| detect(&map)) {
            return Ok(payload);
        }

        // A pairs/pair key that is present but neither null, list nor object
        for key in ["pairs", "pair"] {
            if map.get(key).is_some_and(|v| !v.is_null()) {
                return Err(SniperError::parse(
                    endpoint,
                    format!("'{key}' has an unexpected type"),
                ));
            }
        }

        Ok(Self::Empty)
    }

    pub fn into_candidates(self) -> Vec<CandidatePair> {
        match self {
            Self::Many(candidates) => candidates,
            Self::One(candidate) => vec![candidate],
            Self::Empty => Vec::new(),
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
