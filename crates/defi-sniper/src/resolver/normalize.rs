//! Candidate Normalization
//!
//! Turns one upstream [`CandidatePair`] into a fully populated
//! [`PairRecord`]. Every numeric field goes through the same guard, so the
//! scorer never has to be defensive.

use serde_json::Value;

use crate::model::{PairRecord, TokenInfo};
use crate::upstream::CandidatePair;

/// Period keys meaning "last 24 hours", in priority order
pub const PERIOD_KEYS: [&str; 2] = ["h24", "24h"];

/// Finite JSON number or 0
pub fn safe_number(value: &Value) -> f64 {
    value.as_f64().filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// [`safe_number`] clamped at 0
pub fn non_negative(value: &Value) -> f64 {
    safe_number(value).max(0.0)
}

/// Whole non-negative count
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn count(value: &Value) -> u64 {
    if let Some(n) = value.as_u64() {
        return n;
    }
    non_negative(value).trunc() as u64
}

/// Non-empty JSON string or `default`
pub fn text(value: &Value, default: &str) -> String {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Rebuild a token object field by field
pub fn token(value: &Value) -> TokenInfo {
    TokenInfo {
        address: text(&value["address"], ""),
        name: text(&value["name"], ""),
        symbol: text(&value["symbol"], ""),
    }
}

/// The 24h slot of a period-keyed object, if any convention is present
pub fn period(value: &Value) -> Option<&Value> {
    PERIOD_KEYS
        .iter()
        .find_map(|key| value.get(*key).filter(|v| !v.is_null()))
}

/// Upstream prices arrive as decimal strings, occasionally as numbers
pub fn price_text(value: &Value) -> String {
    match value {
        Value::String(s) if !s.trim().is_empty() => s.trim().to_string(),
        Value::Number(n) if n.as_f64().is_some_and(f64::is_finite) => n.to_string(),
        _ => "0".into(),
    }
}

pub fn normalize(candidate: &CandidatePair) -> PairRecord {
    let volume_24h = period(&candidate.volume).map_or(0.0, non_negative);
    let txns_24h = period(&candidate.txns);
    let price_change_24h = period(&candidate.price_change).map_or(0.0, safe_number);

    PairRecord {
        base_token: token(&candidate.base_token),
        quote_token: token(&candidate.quote_token),
        price_usd: price_text(&candidate.price_usd),
        liquidity_usd: non_negative(&candidate.liquidity["usd"]),
        volume_24h,
        buys_24h: txns_24h.map_or(0, |t| count(&t["buys"])),
        sells_24h: txns_24h.map_or(0, |t| count(&t["sells"])),
        price_change_24h,
        fdv: non_negative(&candidate.fdv),
        market_cap: non_negative(&candidate.market_cap),
        pair_created_at: count(&candidate.pair_created_at),
        chain_id: text(&candidate.chain_id, "unknown"),
        dex_id: text(&candidate.dex_id, "unknown"),
        pair_address: text(&candidate.pair_address, "unknown"),
        url: text(&candidate.url, ""),
    }
}
