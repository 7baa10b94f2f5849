//! Domain Models
//!
//! The canonical pair record produced by the resolver and the assessment
//! produced by the scorer. Both serialize camelCase for agent consumption.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One side of a trading pair
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenInfo {
    pub address: String,
    pub name: String,
    pub symbol: String,
}

impl TokenInfo {
    pub fn new(address: impl Into<String>, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

/// Canonical trading pair, every field populated
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PairRecord {
    pub base_token: TokenInfo,
    pub quote_token: TokenInfo,

    /// Price as reported upstream, kept as text to preserve precision
    pub price_usd: String,

    pub liquidity_usd: f64,
    pub volume_24h: f64,
    pub buys_24h: u64,
    pub sells_24h: u64,

    /// Signed percentage
    pub price_change_24h: f64,
    pub fdv: f64,
    pub market_cap: f64,

    /// Milliseconds since the Unix epoch, 0 when unknown
    pub pair_created_at: u64,

    pub chain_id: String,
    pub dex_id: String,
    pub pair_address: String,
    pub url: String,
}

impl Default for PairRecord {
    fn default() -> Self {
        Self {
            base_token: TokenInfo::default(),
            quote_token: TokenInfo::default(),
            price_usd: "0".into(),
            liquidity_usd: 0.0,
            volume_24h: 0.0,
            buys_24h: 0,
            sells_24h: 0,
            price_change_24h: 0.0,
            fdv: 0.0,
            market_cap: 0.0,
            pair_created_at: 0,
            chain_id: "unknown".into(),
            dex_id: "unknown".into(),
            pair_address: "unknown".into(),
            url: String::new(),
        }
    }
}

impl PairRecord {
    /// `BASE/QUOTE`, with `Unknown` for missing symbols
    pub fn label(&self) -> String {
        let side = |t: &TokenInfo| {
            if t.symbol.is_empty() {
                "Unknown".to_string()
            } else {
                t.symbol.clone()
            }
        };
        format!("{}/{}", side(&self.base_token), side(&self.quote_token))
    }

    /// Parsed price, `None` when upstream text is not a plain decimal
    pub fn price(&self) -> Option<Decimal> {
        self.price_usd.trim().parse().ok()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        if self.pair_created_at == 0 {
            return None;
        }
        i64::try_from(self.pair_created_at)
            .ok()
            .and_then(DateTime::from_timestamp_millis)
    }

    pub const fn total_txns(&self) -> u64 {
        self.buys_24h.saturating_add(self.sells_24h)
    }
}

/// Risk tier
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Extreme,
}

impl RiskLevel {
    pub const fn from_score(score: u32) -> Self {
        match score {
            0..=2 => Self::Low,
            3..=5 => Self::Medium,
            6..=8 => Self::High,
            _ => Self::Extreme,
        }
    }

    pub const fn verdict(self) -> &'static str {
        match self {
            Self::Low => "🟢 LOW RUG RISK",
            Self::Medium => "🟡 MEDIUM RUG RISK",
            Self::High => "🟠 HIGH RUG RISK",
            Self::Extreme => "🔴 EXTREME RUG RISK",
        }
    }

    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Low => "✅ Metrics look solid. Consider for investment but always DYOR.",
            Self::Medium => "⚠️ Some concerns present. Proceed with caution and smaller position size.",
            Self::High => {
                "🚨 Multiple red flags detected. High risk of rugpull - avoid or use extreme caution."
            }
            Self::Extreme => "🛑 DANGER! Multiple critical issues. Strongly advise against investment.",
        }
    }

    pub const fn action(self) -> Action {
        match self {
            Self::Low => Action::Snipe,
            Self::Medium => Action::Monitor,
            Self::High | Self::Extreme => Action::Avoid,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Extreme => "Extreme",
        };
        f.write_str(s)
    }
}

/// Buy / monitor / avoid style verdict
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Snipe,
    Monitor,
    Avoid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskCategory {
    Liquidity,
    TradingActivity,
    SellPressure,
    Volume,
    VolumeLiquidityRatio,
    Counterparty,
    Exchange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Good,
    Caution,
    Critical,
}

impl Severity {
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Good => "🟢",
            Self::Caution => "🟡",
            Self::Critical => "🔴",
        }
    }
}

/// One observation recorded by the scorer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub category: RiskCategory,
    pub severity: Severity,
    /// Points this observation added to the score
    pub points: u32,
    pub description: String,
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity.marker(), self.description)
    }
}

/// Scorer output
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub verdict: String,
    pub risk_score: u32,
    pub max_score: u32,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<RiskFactor>,
    pub recommendation: String,
}

impl RiskAssessment {
    pub const fn action(&self) -> Action {
        self.risk_level.action()
    }
}

/// A resolved pair together with its assessment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub pair: PairRecord,
    pub assessment: RiskAssessment,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_pair_defaults() {
        let pair = PairRecord::default();
        assert_eq!(pair.price_usd, "0");
        assert_eq!(pair.chain_id, "unknown");
        assert_eq!(pair.dex_id, "unknown");
        assert_eq!(pair.pair_address, "unknown");
        assert_eq!(pair.base_token.symbol, "");
        assert_eq!(pair.label(), "Unknown/Unknown");
        assert!(pair.created_at().is_none());
    }

    #[test]
    fn test_price_and_timestamp_helpers() {
        let pair = PairRecord {
            price_usd: "0.000012345678901234".into(),
            pair_created_at: 1_700_000_000_000,
            ..Default::default()
        };
        assert_eq!(pair.price(), Some(dec!(0.000012345678901234)));
        assert_eq!(pair.created_at().map(|d| d.timestamp()), Some(1_700_000_000));

        let garbage = PairRecord {
            price_usd: "n/a".into(),
            ..Default::default()
        };
        assert!(garbage.price().is_none());
    }

    #[test]
    fn test_level_boundaries_and_actions() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(2), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(3), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(5), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(6), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(8), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(9), RiskLevel::Extreme);
        assert_eq!(RiskLevel::Medium.action(), Action::Monitor);
        assert_eq!(RiskLevel::Extreme.action(), Action::Avoid);
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let json = serde_json::to_value(PairRecord::default()).unwrap();
        assert!(json.get("liquidityUsd").is_some());
        assert!(json.get("baseToken").is_some());
        assert!(json.get("volume24h").is_some());
        assert!(json.get("buys24h").is_some());
    }
}
