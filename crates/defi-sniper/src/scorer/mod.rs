//! Rug-Risk Scorer
//!
//! Weighted checks over a [`PairRecord`]. Each category contributes the
//! points of its first matching bracket (most severe first) and records one
//! factor, favorable or not, so the report always covers every category.
//!
//! ```text
//! Liquidity      <1K +3 │ <10K +2 │ <50K +1
//! Activity       <10 +2 │ <50 +1
//! Sell pressure  >3x +3 │ >2x +2  │ >1.5x +1   (only when buys > 0)
//! Volume 24h     <500 +2│ <5K +1
//! Vol/Liq        >2 +1  , <0.01 +1            (only when liquidity > 0)
//! Counterparty   no major token +1
//! Exchange       no major DEX +1
//!                                   0-2 Low · 3-5 Medium · 6-8 High · 9+ Extreme
//! ```

mod config;

pub use config::ScoringConfig;

use crate::model::{PairRecord, RiskAssessment, RiskCategory, RiskFactor, RiskLevel, Severity};

/// Upper bound of the score scale
pub const MAX_RISK_SCORE: u32 = 15;

/// One threshold of a category
struct Bracket {
    bound: f64,
    points: u32,
    severity: Severity,
    label: &'static str,
}

const LIQUIDITY: [Bracket; 3] = [
    Bracket { bound: 1_000.0, points: 3, severity: Severity::Critical, label: "Extremely low liquidity (<$1K)" },
    Bracket { bound: 10_000.0, points: 2, severity: Severity::Caution, label: "Low liquidity (<$10K)" },
    Bracket { bound: 50_000.0, points: 1, severity: Severity::Caution, label: "Moderate liquidity (<$50K)" },
];

const ACTIVITY: [Bracket; 2] = [
    Bracket { bound: 10.0, points: 2, severity: Severity::Critical, label: "Very low trading activity" },
    Bracket { bound: 50.0, points: 1, severity: Severity::Caution, label: "Low trading activity" },
];

const SELL_PRESSURE: [Bracket; 3] = [
    Bracket { bound: 3.0, points: 3, severity: Severity::Critical, label: "Heavy sell pressure (3x+ more sells)" },
    Bracket { bound: 2.0, points: 2, severity: Severity::Caution, label: "High sell pressure (2x+ more sells)" },
    Bracket { bound: 1.5, points: 1, severity: Severity::Caution, label: "Moderate sell pressure" },
];

const VOLUME: [Bracket; 2] = [
    Bracket { bound: 500.0, points: 2, severity: Severity::Critical, label: "Very low volume (<$500)" },
    Bracket { bound: 5_000.0, points: 1, severity: Severity::Caution, label: "Low volume (<$5K)" },
];

const HIGH_TURNOVER: f64 = 2.0;
const LOW_TURNOVER: f64 = 0.01;

/// Deterministic, I/O-free risk scorer
#[derive(Clone, Debug, Default)]
pub struct RiskScorer {
    config: ScoringConfig,
}

impl RiskScorer {
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, pair: &PairRecord) -> RiskAssessment {
        let mut card = ScoreCard::default();

        card.bracket_below(
            RiskCategory::Liquidity,
            pair.liquidity_usd,
            &LIQUIDITY,
            "Good liquidity (>$50K)",
        );

        #[allow(clippy::cast_precision_loss)]
        let total_txns = pair.total_txns() as f64;
        card.bracket_below(RiskCategory::TradingActivity, total_txns, &ACTIVITY, "Active trading");

        if pair.buys_24h > 0 {
            #[allow(clippy::cast_precision_loss)]
            let sell_ratio = pair.sells_24h as f64 / pair.buys_24h as f64;
            card.bracket_above(
                RiskCategory::SellPressure,
                sell_ratio,
                &SELL_PRESSURE,
                "Balanced buy/sell ratio",
            );
        }

        card.bracket_below(RiskCategory::Volume, pair.volume_24h, &VOLUME, "Decent volume (>$5K)");

        if pair.liquidity_usd > 0.0 {
            let turnover = pair.volume_24h / pair.liquidity_usd;
            let mut flagged = false;
            if turnover > HIGH_TURNOVER {
                card.add(
                    RiskCategory::VolumeLiquidityRatio,
                    1,
                    Severity::Caution,
                    "High volume/liquidity ratio (potential volatility)",
                );
                flagged = true;
            }
            if turnover < LOW_TURNOVER {
                card.add(
                    RiskCategory::VolumeLiquidityRatio,
                    1,
                    Severity::Caution,
                    "Very low volume/liquidity ratio (low activity)",
                );
                flagged = true;
            }
            if !flagged {
                card.add(
                    RiskCategory::VolumeLiquidityRatio,
                    0,
                    Severity::Good,
                    "Healthy volume/liquidity ratio",
                );
            }
        }

        if self.config.is_major_token(&pair.base_token.symbol)
            || self.config.is_major_token(&pair.quote_token.symbol)
        {
            card.add(RiskCategory::Counterparty, 0, Severity::Good, "Paired with major token");
        } else {
            card.add(
                RiskCategory::Counterparty,
                1,
                Severity::Caution,
                "Not paired with major stable token",
            );
        }

        if self.config.is_major_dex(&pair.dex_id) {
            card.add(RiskCategory::Exchange, 0, Severity::Good, "Listed on major DEX");
        } else {
            card.add(RiskCategory::Exchange, 1, Severity::Caution, "Listed on smaller DEX");
        }

        card.finish()
    }
}

#[derive(Default)]
struct ScoreCard {
    score: u32,
    factors: Vec<RiskFactor>,
}

impl ScoreCard {
    fn add(&mut self, category: RiskCategory, points: u32, severity: Severity, description: &str) {
        self.score += points;
        self.factors.push(RiskFactor {
            category,
            severity,
            points,
            description: description.to_string(),
        });
    }

    /// First bracket whose bound `value` falls under
    fn bracket_below(&mut self, category: RiskCategory, value: f64, brackets: &[Bracket], fine: &str) {
        match brackets.iter().find(|b| value < b.bound) {
            Some(b) => self.add(category, b.points, b.severity, b.label),
            None => self.add(category, 0, Severity::Good, fine),
        }
    }

    /// First bracket whose bound `value` exceeds
    fn bracket_above(&mut self, category: RiskCategory, value: f64, brackets: &[Bracket], fine: &str) {
        match brackets.iter().find(|b| value > b.bound) {
            Some(b) => self.add(category, b.points, b.severity, b.label),
            None => self.add(category, 0, Severity::Good, fine),
        }
    }

    fn finish(self) -> RiskAssessment {
        let level = RiskLevel::from_score(self.score);
        RiskAssessment {
            verdict: level.verdict().to_string(),
            risk_score: self.score,
            max_score: MAX_RISK_SCORE,
            risk_level: level,
            risk_factors: self.factors,
            recommendation: level.recommendation().to_string(),
        }
    }
}
