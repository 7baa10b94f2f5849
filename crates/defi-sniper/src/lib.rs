//! # defi-sniper
//!
//! Token resolution and rug-risk assessment for freshly launched DEX pairs.
//!
//! ## Flow
//!
//! ```text
//! "PEPE" / 0x… / EPjF…   ┌──────────┐  PairRecord  ┌────────────┐
//! ─────────────────────▶ │ Resolver │ ───────────▶ │ RiskScorer │ ──▶ RiskAssessment
//!        chain hint      └────┬─────┘              └────────────┘
//!                             │ pair → token → search
//!                             ▼
//!                    MarketDataClient (DexScreener | Mock)
//! ```
//!
//! The resolver always returns the most liquid pair it can find; the scorer
//! is a pure function of that pair. Both are exposed to agents as tools.

pub mod engine;
pub mod error;
pub mod model;
pub mod resolver;
pub mod scorer;
pub mod svckit;
pub mod upstream;

pub use engine::SniperEngine;
pub use error::{Result, SniperError};
pub use model::{Action, Analysis, PairRecord, RiskAssessment, RiskFactor, RiskLevel, TokenInfo};
pub use resolver::{AddressShape, ChainAliases, Resolver};
pub use scorer::{MAX_RISK_SCORE, RiskScorer, ScoringConfig};
pub use upstream::{DexScreenerClient, DexScreenerConfig, MarketDataClient, MockMarketData};

/// Re-export tools for easy registration
pub mod tools {
    pub use crate::svckit::{RugRiskTool, TokenInfoTool};
}
