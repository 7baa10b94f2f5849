//! Scoring reference tables

use serde::{Deserialize, Serialize};

/// Allow-lists the scorer consults
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Symbols that make a pair "paired with a major token"
    pub major_tokens: Vec<String>,

    /// Name fragments of well-known DEXes, lower-case
    pub major_dexes: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            major_tokens: ["WETH", "USDC", "USDT", "DAI", "WBTC"]
                .into_iter()
                .map(String::from)
                .collect(),
            major_dexes: ["uniswap", "pancakeswap", "sushiswap"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ScoringConfig {
    /// Exact, case-sensitive symbol match
    pub fn is_major_token(&self, symbol: &str) -> bool {
        !symbol.is_empty() && self.major_tokens.iter().any(|major| major == symbol)
    }

    pub fn is_major_dex(&self, dex_id: &str) -> bool {
        let dex_id = dex_id.to_lowercase();
        self.major_dexes
            .iter()
            .any(|fragment| !fragment.is_empty() && dex_id.contains(&fragment.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_tokens() {
        let config = ScoringConfig::default();
        assert!(config.is_major_token("WETH"));
        assert!(config.is_major_token("USDC"));
        assert!(!config.is_major_token("usdc"));
        assert!(!config.is_major_token("Weth"));
        assert!(!config.is_major_token("PEPE"));
        assert!(!config.is_major_token(""));
    }

    #[test]
    fn test_major_dex_fragments() {
        let config = ScoringConfig::default();
        assert!(config.is_major_dex("uniswap"));
        assert!(config.is_major_dex("UniswapV3"));
        assert!(config.is_major_dex("pancakeswap-v2"));
        assert!(!config.is_major_dex("raydium"));
        assert!(!config.is_major_dex("unknown"));
    }
}
