//! Token Info Tool
//!
//! Resolves a token address, pair address or symbol to its most liquid pair.

use std::fmt::Write as _;
use std::sync::Arc;

use async_trait::async_trait;

use sniper_core::{ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema};

use crate::error::SniperError;
use crate::model::PairRecord;
use crate::resolver::Resolver;

const NAME: &str = "get_token_info";

pub struct TokenInfoTool {
    resolver: Arc<Resolver>,
}

impl TokenInfoTool {
    pub const fn new(resolver: Arc<Resolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl Tool for TokenInfoTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: NAME.into(),
            description: "Fetch token pair stats from DexScreener. Accepts a token address, pair address or token symbol from any supported chain (Ethereum, Solana, BSC, Polygon, Arbitrum, ...).".into(),
            parameters: vec![
                ParameterSchema::required(
                    "pair_id",
                    "string",
                    "Token address, pair address, or token symbol (e.g., 0x123..., EPjFW..., or WETH)",
                ),
                ParameterSchema::optional(
                    "chain",
                    "string",
                    "Optional chain hint: ethereum, solana, bsc, polygon, arbitrum, optimism, avalanche, ...",
                ),
            ],
            category: Some("market_data".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let pair_id = call.str_arg("pair_id")?;
        let chain = call.opt_str_arg("chain");

        match self.resolver.resolve(pair_id, chain).await {
            Ok(pair) => ToolResult::success(NAME, summarize(&pair)).with_data(&pair),
            Err(e @ SniperError::Resolution { .. }) => Ok(ToolResult::failure(NAME, e.to_string())),
            Err(e) => Err(e.into()),
        }
    }
}

/// Plain-text overview of a pair
pub fn summarize(pair: &PairRecord) -> String {
    let or_unknown = |s: &str| if s.is_empty() { "Unknown".to_string() } else { s.to_string() };
    let created = pair
        .created_at()
        .map_or_else(|| "Unknown".to_string(), |d| d.format("%Y-%m-%d").to_string());

    let mut out = String::new();
    let _ = writeln!(out, "Token Pair:   {}", pair.label());
    let _ = writeln!(out, "Chain:        {}", pair.chain_id);
    let _ = writeln!(out, "Exchange:     {}", pair.dex_id);
    let _ = writeln!(out, "Pair Address: {}", pair.pair_address);
    if !pair.url.is_empty() {
        let _ = writeln!(out, "URL:          {}", pair.url);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Price:        ${}", pair.price_usd);
    let _ = writeln!(out, "24h Change:   {:+.2}%", pair.price_change_24h);
    let _ = writeln!(out, "Liquidity:    ${:.2}", pair.liquidity_usd);
    let _ = writeln!(out, "24h Volume:   ${:.2}", pair.volume_24h);
    let _ = writeln!(out, "24h Txns:     Buys: {}, Sells: {}", pair.buys_24h, pair.sells_24h);
    let _ = writeln!(out, "FDV:          ${:.2}", pair.fdv);
    let _ = writeln!(out, "Market Cap:   ${:.2}", pair.market_cap);
    let _ = writeln!(out, "Pair Created: {created}");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Base Token:   {} ({}) {}",
        or_unknown(&pair.base_token.name),
        or_unknown(&pair.base_token.symbol),
        or_unknown(&pair.base_token.address)
    );
    let _ = write!(
        out,
        "Quote Token:  {} ({}) {}",
        or_unknown(&pair.quote_token.name),
        or_unknown(&pair.quote_token.symbol),
        or_unknown(&pair.quote_token.address)
    );
    out
}
