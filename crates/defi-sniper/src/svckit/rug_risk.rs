//! Rug Risk Tool
//!
//! Scores pair metrics for rug-pull likelihood. Accepts either the flat metric
//! arguments or a whole resolved `pair` object.

use std::fmt::Write as _;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use sniper_core::{
    CoreError, ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema,
    validate_arguments,
};

use crate::model::{PairRecord, RiskAssessment};
use crate::resolver::{count, non_negative, text, token};
use crate::scorer::RiskScorer;

const NAME: &str = "check_rug_risk";

static NULL: Value = Value::Null;

pub struct RugRiskTool {
    scorer: Arc<RiskScorer>,
}

impl RugRiskTool {
    pub const fn new(scorer: Arc<RiskScorer>) -> Self {
        Self { scorer }
    }
}

#[async_trait]
impl Tool for RugRiskTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: NAME.into(),
            description: "Analyze rug-pull risk from pair metrics (liquidity, trading activity, sell pressure, volume, counterparty, exchange). Pass the metrics individually or a full pair object from get_token_info. Omitting baseToken/quoteToken or dexId scores them as unknown: +1 for no major counterparty and +1 for a smaller DEX.".into(),
            parameters: vec![
                ParameterSchema::required("liquidityUsd", "number", "Liquidity in USD"),
                ParameterSchema::required("buys", "number", "Number of buys in 24h"),
                ParameterSchema::required("sells", "number", "Number of sells in 24h"),
                ParameterSchema::required("volume24h", "number", "24h volume in USD"),
                ParameterSchema::optional("baseToken", "object", "Base token info (address, name, symbol); omitted counts as no major token"),
                ParameterSchema::optional("quoteToken", "object", "Quote token info (address, name, symbol); omitted counts as no major token"),
                ParameterSchema::optional("chainId", "string", "Blockchain network"),
                ParameterSchema::optional("dexId", "string", "DEX identifier; omitted counts as a smaller DEX (+1)"),
                ParameterSchema::optional("pair", "object", "Full pair record; replaces the individual metrics"),
            ],
            category: Some("analysis".into()),
            has_side_effects: false,
        }
    }

    fn validate(&self, call: &ToolCall) -> CoreResult<()> {
        match call.arguments.get("pair") {
            Some(Value::Object(_)) => Ok(()),
            Some(Value::Null) | None => validate_arguments(&self.schema(), call),
            Some(_) => Err(CoreError::ToolValidation("'pair' must be an object".into())),
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let pair = pair_from_arguments(call);
        let assessment = self.scorer.score(&pair);

        tracing::debug!(
            pair = %pair.label(),
            score = assessment.risk_score,
            level = %assessment.risk_level,
            "scored pair"
        );

        ToolResult::success(NAME, report(&pair, &assessment)).with_data(&assessment)
    }
}

/// Build a record from tool arguments, guarding every number
pub fn pair_from_arguments(call: &ToolCall) -> PairRecord {
    let args = call.arguments_object();
    let source = match args.get("pair") {
        Some(pair @ Value::Object(_)) => pair,
        _ => &args,
    };
    let field = |keys: &[&str]| {
        keys.iter()
            .find_map(|k| source.get(*k).filter(|v| !v.is_null()))
            .unwrap_or(&NULL)
    };

    PairRecord {
        base_token: token(field(&["baseToken"])),
        quote_token: token(field(&["quoteToken"])),
        liquidity_usd: non_negative(field(&["liquidityUsd"])),
        volume_24h: non_negative(field(&["volume24h"])),
        buys_24h: count(field(&["buys24h", "buys"])),
        sells_24h: count(field(&["sells24h", "sells"])),
        chain_id: text(field(&["chainId"]), "unknown"),
        dex_id: text(field(&["dexId"]), "unknown"),
        ..PairRecord::default()
    }
}

/// Human-readable assessment
pub fn report(pair: &PairRecord, assessment: &RiskAssessment) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Rug Risk Report: {}", pair.label());
    let _ = writeln!(out, "{}", "═".repeat(50));
    let _ = writeln!(out, "Verdict:    {}", assessment.verdict);
    let _ = writeln!(
        out,
        "Risk Score: {}/{} ({})",
        assessment.risk_score, assessment.max_score, assessment.risk_level
    );
    let _ = writeln!(out, "Action:     {:?}", assessment.action());
    let _ = writeln!(out);
    let _ = writeln!(out, "Factors:");
    for factor in &assessment.risk_factors {
        let _ = writeln!(out, "  {factor}");
    }
    let _ = writeln!(out);
    let _ = write!(out, "Recommendation: {}", assessment.recommendation);
    out
}
