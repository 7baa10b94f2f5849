//! Analysis engine: resolve, then score.

use std::sync::Arc;

use sniper_core::ToolRegistry;

use crate::error::Result;
use crate::model::Analysis;
use crate::resolver::Resolver;
use crate::scorer::RiskScorer;
use crate::svckit::{RugRiskTool, TokenInfoTool};
use crate::upstream::MarketDataClient;

#[derive(Clone)]
pub struct SniperEngine {
    resolver: Arc<Resolver>,
    scorer: Arc<RiskScorer>,
}

impl SniperEngine {
    pub const fn new(resolver: Arc<Resolver>, scorer: Arc<RiskScorer>) -> Self {
        Self { resolver, scorer }
    }

    /// Default resolver and scorer over `client`
    pub fn with_client(client: Arc<dyn MarketDataClient>) -> Self {
        Self::new(
            Arc::new(Resolver::new(client)),
            Arc::new(RiskScorer::default()),
        )
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn scorer(&self) -> &RiskScorer {
        &self.scorer
    }

    /// Resolve an identifier and score the winning pair
    pub async fn analyze(&self, identifier: &str, chain_hint: Option<&str>) -> Result<Analysis> {
        let pair = self.resolver.resolve(identifier, chain_hint).await?;
        let assessment = self.scorer.score(&pair);

        tracing::info!(
            pair = %pair.label(),
            chain = %pair.chain_id,
            score = assessment.risk_score,
            level = %assessment.risk_level,
            "analysis complete"
        );

        Ok(Analysis { pair, assessment })
    }

    /// Register both tools, sharing this engine's resolver and scorer
    pub fn register_tools(&self, registry: &mut ToolRegistry) {
        registry.register(TokenInfoTool::new(Arc::clone(&self.resolver)));
        registry.register(RugRiskTool::new(Arc::clone(&self.scorer)));
    }
}
