//! Application State

use std::sync::Arc;
use std::time::Duration;

use defi_sniper::SniperEngine;
use sniper_core::ToolRegistry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Resolver + scorer behind the analyze route
    pub engine: SniperEngine,

    /// Tool registry with all available tools
    pub tools: Arc<ToolRegistry>,

    /// Upper bound for one analysis
    pub request_timeout: Duration,
}

impl AppState {
    /// State whose tools share the engine's resolver and scorer
    pub fn new(engine: SniperEngine, request_timeout: Duration) -> Self {
        let mut tools = ToolRegistry::new();
        engine.register_tools(&mut tools);

        Self {
            engine,
            tools: Arc::new(tools),
            request_timeout,
        }
    }
}
