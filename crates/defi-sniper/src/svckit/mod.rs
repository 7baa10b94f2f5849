//! Service Kit - Agent Tools
//!
//! Tools that implement `sniper_core::Tool` so an agent can call the resolver
//! and the scorer by name.

mod rug_risk;
mod token_info;

pub use rug_risk::RugRiskTool;
pub use token_info::TokenInfoTool;
