//! # sniper-core
//!
//! The tool contract shared by the sniper engine and whatever drives it.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐   ToolCall (JSON)   ┌─────────────────────────────┐
//! │  Agent / Server  │ ──────────────────▶ │        ToolRegistry          │
//! │  (collaborator)  │ ◀────────────────── │  get_token_info  check_rug.. │
//! └──────────────────┘   ToolResult        └─────────────────────────────┘
//! ```
//!
//! Domain crates implement [`Tool`] and register themselves; callers never
//! depend on the concrete tool types.

pub mod error;
pub mod tool;

pub use error::{CoreError, Result};
pub use tool::{
    ParameterSchema, Tool, ToolCall, ToolRegistry, ToolResult, ToolSchema, validate_arguments,
};
