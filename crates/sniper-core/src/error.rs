//! Error Types

use thiserror::Error;

/// Result type alias for tool operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while dispatching or running a tool
#[derive(Error, Debug)]
pub enum CoreError {
    /// Tool not found in registry
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Arguments did not satisfy the tool schema
    #[error("Tool validation error: {0}")]
    ToolValidation(String),

    /// Tool ran but could not complete
    #[error("Tool execution error: {0}")]
    ToolExecution(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Stable machine-readable code for transport layers
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ToolNotFound(_) => "TOOL_NOT_FOUND",
            Self::ToolValidation(_) => "INVALID_ARGUMENTS",
            Self::ToolExecution(_) => "TOOL_FAILED",
            Self::Json(_) => "JSON_ERROR",
        }
    }

    /// Convert to a caller-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::ToolNotFound(name) => format!("The tool '{name}' is not available."),
            Self::ToolValidation(msg) => format!("Invalid tool input: {msg}"),
            Self::ToolExecution(msg) => format!("Tool error: {msg}"),
            Self::Json(_) => "The tool produced malformed output.".into(),
        }
    }
}
