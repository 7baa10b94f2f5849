//! Error Types for DeFi Sniper

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SniperError>;

#[derive(Error, Debug)]
pub enum SniperError {
    /// Network failure or non-success HTTP status from the market-data API
    #[error("{endpoint} request failed: {message}")]
    Transport {
        endpoint: String,
        status: Option<u16>,
        message: String,
    },

    /// Body was not JSON, or not one of the recognized pair payload shapes
    #[error("{endpoint} returned an unrecognized payload: {message}")]
    Parse { endpoint: String, message: String },

    /// Every resolution strategy came back empty
    #[error("Unable to find token/pair data for: {identifier}{}", detail_suffix(.detail))]
    Resolution {
        identifier: String,
        detail: Option<String>,
    },

    #[error("No pairs found: {0}")]
    NoPairs(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_ref()
        .map(|d| format!(" (last error: {d})"))
        .unwrap_or_default()
}

impl SniperError {
    pub fn transport(endpoint: impl ToString, status: Option<u16>, message: impl ToString) -> Self {
        Self::Transport {
            endpoint: endpoint.to_string(),
            status,
            message: message.to_string(),
        }
    }

    pub fn parse(endpoint: impl ToString, message: impl ToString) -> Self {
        Self::Parse {
            endpoint: endpoint.to_string(),
            message: message.to_string(),
        }
    }

    /// Failures a resolution cascade absorbs before moving to the next strategy
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Parse { .. })
    }

    /// HTTP status reported by upstream, if any
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<SniperError> for sniper_core::CoreError {
    fn from(err: SniperError) -> Self {
        match err {
            SniperError::InvalidInput(msg) => Self::ToolValidation(msg),
            other => Self::ToolExecution(other.to_string()),
        }
    }
}
