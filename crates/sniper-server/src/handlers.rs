//! HTTP Handlers

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use defi_sniper::{Analysis, SniperError};
use sniper_core::{CoreError, ToolCall, ToolResult, ToolSchema};

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub upstream: String,
}

#[derive(Debug, Deserialize)]
pub struct ToolRequest {
    #[serde(default)]
    pub arguments: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub identifier: String,
    #[serde(default)]
    pub chain: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, code: &str, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.into(),
        }),
    )
}

fn tool_error(e: &CoreError) -> ApiError {
    let status = match e {
        CoreError::ToolNotFound(_) => StatusCode::NOT_FOUND,
        CoreError::ToolValidation(_) => StatusCode::BAD_REQUEST,
        CoreError::ToolExecution(_) | CoreError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    api_error(status, e.code(), e.user_message())
}

fn analysis_error(e: &SniperError) -> ApiError {
    let (status, code) = match e {
        SniperError::Resolution { .. } | SniperError::NoPairs(_) => {
            (StatusCode::NOT_FOUND, "UNRESOLVED")
        }
        SniperError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
        SniperError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
        _ => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
    };
    api_error(status, code, e.to_string())
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        upstream: state.engine.resolver().client_name().to_string(),
    })
}

/// Schemas of every registered tool
pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolSchema>> {
    Json(state.tools.schemas())
}

/// Run one tool call
pub async fn call_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(payload): Json<ToolRequest>,
) -> Result<Json<ToolResult>, ApiError> {
    let call = ToolCall {
        name,
        arguments: payload.arguments,
        id: Some(payload.id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string())),
    };

    let result = state.tools.execute(&call).await.map_err(|e| {
        tracing::warn!(tool = %call.name, error = %e, "tool call rejected");
        tool_error(&e)
    })?;

    Ok(Json(result))
}

/// Resolve an identifier and score the pair, bounded by the request timeout
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<Analysis>, ApiError> {
    let work = state
        .engine
        .analyze(&payload.identifier, payload.chain.as_deref());

    match tokio::time::timeout(state.request_timeout, work).await {
        Ok(Ok(analysis)) => Ok(Json(analysis)),
        Ok(Err(e)) => {
            tracing::warn!(identifier = %payload.identifier, error = %e, "analysis failed");
            Err(analysis_error(&e))
        }
        Err(_) => {
            tracing::error!(
                identifier = %payload.identifier,
                timeout = ?state.request_timeout,
                "analysis timed out"
            );
            Err(api_error(
                StatusCode::GATEWAY_TIMEOUT,
                "TIMEOUT",
                format!(
                    "Upstream did not answer within {}ms",
                    state.request_timeout.as_millis()
                ),
            ))
        }
    }
}
