use std::fmt;

use async_trait::async_trait;

use super::types::{ChatRequest, ChatResponse};

/// Errors from talking to the assistant server.
/// None of these reach the UI; the reducer turns them into fallback state.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Connection refused, DNS failure, reset mid-body.
    Network(String),
    /// Server answered with a non-success status.
    Api { status: u16, message: String },
    /// Body did not match the expected shape.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The remote assistant, as seen by the controller.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Human-readable identifier for logs (usually the base URL).
    fn name(&self) -> &str;

    /// Sends the full conversation and returns the assistant's reply.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError>;

    /// Fetches the supported language codes.
    async fn languages(&self) -> Result<Vec<String>, ApiError>;

    /// Probes server liveness; returns the reported status string.
    async fn health(&self) -> Result<String, ApiError>;
}
