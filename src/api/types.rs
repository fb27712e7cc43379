//! Wire types for the AquaMitra HTTP API.
//!
//! Field names match the server's JSON exactly. Extra fields the server
//! sends are optional here so older or trimmed-down deployments still parse.

use serde::{Deserialize, Serialize};

use crate::core::conversation::Message;

/// Body of `POST /api/chat`: the whole log plus the language to answer in.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub language: String,
}

/// Body returned by `POST /api/chat`. Only `response` is required.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub sql_query: Option<String>,
    #[serde(default)]
    pub latency_ms: Option<u64>,
    #[serde(default)]
    pub original_query: Option<String>,
    #[serde(default)]
    pub translated_query: Option<String>,
}

/// Body returned by `GET /api/languages`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LanguagesResponse {
    pub languages: Vec<String>,
}

/// Body returned by `GET /api/health`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}
