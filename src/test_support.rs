//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::api::{ApiError, AssistantBackend, ChatRequest, ChatResponse};

/// Builds a minimal successful chat reply.
pub fn reply(text: &str) -> ChatResponse {
    ChatResponse {
        response: text.to_string(),
        sql_query: None,
        latency_ms: None,
        original_query: None,
        translated_query: None,
    }
}

/// Backend that answers from pre-loaded queues and records every chat request.
pub struct ScriptedBackend {
    chat_results: Mutex<VecDeque<Result<ChatResponse, ApiError>>>,
    language_result: Result<Vec<String>, ApiError>,
    pub requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedBackend {
    pub fn new(
        chat_results: Vec<Result<ChatResponse, ApiError>>,
        language_result: Result<Vec<String>, ApiError>,
    ) -> Self {
        Self {
            chat_results: Mutex::new(chat_results.into()),
            language_result,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssistantBackend for ScriptedBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.chat_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("script exhausted".into())))
    }

    async fn languages(&self) -> Result<Vec<String>, ApiError> {
        self.language_result.clone()
    }

    async fn health(&self) -> Result<String, ApiError> {
        Ok("ok".to_string())
    }
}

/// Backend whose chat call blocks until [`GatedBackend::release`] is called.
pub struct GatedBackend {
    gate: Notify,
    response: ChatResponse,
}

impl GatedBackend {
    pub fn new(response: ChatResponse) -> Self {
        Self {
            gate: Notify::new(),
            response,
        }
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl AssistantBackend for GatedBackend {
    fn name(&self) -> &str {
        "gated"
    }

    async fn chat(&self, _request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.gate.notified().await;
        Ok(self.response.clone())
    }

    async fn languages(&self) -> Result<Vec<String>, ApiError> {
        Ok(Vec::new())
    }

    async fn health(&self) -> Result<String, ApiError> {
        Ok("ok".to_string())
    }
}
