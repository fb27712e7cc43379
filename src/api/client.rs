//! HTTP implementation of [`AssistantBackend`] on top of `reqwest`.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::backend::{ApiError, AssistantBackend};
use super::types::{ChatRequest, ChatResponse, HealthResponse, LanguagesResponse};

/// Talks to an AquaMitra server rooted at `base_url` (e.g. `http://localhost:8000`).
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Checks the status and decodes the body, mapping each failure to its `ApiError`.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Server error: {} - {}", status.as_u16(), body);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }
}

#[async_trait]
impl AssistantBackend for HttpBackend {
    fn name(&self) -> &str {
        &self.base_url
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        info!(
            "Chat request: messages={}, language={}",
            request.messages.len(),
            request.language
        );

        let response = self
            .client
            .post(self.url("/api/chat"))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let reply: ChatResponse = Self::decode(response).await?;
        debug!(
            "Chat reply: {} bytes, latency_ms={:?}, sql_query={:?}",
            reply.response.len(),
            reply.latency_ms,
            reply.sql_query
        );
        Ok(reply)
    }

    async fn languages(&self) -> Result<Vec<String>, ApiError> {
        let body: LanguagesResponse = self.get_json("/api/languages").await?;
        info!("Language catalog: {:?}", body.languages);
        Ok(body.languages)
    }

    async fn health(&self) -> Result<String, ApiError> {
        let body: HealthResponse = self.get_json("/api/health").await?;
        Ok(body.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let backend = HttpBackend::new("http://localhost:8000/");
        assert_eq!(backend.base_url(), "http://localhost:8000");
        assert_eq!(backend.url("/api/chat"), "http://localhost:8000/api/chat");
    }

    #[test]
    fn test_name_is_base_url() {
        let backend = HttpBackend::new("http://example.test");
        assert_eq!(backend.name(), "http://example.test");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Api {
            status: 500,
            message: "RAG Pipeline Error".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 500): RAG Pipeline Error");
        assert_eq!(
            ApiError::Network("refused".into()).to_string(),
            "network error: refused"
        );
    }
}
