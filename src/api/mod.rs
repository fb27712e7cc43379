pub mod backend;
pub mod client;
pub mod types;

pub use backend::{ApiError, AssistantBackend};
pub use client::HttpBackend;
pub use types::{ChatRequest, ChatResponse, HealthResponse, LanguagesResponse};
