//! # Application State
//!
//! Core business state for AquaMitra. Domain data only; presentation state
//! (scroll offsets, input buffer, which screen is showing) lives in `tui`.
//!
//! ```text
//! App
//! ├── conversation: Conversation    // append-only message log
//! ├── pending: bool                 // a chat request is in flight
//! ├── language: String              // code sent with the next request
//! ├── catalog: LanguageCatalog      // codes offered by the server
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::api::ChatRequest;
use crate::core::config::ResolvedConfig;
use crate::core::conversation::Conversation;
use crate::core::language::{DEFAULT_LANGUAGE, LanguageCatalog};

pub struct App {
    pub conversation: Conversation,
    pub pending: bool,
    pub language: String,
    pub catalog: LanguageCatalog,
    pub status_message: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE.to_string())
    }
}

impl App {
    pub fn new(language: String) -> Self {
        Self {
            conversation: Conversation::new(),
            pending: false,
            language,
            catalog: LanguageCatalog::default(),
            status_message: String::from("Welcome to AquaMitra!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.language.clone())
    }

    /// Snapshot of everything the chat endpoint needs: the full log and the
    /// language in effect right now.
    pub fn chat_request(&self) -> ChatRequest {
        ChatRequest {
            messages: self.conversation.messages().to_vec(),
            language: self.language.clone(),
        }
    }
}
