//! # Conversation Log
//!
//! The ordered, append-only record of a chat session.
//!
//! ```text
//! Conversation
//! └── messages: Vec<Message>   // chronological, display order
//!     ├── Message { role: User,      content: "Top 5 overexploited districts" }
//!     └── Message { role: Assistant, content: "District A, B, C..." }
//! ```
//!
//! Messages are never edited or removed once pushed. The only way in is
//! [`Conversation::push`], and the reducer in `action.rs` is the only caller.

use serde::{Deserialize, Serialize};

/// Who authored a message. Serialized exactly as the chat endpoint expects.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Short label used as the bubble title.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "AquaMitra",
        }
    }

    pub fn avatar(self) -> &'static str {
        match self {
            Role::User => "👤",
            Role::Assistant => "💧",
        }
    }
}

/// A single chat turn. Content is kept verbatim, whitespace included.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Append-only message log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
