//! # Actions
//!
//! Everything that can happen to a conversation becomes an `Action`.
//! User presses Enter? That's `Action::Submit(text)`.
//! Server answers? That's `Action::ReplyReceived(response)`.
//!
//! `update()` applies an action to the state and returns the `Effect` the
//! caller must carry out. No I/O happens here; `perform()` is the single place
//! effects touch the network, and whoever owns the state feeds its result back
//! through `update()`.
//!
//! ```text
//! State + Action  →  update()  →  Effect  →  perform()  →  Action  →  ...
//! ```
//!
//! A submission walks `Idle → Sending → Idle`: `Submit` sets `pending` and
//! yields `SendChat`; exactly one of `ReplyReceived` / `ReplyFailed` appends the
//! answering turn and clears `pending`.

use log::{debug, info, warn};

use crate::api::{ApiError, AssistantBackend, ChatRequest, ChatResponse};
use crate::core::conversation::Message;
use crate::core::language::{LanguageCatalog, label_for};
use crate::core::state::App;

/// Assistant turn appended when a chat request fails for any reason.
pub const ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// User sent the input box contents.
    Submit(String),
    /// Chat endpoint answered.
    ReplyReceived(ChatResponse),
    /// Chat request failed (transport, status, or body shape).
    ReplyFailed(ApiError),
    /// Language catalog fetched.
    LanguagesLoaded(Vec<String>),
    /// Language catalog fetch failed.
    LanguagesFailed(ApiError),
    /// User picked a language.
    SetLanguage(String),
    /// User asked for the catalog to be fetched again.
    ReloadLanguages,
    Quit,
}

/// Side effect requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    SendChat(ChatRequest),
    FetchLanguages,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            if text.trim().is_empty() {
                debug!("Ignoring empty submission");
                return Effect::None;
            }
            if app.pending {
                debug!("Ignoring submission while a request is in flight");
                return Effect::None;
            }

            app.conversation.push(Message::user(text));
            app.pending = true;
            app.status_message = String::from("Thinking...");
            Effect::SendChat(app.chat_request())
        }

        Action::ReplyReceived(reply) => {
            if !app.pending {
                warn!("Discarding reply with no request in flight");
                return Effect::None;
            }

            app.conversation.push(Message::assistant(reply.response));
            app.pending = false;
            app.status_message = match reply.latency_ms {
                Some(ms) => format!("Answered in {ms} ms"),
                None => String::from("Ready"),
            };
            Effect::None
        }

        Action::ReplyFailed(err) => {
            if !app.pending {
                warn!("Discarding failure with no request in flight: {}", err);
                return Effect::None;
            }

            warn!("Chat request failed: {}", err);
            app.conversation.push(Message::assistant(ERROR_REPLY));
            app.pending = false;
            app.status_message = String::from("Request failed");
            Effect::None
        }

        Action::LanguagesLoaded(codes) => {
            info!("Loaded {} languages", codes.len());
            app.catalog = LanguageCatalog::new(codes);
            if !app.catalog.is_empty() && !app.catalog.contains(&app.language) {
                warn!(
                    "Selected language '{}' is not offered by the server; keeping it",
                    app.language
                );
            }
            app.status_message = format!("{} languages available", app.catalog.codes().len());
            Effect::None
        }

        Action::LanguagesFailed(err) => {
            warn!("Failed to fetch languages: {}", err);
            app.status_message = String::from("Languages unavailable");
            Effect::None
        }

        Action::SetLanguage(code) => {
            let code = code.trim();
            if code.is_empty() {
                return Effect::None;
            }
            app.language = code.to_string();
            app.status_message = format!("Language: {}", label_for(code));
            Effect::None
        }

        Action::ReloadLanguages => Effect::FetchLanguages,

        Action::Quit => Effect::Quit,
    }
}

/// Carries out a network effect and returns the action describing its outcome.
/// Effects with no I/O return `None`.
pub async fn perform(backend: &dyn AssistantBackend, effect: Effect) -> Option<Action> {
    match effect {
        Effect::SendChat(request) => Some(match backend.chat(&request).await {
            Ok(reply) => Action::ReplyReceived(reply),
            Err(e) => Action::ReplyFailed(e),
        }),
        Effect::FetchLanguages => Some(match backend.languages().await {
            Ok(codes) => Action::LanguagesLoaded(codes),
            Err(e) => Action::LanguagesFailed(e),
        }),
        Effect::None | Effect::Quit => None,
    }
}
