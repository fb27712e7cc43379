//! # Conversation Controller
//!
//! Owns an [`App`] and a backend, and runs each operation to completion:
//! `update()` decides, `perform()` talks to the server, `update()` records the
//! outcome. Used by the `--check` probe and by tests; the TUI drives the same
//! reducer but performs effects on spawned tasks so the screen keeps redrawing.

use std::sync::Arc;

use crate::api::AssistantBackend;
use crate::core::action::{Action, Effect, perform, update};
use crate::core::state::App;

pub struct Controller {
    app: App,
    backend: Arc<dyn AssistantBackend>,
}

impl Controller {
    pub fn new(app: App, backend: Arc<dyn AssistantBackend>) -> Self {
        Self { app, backend }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Sends `text` and waits for the answering turn. Empty text, or text sent
    /// while another submission is pending, is a no-op. Never fails: errors
    /// become the synthetic error turn.
    pub async fn submit(&mut self, text: &str) {
        self.dispatch(Action::Submit(text.to_string())).await;
    }

    /// Fetches the language catalog. On failure the previous catalog is kept.
    pub async fn load_languages(&mut self) {
        self.dispatch(Action::ReloadLanguages).await;
    }

    pub fn set_language(&mut self, code: &str) {
        update(&mut self.app, Action::SetLanguage(code.to_string()));
    }

    /// Applies an action and follows any effect it requests until the state settles.
    pub async fn dispatch(&mut self, action: Action) -> Effect {
        let mut effect = update(&mut self.app, action);
        while let Some(outcome) = perform(self.backend.as_ref(), effect.clone()).await {
            effect = update(&mut self.app, outcome);
        }
        effect
    }
}
