//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (request pending): draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events, resize, or when a
//!   background task reports back.
//!
//! ## Background work
//!
//! Network effects run on tokio tasks via `core::action::perform` and come
//! back as `Action`s over an `mpsc` channel. The loop is the only writer of
//! `App`. Tasks still in flight at exit are abandoned; their `send` fails once
//! the receiver is gone and that failure is only logged.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::api::{AssistantBackend, HttpBackend};
use crate::core::action::{Action, Effect, perform, update};
use crate::core::config::ResolvedConfig;
use crate::core::language::label_for;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    InputBox, InputEvent, LanguageEvent, LanguageSelectorState, MessageListState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Chat,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub view: View,
    pub message_list: MessageListState,
    pub input_box: InputBox,
    /// Language overlay (None = hidden)
    pub language_picker: Option<LanguageSelectorState>,
    /// Next entry of `ui::SUGGESTIONS` that Tab inserts
    pub suggestion_index: usize,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            view: View::Landing,
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
            language_picker: None,
            suggestion_index: 0,
        }
    }

    /// Refresh component props from the application state.
    pub fn sync(&mut self, app: &App) {
        self.input_box.disabled = app.pending;
        self.input_box.language_label = label_for(&app.language).to_string();
        self.input_box.placeholder = if app.conversation.is_empty() {
            String::from("Ask a question...")
        } else {
            String::from("Ask a follow-up question...")
        };
    }

    /// Routes one terminal event. Returns the action it turns into, if any.
    pub fn handle_event(&mut self, app: &App, event: &TuiEvent) -> Option<Action> {
        if matches!(event, TuiEvent::ForceQuit) {
            return Some(Action::Quit);
        }

        // Overlay swallows everything while open
        if let Some(picker) = self.language_picker.as_mut() {
            let picked = picker.handle_event(event)?;
            self.language_picker = None;
            return match picked {
                LanguageEvent::Select(code) => Some(Action::SetLanguage(code)),
                LanguageEvent::Dismiss => None,
            };
        }

        match event {
            TuiEvent::OpenLanguagePicker => {
                self.language_picker = Some(LanguageSelectorState::new(&app.catalog, &app.language));
                None
            }
            TuiEvent::ReloadLanguages => Some(Action::ReloadLanguages),
            _ => match self.view {
                View::Landing => self.handle_landing_event(event),
                View::Chat => self.handle_chat_event(app, event),
            },
        }
    }

    fn handle_landing_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Submit => {
                self.view = View::Chat;
            }
            // Typing opens the chat and keeps the keystroke
            TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                self.view = View::Chat;
                self.input_box.handle_event(event);
            }
            _ => {}
        }
        None
    }

    fn handle_chat_event(&mut self, app: &App, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Escape => {
                self.view = View::Landing;
                None
            }
            TuiEvent::NextSuggestion => {
                if app.conversation.is_empty() && !app.pending {
                    let suggestion = ui::SUGGESTIONS[self.suggestion_index % ui::SUGGESTIONS.len()];
                    self.input_box.set_text(suggestion);
                    self.suggestion_index = (self.suggestion_index + 1) % ui::SUGGESTIONS.len();
                }
                None
            }
            TuiEvent::ScrollUp
            | TuiEvent::ScrollDown
            | TuiEvent::ScrollPageUp
            | TuiEvent::ScrollPageDown
            | TuiEvent::ScrollToBottom => {
                self.message_list.handle_event(event);
                None
            }
            _ => match self.input_box.handle_event(event)? {
                InputEvent::Submit(text) => Some(Action::Submit(text)),
                InputEvent::ContentChanged => None,
            },
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste, Hide);
    }
}

/// Runs `effect` on a tokio task and posts the outcome back to the loop.
///
/// Returns `None` for effects that need no background work.
fn spawn_effect(
    backend: Arc<dyn AssistantBackend>,
    effect: Effect,
    tx: mpsc::Sender<Action>,
) -> Option<JoinHandle<()>> {
    if !matches!(effect, Effect::SendChat(_) | Effect::FetchLanguages) {
        return None;
    }
    info!("Spawning {} on {}", effect_name(&effect), backend.name());
    Some(tokio::spawn(async move {
        if let Some(action) = perform(backend.as_ref(), effect).await
            && tx.send(action).is_err()
        {
            debug!("Dropping background result: event loop has exited");
        }
    }))
}

fn effect_name(effect: &Effect) -> &'static str {
    match effect {
        Effect::None => "none",
        Effect::SendChat(_) => "chat request",
        Effect::FetchLanguages => "language fetch",
        Effect::Quit => "quit",
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend: Arc<dyn AssistantBackend> = Arc::new(HttpBackend::new(&config.base_url));
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    spawn_effect(backend.clone(), Effect::FetchLanguages, tx.clone());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'event_loop: loop {
        tui.sync(&app);

        let animating = app.pending;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            let Some(action) = tui.handle_event(&app, &event) else {
                continue;
            };
            match update(&mut app, action) {
                Effect::Quit => break 'event_loop,
                effect => {
                    spawn_effect(backend.clone(), effect, tx.clone());
                }
            }
            tui.sync(&app);
        }

        // Handle background task results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            spawn_effect(backend.clone(), effect, tx.clone());
        }
    }

    info!("Shutting down ({} messages in log)", app.conversation.len());
    ratatui::restore();
    Ok(())
}
