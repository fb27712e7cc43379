//! # MessageList Component
//!
//! Scrollable view of the conversation.
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&'a mut MessageListState` (persistent scroll state) and the message slice
//! (props). New messages keep the view pinned to the bottom until the user
//! scrolls up; scrolling back down to the end re-pins it.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::conversation::Message;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::MessageBubble;
use crate::tui::event::TuiEvent;

/// Blank rows between bubbles.
const GAP: u16 = 1;
/// Rows reserved under the last bubble for the "Thinking..." indicator.
const THINKING_HEIGHT: u16 = 1;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Scroll state for the message list. Lives in `TuiState`.
pub struct MessageListState {
    pub scroll_state: ScrollViewState,
    /// Height of each message row (bubble + gap) from the last render
    pub heights: Vec<u16>,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Content exists below the visible window
    pub has_unseen_content: bool,
    /// Width the cached heights were computed for
    cached_width: u16,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            heights: Vec::new(),
            stick_to_bottom: true,
            viewport_height: 0,
            has_unseen_content: false,
            cached_width: 0,
        }
    }

    fn content_height(&self) -> u16 {
        self.heights.iter().fold(0u16, |acc, h| acc.saturating_add(*h))
    }

    fn max_offset(&self, extra: u16) -> u16 {
        self.content_height()
            .saturating_add(extra)
            .saturating_sub(self.viewport_height)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self, extra: u16) {
        let max_y = self.max_offset(extra);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }

    /// Re-engage auto-scroll once the user has scrolled to the end.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.max_offset(0);
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }

    /// Brings heights in line with `messages` at `width`, reusing cached rows
    /// when the width has not changed (messages are append-only).
    fn sync_heights(&mut self, messages: &[Message], width: u16) {
        if width != self.cached_width || self.heights.len() > messages.len() {
            self.heights.clear();
            self.cached_width = width;
        }
        for message in messages.iter().skip(self.heights.len()) {
            self.heights
                .push(MessageBubble::calculate_height(message, width).saturating_add(GAP));
        }
    }
}

impl EventHandler for MessageListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollToBottom => {
                self.stick_to_bottom = true;
                self.scroll_state.scroll_to_bottom();
            }
            _ => {}
        }
        None
    }
}

/// Scrollable conversation view.
pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub messages: &'a [Message],
    pub pending: bool,
    pub spinner_frame: usize,
}

impl<'a> MessageList<'a> {
    pub fn new(
        state: &'a mut MessageListState,
        messages: &'a [Message],
        pending: bool,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            messages,
            pending,
            spinner_frame,
        }
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // scrollbar column
        self.state.sync_heights(self.messages, content_width);

        let thinking_rows = if self.pending { THINKING_HEIGHT } else { 0 };
        let total_height = self.state.content_height().saturating_add(thinking_rows);

        self.state.viewport_height = area.height;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll(thinking_rows);
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y: u16 = 0;
        for (message, height) in self.messages.iter().zip(self.state.heights.iter()) {
            let bubble_height = height.saturating_sub(GAP);
            scroll_view.render_widget(
                MessageBubble::new(message),
                Rect::new(0, y, content_width, bubble_height),
            );
            y = y.saturating_add(*height);
        }

        if self.pending {
            let frame_symbol = SPINNER[self.spinner_frame % SPINNER.len()];
            let indicator = Paragraph::new(Line::from(vec![
                Span::styled(format!("{frame_symbol} "), Style::default().fg(Color::Cyan)),
                Span::styled(
                    "Thinking...",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
                ),
            ]));
            scroll_view.render_widget(indicator, Rect::new(0, y, content_width, THINKING_HEIGHT));
        }

        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);

        let offset = self.state.scroll_state.offset().y;
        let max_y = total_height.saturating_sub(area.height);
        self.state.has_unseen_content = !self.state.stick_to_bottom && offset < max_y;
    }
}
