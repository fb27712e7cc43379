//! # InputBox Component
//!
//! Multi-line question composer.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, Ctrl+J newlines)
//! - Handle editing (backspace, delete, cursor movement)
//! - Handle submission (Enter)
//! - Show a placeholder when empty and the active language in the title
//!
//! ## State Management
//!
//! The buffer, cursor and scroll offset are internal state. `disabled`,
//! `placeholder` and `language_label` are props refreshed by the parent each
//! frame from the application state. While disabled (a request is in flight)
//! every edit is ignored and Enter does nothing.

mod layout;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use layout::{
    CONTENT_OFFSET_X, CONTENT_OFFSET_Y, MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, inner_width, locate,
    next_char_boundary, prev_char_boundary, visual_rows,
};

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Text or cursor changed
    ContentChanged,
}

/// Text input component.
///
/// # Props
///
/// - `disabled`: a reply is pending
/// - `placeholder`: hint shown while the buffer is empty
/// - `language_label`: display name of the active language
pub struct InputBox {
    buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// First visible row when content exceeds `MAX_VISIBLE_LINES`
    scroll_offset: u16,
    pub disabled: bool,
    pub placeholder: String,
    pub language_label: String,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            scroll_offset: 0,
            disabled: false,
            placeholder: String::new(),
            language_label: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Replace the buffer (used for suggested queries). Cursor goes to the end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
        self.scroll_offset = 0;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// Required height for the current buffer at `area_width`, between
    /// 1 and `MAX_VISIBLE_LINES` content rows plus borders.
    pub fn calculate_height(&self, area_width: u16) -> u16 {
        let rows = visual_rows(&self.buffer, inner_width(area_width)).len() as u16;
        rows.clamp(1, MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    /// Keep the cursor row inside the visible window.
    fn update_scroll_offset(&mut self, cursor_row: u16, total_rows: u16) {
        if total_rows <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
        } else if cursor_row < self.scroll_offset {
            self.scroll_offset = cursor_row;
        } else if cursor_row >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = cursor_row + 1 - MAX_VISIBLE_LINES;
        }
    }

    fn render_scrollbar(&self, frame: &mut Frame, area: Rect, total_rows: u16) {
        if total_rows <= MAX_VISIBLE_LINES {
            return;
        }

        // content_length is the max scroll position, not total rows
        let max_scroll = total_rows - MAX_VISIBLE_LINES;
        let mut scrollbar_state = ScrollbarState::default()
            .content_length(max_scroll as usize)
            .position(self.scroll_offset as usize);

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }

    fn edit(&mut self, event: &TuiEvent) -> Option<InputEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.buffer.insert_str(self.cursor, text);
                self.cursor += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                InputEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor != line_start).then(|| {
                    self.cursor = line_start;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor..]
                    .find('\n')
                    .map(|i| self.cursor + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor != line_end).then(|| {
                    self.cursor = line_end;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::Submit => {
                if self.buffer.trim().is_empty() {
                    return None;
                }
                let text = std::mem::take(&mut self.buffer);
                self.clear();
                Some(InputEvent::Submit(text))
            }
            _ => None,
        }
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = inner_width(area.width);
        let rows = visual_rows(&self.buffer, width);
        let total_rows = rows.len() as u16;
        let (cursor_row, cursor_col) = locate(&self.buffer, &rows, self.cursor);
        self.update_scroll_offset(cursor_row as u16, total_rows);

        let border_style = if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Message ")
            .title(Line::from(format!(" 🌐 {} ", self.language_label)).right_aligned())
            .padding(Padding::horizontal(1));

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder.as_str()).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            let lines: Vec<Line> = rows
                .iter()
                .skip(self.scroll_offset as usize)
                .take(MAX_VISIBLE_LINES as usize)
                .map(|row| Line::from(&self.buffer[row.start..row.end]))
                .collect();
            let style = if self.disabled {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Green)
            };
            Paragraph::new(lines).style(style)
        };

        frame.render_widget(paragraph.block(block), area);
        self.render_scrollbar(frame, area, total_rows);

        if !self.disabled && width > 0 {
            let visible_row = (cursor_row as u16).saturating_sub(self.scroll_offset);
            let x = area.x + CONTENT_OFFSET_X + cursor_col.min(width);
            let y = area.y + CONTENT_OFFSET_Y + visible_row;
            frame.set_cursor_position((x, y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.disabled {
            return None;
        }
        self.edit(event)
    }
}
