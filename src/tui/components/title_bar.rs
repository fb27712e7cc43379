//! # TitleBar Component
//!
//! Single-line status bar.
//!
//! The text is built from props, most important first, so narrow terminals
//! still show the product name and language:
//!
//! 1. **Unseen content**: `"AquaMitra | Groundwater AI Assistant | English | Ready | ↓ New"`
//! 2. **Status message**: `"AquaMitra | Groundwater AI Assistant | English | Ready"`
//! 3. **Default**: `"AquaMitra | Groundwater AI Assistant | English"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

const PRODUCT: &str = "AquaMitra | Groundwater AI Assistant";

/// Status bar.
///
/// # Props
///
/// - `language_label`: display name of the active language (App state)
/// - `status_message`: last status from the reducer (App state)
/// - `has_unseen_content`: messages below the scroll position (TUI state)
pub struct TitleBar {
    pub language_label: String,
    pub status_message: String,
    pub has_unseen_content: bool,
}

impl TitleBar {
    pub fn new(language_label: String, status_message: String, has_unseen_content: bool) -> Self {
        Self {
            language_label,
            status_message,
            has_unseen_content,
        }
    }

    pub fn text(&self) -> String {
        let mut text = format!("{} | {}", PRODUCT, self.language_label);
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if self.has_unseen_content {
            text.push_str(" | ↓ New");
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(self.text(), Style::default().fg(Color::Cyan)),
            area,
        );
    }
}
