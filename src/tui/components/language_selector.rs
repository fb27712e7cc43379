//! # Language Selector Component
//!
//! Overlay for choosing the answer language. Opened with Ctrl+L.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `LanguageSelectorState` lives in `TuiState` while the overlay is open
//! - `LanguageSelector` is created each frame with borrowed state
//!
//! The option list comes from [`LanguageCatalog::options`], which already
//! degrades to a lone English entry when the catalog is empty.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::language::{LanguageCatalog, LanguageOption};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Events emitted by the language selector.
#[derive(Debug, Clone, PartialEq)]
pub enum LanguageEvent {
    Select(String),
    Dismiss,
}

/// Persistent state for the selector overlay.
pub struct LanguageSelectorState {
    pub options: Vec<LanguageOption>,
    pub list_state: ListState,
    /// Code active when the overlay opened (marked with `*`)
    pub current: String,
}

impl LanguageSelectorState {
    /// Opens the selector with the cursor on the active language (or the top
    /// entry if the active code is not in the catalog).
    pub fn new(catalog: &LanguageCatalog, current: &str) -> Self {
        let options = catalog.options();
        let selected = options.iter().position(|o| o.code == current).unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            options,
            list_state,
            current: current.to_string(),
        }
    }

    pub fn selected(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }
}

impl EventHandler for LanguageSelectorState {
    type Event = LanguageEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<LanguageEvent> {
        match event {
            TuiEvent::Escape => Some(LanguageEvent::Dismiss),
            TuiEvent::ScrollUp => {
                let idx = self.selected().saturating_sub(1);
                self.list_state.select(Some(idx));
                None
            }
            TuiEvent::ScrollDown => {
                let last = self.options.len().saturating_sub(1);
                let idx = (self.selected() + 1).min(last);
                self.list_state.select(Some(idx));
                None
            }
            TuiEvent::Submit => self
                .options
                .get(self.selected())
                .map(|option| LanguageEvent::Select(option.code.clone())),
            _ => None,
        }
    }
}

/// Transient render wrapper for the selector overlay.
pub struct LanguageSelector<'a> {
    state: &'a mut LanguageSelectorState,
}

impl<'a> LanguageSelector<'a> {
    pub fn new(state: &'a mut LanguageSelectorState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let height = (self.state.options.len() as u16).saturating_add(2).min(area.height);
        let overlay = centered_rect(36, height, area);

        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" 🌐 Language ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let selected = self.state.selected();
        let items: Vec<ListItem> = self
            .state
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let is_active = option.code == self.state.current;
                let style = if i == selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let marker = if is_active { " *" } else { "" };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<4}", option.code), style),
                    Span::styled(option.label.clone(), style),
                    Span::styled(marker, style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// A rect `width` columns wide and `height` rows tall, centered in `outer`.
fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(outer.width)),
        Constraint::Fill(1),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn catalog(codes: &[&str]) -> LanguageCatalog {
        LanguageCatalog::new(codes.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_empty_catalog_offers_single_english_option() {
        let state = LanguageSelectorState::new(&LanguageCatalog::default(), "en");
        assert_eq!(state.options.len(), 1);
        assert_eq!(state.options[0].code, "en");
        assert_eq!(state.options[0].label, "English");
    }

    #[test]
    fn test_options_in_catalog_order() {
        let state = LanguageSelectorState::new(&catalog(&["en", "hi", "mr"]), "en");
        let labels: Vec<&str> = state.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["English", "हिंदी", "मराठी"]);
    }

    #[test]
    fn test_opens_on_active_language() {
        let state = LanguageSelectorState::new(&catalog(&["en", "hi", "mr"]), "mr");
        assert_eq!(state.selected(), 2);

        let state = LanguageSelectorState::new(&catalog(&["en", "hi"]), "ta");
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn test_navigation_and_select() {
        let mut state = LanguageSelectorState::new(&catalog(&["en", "hi", "mr"]), "en");

        assert_eq!(state.handle_event(&TuiEvent::ScrollDown), None);
        assert_eq!(state.handle_event(&TuiEvent::ScrollDown), None);
        assert_eq!(state.handle_event(&TuiEvent::ScrollDown), None); // clamps at end
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(LanguageEvent::Select("mr".to_string()))
        );

        state.handle_event(&TuiEvent::ScrollUp);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(LanguageEvent::Select("hi".to_string()))
        );
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = LanguageSelectorState::new(&LanguageCatalog::default(), "en");
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(LanguageEvent::Dismiss));
    }

    #[test]
    fn test_render_lists_labels() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = LanguageSelectorState::new(&catalog(&["en", "gu"]), "gu");

        terminal
            .draw(|f| LanguageSelector::new(&mut state).render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("English"));
        assert!(text.contains("Language"));
    }

    #[test]
    fn test_render_on_tiny_terminal_does_not_panic() {
        let backend = TestBackend::new(10, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = LanguageSelectorState::new(&catalog(&["en", "hi", "mr", "bn"]), "en");
        terminal
            .draw(|f| LanguageSelector::new(&mut state).render(f, f.area()))
            .unwrap();
    }
}
