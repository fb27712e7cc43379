use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use log::{debug, warn};

/// Terminal input translated into the vocabulary the TUI understands.
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    /// Ctrl+C: leave regardless of what is on screen
    ForceQuit,
    /// Enter
    Submit,
    /// Esc: close overlay, or go back to the landing page
    Escape,
    /// Tab: next suggested query
    NextSuggestion,
    /// Ctrl+L
    OpenLanguagePicker,
    /// Ctrl+R
    ReloadLanguages,

    InputChar(char),
    Paste(String), // Bracketed paste, newlines preserved
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    ScrollToBottom,

    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    }

    match event::read() {
        Ok(event) => translate(event),
        Err(e) => {
            warn!("Event read failed: {}", e);
            None
        }
    }
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(
            data.replace("\r\n", "\n").replace('\r', "\n"),
        )),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<TuiEvent> {
    // Some terminals (Windows) report releases too
    if key.kind != KeyEventKind::Press {
        return None;
    }
    debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);

    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (KeyModifiers::CONTROL, KeyCode::Char('l')) => Some(TuiEvent::OpenLanguagePicker),
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::ReloadLanguages),
        (KeyModifiers::CONTROL, KeyCode::Char('a')) => Some(TuiEvent::CursorHome),
        (KeyModifiers::CONTROL, KeyCode::Char('e')) => Some(TuiEvent::CursorEnd),
        // Ctrl+J is ASCII LF; most terminals also send it for Ctrl+Enter
        (KeyModifiers::CONTROL, KeyCode::Char('j')) => Some(TuiEvent::InputChar('\n')),
        (KeyModifiers::CONTROL, _) => None,
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Tab) => Some(TuiEvent::NextSuggestion),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
        (_, KeyCode::End) => Some(TuiEvent::ScrollToBottom),
        (_, KeyCode::Up) => Some(TuiEvent::ScrollUp),
        (_, KeyCode::Down) => Some(TuiEvent::ScrollDown),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(modifiers: KeyModifiers, code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_control_shortcuts() {
        assert_eq!(
            translate(key(KeyModifiers::CONTROL, KeyCode::Char('c'))),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            translate(key(KeyModifiers::CONTROL, KeyCode::Char('l'))),
            Some(TuiEvent::OpenLanguagePicker)
        );
        assert_eq!(
            translate(key(KeyModifiers::CONTROL, KeyCode::Char('j'))),
            Some(TuiEvent::InputChar('\n'))
        );
        assert_eq!(
            translate(key(KeyModifiers::CONTROL, KeyCode::Char('e'))),
            Some(TuiEvent::CursorEnd)
        );
        assert_eq!(translate(key(KeyModifiers::CONTROL, KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_plain_and_shifted_chars_are_input() {
        assert_eq!(
            translate(key(KeyModifiers::NONE, KeyCode::Char('a'))),
            Some(TuiEvent::InputChar('a'))
        );
        assert_eq!(
            translate(key(KeyModifiers::SHIFT, KeyCode::Char('A'))),
            Some(TuiEvent::InputChar('A'))
        );
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(translate(key(KeyModifiers::NONE, KeyCode::Enter)), Some(TuiEvent::Submit));
        assert_eq!(translate(key(KeyModifiers::NONE, KeyCode::Esc)), Some(TuiEvent::Escape));
        assert_eq!(
            translate(key(KeyModifiers::NONE, KeyCode::Tab)),
            Some(TuiEvent::NextSuggestion)
        );
        assert_eq!(
            translate(key(KeyModifiers::NONE, KeyCode::End)),
            Some(TuiEvent::ScrollToBottom)
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_paste_normalizes_line_endings() {
        assert_eq!(
            translate(Event::Paste("a\r\nb".to_string())),
            Some(TuiEvent::Paste("a\nb".to_string()))
        );
        // Classic Mac line endings
        assert_eq!(
            translate(Event::Paste("a\rb".to_string())),
            Some(TuiEvent::Paste("a\nb".to_string()))
        );
        assert_eq!(
            translate(Event::Paste("one\r\ntwo\rthree\n".to_string())),
            Some(TuiEvent::Paste("one\ntwo\nthree\n".to_string()))
        );
    }

    #[test]
    fn test_resize() {
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
