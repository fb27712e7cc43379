use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// Something that draws itself into a region of the frame.
///
/// Data comes in as struct fields ("props"); the component may keep caches
/// or scroll positions, which is why `render` takes `&mut self`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that turns raw terminal events into its own intents.
///
/// Components never touch `App`; they hand back an `Event` and the event
/// loop decides which `Action` (if any) it becomes.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
