//! View abstraction and the events/actions exchanged with the shell.

use ratatui::layout::Rect;
use ratatui::Frame;

/// Event type delivered to the active view.
#[derive(Debug, Clone)]
pub enum Event {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    Paste(String),
}

/// Action that a view can return after handling an event.
///
/// Views never touch navigation state themselves; they hand one of these
/// back and the application shell applies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(String),
    Back,
    Forward,
    Quit,
    Noop,
}

/// A renderable unit of UI activated by a route.
pub trait View: Send {
    /// Called when navigation makes this view the active one.
    fn on_enter(&mut self) {}

    /// Called when navigation replaces this view.
    fn on_exit(&mut self) {}

    /// Short label for logs and status lines.
    fn title(&self) -> &str {
        ""
    }

    /// Render the view into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// Handle an event, returning an optional action.
    fn handle_event(&mut self, event: Event) -> Option<Action> {
        let _ = event;
        None
    }
}

/// Zero-argument factory producing a fresh view for its route.
pub type ViewFactory = Box<dyn Fn() -> Box<dyn View> + Send + Sync>;
