//! Component trait for self-contained TUI widgets.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A widget that handles its own input and rendering.
///
/// Components manage their own state and can emit an event to signal the
/// host when something it cares about changed.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to
    /// the host, `None` if the input was absorbed without visible effect.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}
