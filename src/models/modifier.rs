//! Modifier state snapshots built from terminal key events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Directional signal from an arrow key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,
}

impl Direction {
    /// Maps an arrow key code to a direction. Any other code carries no
    /// directional signal.
    #[must_use]
    pub const fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            KeyCode::Left => Some(Self::Left),
            KeyCode::Right => Some(Self::Right),
            _ => None,
        }
    }

    /// Arrow glyph for the pad display.
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Left => "←",
            Self::Right => "→",
        }
    }
}

/// Snapshot of the modifier keys held during one key event, plus the
/// directional signal carried by that event (if it was an arrow key).
///
/// Ephemeral: rebuilt on every event. The overlay merges the previous
/// direction into snapshots that carry none, so "last arrow pressed" is the
/// only state that outlives an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierState {
    /// Shift is held
    pub shift: bool,
    /// Control is held
    pub ctrl: bool,
    /// Alt/Option is held
    pub alt: bool,
    /// Command/Super is held
    pub cmd: bool,
    /// Arrow direction, if any
    pub direction: Option<Direction>,
}

impl ModifierState {
    /// Builds a snapshot from a terminal key event.
    ///
    /// The cmd flag maps to `SUPER`, which terminals only report when the
    /// enhanced keyboard protocol is active (see `tui::setup_terminal`).
    #[must_use]
    pub fn from_event(event: &KeyEvent) -> Self {
        Self {
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            cmd: event.modifiers.contains(KeyModifiers::SUPER),
            direction: Direction::from_key_code(event.code),
        }
    }

    /// Returns a copy with the direction replaced.
    #[must_use]
    pub const fn with_direction(mut self, direction: Option<Direction>) -> Self {
        self.direction = direction;
        self
    }

    /// Whether the modifier matching a keyboard label is held.
    ///
    /// Labels are the layout's key labels; non-modifier labels are never
    /// "held".
    #[must_use]
    pub fn is_label_held(&self, label: &str) -> bool {
        match label {
            "shift" => self.shift,
            "ctrl" => self.ctrl,
            "alt" => self.alt,
            "cmd" => self.cmd,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_key_code() {
        assert_eq!(Direction::from_key_code(KeyCode::Up), Some(Direction::Up));
        assert_eq!(
            Direction::from_key_code(KeyCode::Down),
            Some(Direction::Down)
        );
        assert_eq!(
            Direction::from_key_code(KeyCode::Left),
            Some(Direction::Left)
        );
        assert_eq!(
            Direction::from_key_code(KeyCode::Right),
            Some(Direction::Right)
        );
        assert_eq!(Direction::from_key_code(KeyCode::Char('a')), None);
        assert_eq!(Direction::from_key_code(KeyCode::Enter), None);
        assert_eq!(Direction::from_key_code(KeyCode::PageUp), None);
    }

    #[test]
    fn test_from_event_modifiers() {
        let event = KeyEvent::new(
            KeyCode::Char('x'),
            KeyModifiers::SHIFT | KeyModifiers::ALT,
        );
        let state = ModifierState::from_event(&event);
        assert!(state.shift);
        assert!(state.alt);
        assert!(!state.ctrl);
        assert!(!state.cmd);
        assert_eq!(state.direction, None);
    }

    #[test]
    fn test_from_event_arrow() {
        let event = KeyEvent::new(KeyCode::Up, KeyModifiers::SUPER);
        let state = ModifierState::from_event(&event);
        assert!(state.cmd);
        assert_eq!(state.direction, Some(Direction::Up));
    }

    #[test]
    fn test_is_label_held() {
        let state = ModifierState {
            shift: true,
            cmd: true,
            ..ModifierState::default()
        };
        assert!(state.is_label_held("shift"));
        assert!(state.is_label_held("cmd"));
        assert!(!state.is_label_held("ctrl"));
        assert!(!state.is_label_held("alt"));
        assert!(!state.is_label_held("spacebar"));
        assert!(!state.is_label_held("q"));
    }
}
