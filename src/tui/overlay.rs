//! The hotkey map overlay component.
//!
//! Owns the visibility lifecycle, the tool name, and the per-event modifier
//! state, and composes the command bar, keyboard, and arrow pad widgets.

use std::collections::HashSet;

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

use crate::interpreter;
use crate::models::{CommandDescription, Direction, KeyboardLayout, ModifierState};
use crate::tui::{ArrowPad, CommandBar, Component, KeyboardWidget, Theme};

/// Width reserved for the arrow pad column.
const ARROW_PAD_WIDTH: u16 = 14;

/// The on-screen keyboard overlay.
///
/// While hidden the component is detached: key events are ignored and
/// nothing is drawn, so no listener state survives `hide()`. The only state
/// carried between events is the last arrow direction.
pub struct HotkeyMap {
    layout: KeyboardLayout,
    tool: String,
    used_keys: HashSet<String>,
    hotkey: Option<String>,
    visible: bool,
    state: ModifierState,
    pressed_arrow: Option<Direction>,
    description: Option<CommandDescription>,
}

impl HotkeyMap {
    /// Creates a hidden overlay for the standard layout.
    #[must_use]
    pub fn new(tool: impl Into<String>) -> Self {
        Self {
            layout: KeyboardLayout::standard(),
            tool: tool.into(),
            used_keys: HashSet::new(),
            hotkey: None,
            visible: false,
            state: ModifierState::default(),
            pressed_arrow: None,
            description: None,
        }
    }

    /// Replaces the set of keys rendered as relevant to the current tool.
    #[must_use]
    pub fn with_used_keys<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.used_keys = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Begin listening and become visible.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Stop listening and become hidden.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Toggle between shown and hidden.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Whether the overlay is currently shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// The tool name interpolated into the command sentence.
    #[must_use]
    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Sets the tool name.
    pub fn set_tool(&mut self, tool: impl Into<String>) {
        self.tool = tool.into();
    }

    /// Sets or clears the emphasized hotkey label.
    pub fn set_hotkey(&mut self, label: Option<&str>) {
        self.hotkey = label.map(str::to_string);
    }

    /// The latest interpreted command, if any key event has been seen.
    #[must_use]
    pub const fn description(&self) -> Option<&CommandDescription> {
        self.description.as_ref()
    }

    /// The current modifier state.
    #[must_use]
    pub const fn state(&self) -> &ModifierState {
        &self.state
    }

    /// The command sentence currently displayed.
    #[must_use]
    pub fn command_text(&self) -> String {
        match &self.description {
            Some(description) => interpreter::format(description, &self.tool),
            None => interpreter::placeholder(&self.tool),
        }
    }

    /// Processes one key event while visible.
    ///
    /// Builds a fresh snapshot, carries the previous arrow direction when
    /// the event has none, and re-interprets. Hidden overlays ignore events
    /// entirely.
    pub fn handle_key(&mut self, event: &KeyEvent) {
        if !self.visible {
            return;
        }

        let snapshot = ModifierState::from_event(event);
        self.pressed_arrow = snapshot.direction;
        self.state = snapshot.with_direction(snapshot.direction.or(self.state.direction));
        self.description = Some(interpreter::interpret(&self.state));
    }

    /// Renders the overlay: command bar on top, keyboard card with the
    /// arrow pad below. No-op while hidden.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        if !self.visible {
            return;
        }

        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(10)])
            .split(area);

        CommandBar::render(f, chunks[0], self.description.as_ref(), &self.tool, theme);

        let card = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let card_inner = card.inner(chunks[1]);
        f.render_widget(card, chunks[1]);

        let columns = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(ARROW_PAD_WIDTH)])
            .split(card_inner);

        KeyboardWidget::render(
            f,
            columns[0],
            &self.layout,
            &self.state,
            &self.used_keys,
            self.hotkey.as_deref(),
            theme,
        );

        // Bottom-align the pad so the arrows sit where they do on a real
        // board.
        let pad_height = ArrowPad::required_height();
        let pad_area = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(pad_height)])
            .split(columns[1])[1];
        ArrowPad::render(f, pad_area, self.pressed_arrow, theme);
    }
}

impl Component for HotkeyMap {
    type Event = CommandDescription;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        if !self.visible {
            return None;
        }
        self.handle_key(&key);
        self.description
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        HotkeyMap::render(self, f, area, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_starts_hidden_with_placeholder() {
        let overlay = HotkeyMap::new("margin");
        assert!(!overlay.is_visible());
        assert_eq!(overlay.description(), None);
        assert_eq!(overlay.command_text(), "[alt/opt] margin to [arrow key] by 1");
    }

    #[test]
    fn test_hidden_ignores_events() {
        let mut overlay = HotkeyMap::new("margin");
        overlay.handle_key(&key(KeyCode::Up, KeyModifiers::SHIFT));
        assert_eq!(overlay.description(), None);
        assert_eq!(*overlay.state(), ModifierState::default());
    }

    #[test]
    fn test_show_then_interpret() {
        let mut overlay = HotkeyMap::new("margin");
        overlay.show();
        overlay.handle_key(&key(KeyCode::Up, KeyModifiers::SHIFT | KeyModifiers::ALT));
        assert_eq!(overlay.command_text(), "Subtract margin from the top side by 10");
    }

    #[test]
    fn test_hide_detaches() {
        let mut overlay = HotkeyMap::new("margin");
        overlay.show();
        overlay.handle_key(&key(KeyCode::Left, KeyModifiers::NONE));
        overlay.hide();

        // Events while hidden leave the last interpretation untouched.
        overlay.handle_key(&key(KeyCode::Up, KeyModifiers::SHIFT));
        assert_eq!(overlay.command_text(), "Add margin to the left side by 1");
    }

    #[test]
    fn test_direction_carries_across_events() {
        let mut overlay = HotkeyMap::new("margin");
        overlay.show();
        overlay.handle_key(&key(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(overlay.command_text(), "Add margin to the top side by 1");

        // A bare modifier press keeps the named side but the arrow
        // highlight clears.
        overlay.handle_key(&key(KeyCode::Char('x'), KeyModifiers::SHIFT));
        assert_eq!(overlay.command_text(), "Add margin to the top side by 10");
        assert_eq!(overlay.pressed_arrow, None);

        // A new arrow replaces the carried direction.
        overlay.handle_key(&key(KeyCode::Right, KeyModifiers::NONE));
        assert_eq!(overlay.command_text(), "Add margin to the right side by 1");
        assert_eq!(overlay.pressed_arrow, Some(Direction::Right));
    }

    #[test]
    fn test_set_tool_updates_sentence() {
        let mut overlay = HotkeyMap::new("margin");
        overlay.show();
        overlay.handle_key(&key(KeyCode::Down, KeyModifiers::NONE));
        overlay.set_tool("padding");
        assert_eq!(overlay.command_text(), "Add padding to the bottom side by 1");
    }

    #[test]
    fn test_component_emits_description() {
        let mut overlay = HotkeyMap::new("margin");
        let event = key(KeyCode::Down, KeyModifiers::SUPER);

        assert_eq!(Component::handle_input(&mut overlay, event), None);

        overlay.show();
        let emitted = Component::handle_input(&mut overlay, event).expect("visible overlay emits");
        assert_eq!(emitted.target.label(), "all sides");
        assert_eq!(emitted.polarity.word(), "Subtract");
    }
}
