//! Integration tests for the overlay lifecycle.
//!
//! Tests the visibility lifecycle (events are only processed while shown)
//! and the carried direction signal, driving the component with real
//! crossterm key events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hotkeymap::tui::HotkeyMap;

fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

#[test]
fn overlay_starts_hidden() {
    let overlay = HotkeyMap::new("margin");
    assert!(!overlay.is_visible());
    assert!(overlay.description().is_none());
}

#[test]
fn show_hide_toggle() {
    let mut overlay = HotkeyMap::new("margin");

    overlay.show();
    assert!(overlay.is_visible());

    overlay.hide();
    assert!(!overlay.is_visible());

    overlay.toggle();
    assert!(overlay.is_visible());
    overlay.toggle();
    assert!(!overlay.is_visible());
}

#[test]
fn events_are_ignored_while_hidden() {
    let mut overlay = HotkeyMap::new("margin");
    overlay.handle_key(&key(KeyCode::Up, KeyModifiers::SHIFT));
    assert!(overlay.description().is_none());

    // Re-shown overlays process events again.
    overlay.show();
    overlay.handle_key(&key(KeyCode::Up, KeyModifiers::SHIFT));
    assert_eq!(overlay.command_text(), "Add margin to the top side by 10");
}

#[test]
fn placeholder_before_first_event() {
    let overlay = HotkeyMap::new("margin");
    assert_eq!(overlay.command_text(), "[alt/opt] margin to [arrow key] by 1");
}

#[test]
fn direction_carries_until_replaced() {
    let mut overlay = HotkeyMap::new("margin");
    overlay.show();

    overlay.handle_key(&key(KeyCode::Left, KeyModifiers::NONE));
    assert_eq!(overlay.command_text(), "Add margin to the left side by 1");

    // Pressing a plain key keeps the last direction.
    overlay.handle_key(&key(KeyCode::Char('b'), KeyModifiers::NONE));
    assert_eq!(overlay.command_text(), "Add margin to the left side by 1");

    // A different arrow replaces it.
    overlay.handle_key(&key(KeyCode::Down, KeyModifiers::NONE));
    assert_eq!(overlay.command_text(), "Add margin to the bottom side by 1");
}

#[test]
fn tool_name_is_settable() {
    let mut overlay = HotkeyMap::new("margin");
    assert_eq!(overlay.tool(), "margin");

    overlay.set_tool("padding");
    assert_eq!(overlay.tool(), "padding");
    assert_eq!(overlay.command_text(), "[alt/opt] padding to [arrow key] by 1");
}

#[test]
fn end_to_end_shift_alt_up_sentence() {
    let mut overlay = HotkeyMap::new("margin");
    overlay.show();
    overlay.handle_key(&key(KeyCode::Up, KeyModifiers::SHIFT | KeyModifiers::ALT));
    assert_eq!(
        overlay.command_text(),
        "Subtract margin from the top side by 10"
    );
}

#[test]
fn end_to_end_cmd_down_sentence() {
    let mut overlay = HotkeyMap::new("margin");
    overlay.show();
    overlay.handle_key(&key(KeyCode::Down, KeyModifiers::SUPER));
    assert_eq!(overlay.command_text(), "Subtract margin from all sides by 1");
}

#[test]
fn cmd_overrides_a_carried_direction() {
    let mut overlay = HotkeyMap::new("margin");
    overlay.show();

    overlay.handle_key(&key(KeyCode::Up, KeyModifiers::NONE));
    overlay.handle_key(&key(KeyCode::Char('g'), KeyModifiers::SUPER));
    assert_eq!(overlay.command_text(), "Add margin to all sides by 1");

    // The carried direction is still Up underneath: releasing cmd (next
    // event without SUPER) goes back to the named side.
    overlay.handle_key(&key(KeyCode::Char('g'), KeyModifiers::NONE));
    assert_eq!(overlay.command_text(), "Add margin to the top side by 1");
}
