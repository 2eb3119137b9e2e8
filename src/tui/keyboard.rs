//! Keyboard widget for rendering the visual keyboard layout.

use std::collections::HashSet;

use ratatui::{
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{KeyboardLayout, ModifierState};
use crate::tui::Theme;

/// Terminal lines per key row (label line plus borders).
const KEY_ROW_HEIGHT: u16 = 3;

/// Keyboard widget renders the layout rows with highlight styling.
///
/// Highlight precedence per key: pressed, then the emphasized hotkey, then
/// membership in the used set.
pub struct KeyboardWidget;

impl KeyboardWidget {
    /// Total height the widget needs for a layout.
    #[must_use]
    pub fn required_height(layout: &KeyboardLayout) -> u16 {
        layout.rows().len() as u16 * KEY_ROW_HEIGHT
    }

    /// Render the keyboard into `area`.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        layout: &KeyboardLayout,
        state: &ModifierState,
        used_keys: &HashSet<String>,
        hotkey: Option<&str>,
        theme: &Theme,
    ) {
        let row_areas = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints(vec![Constraint::Length(KEY_ROW_HEIGHT); layout.rows().len()])
            .split(area);

        for (row_index, row) in layout.rows().iter().enumerate() {
            // Width weights become proportional fills so wide keys stay
            // wide at any terminal size.
            let constraints: Vec<Constraint> = (0..row.key_count())
                .map(|key_index| Constraint::Fill(layout.weight(row_index, key_index)))
                .collect();

            let key_areas = Layout::default()
                .direction(LayoutDirection::Horizontal)
                .constraints(constraints)
                .split(row_areas[row_index]);

            for (key_index, label) in row.keys.iter().enumerate() {
                Self::render_key(
                    f,
                    key_areas[key_index],
                    label,
                    state.is_label_held(label),
                    hotkey == Some(label.as_str()),
                    used_keys.contains(label),
                    theme,
                );
            }
        }
    }

    /// Render a single key cap.
    fn render_key(
        f: &mut Frame,
        area: Rect,
        label: &str,
        pressed: bool,
        is_hotkey: bool,
        used: bool,
        theme: &Theme,
    ) {
        let (fg, border, bg, bold) = if pressed {
            (theme.accent, theme.accent, theme.highlight_bg, true)
        } else if is_hotkey {
            (theme.active, theme.active, theme.surface, true)
        } else if used {
            (theme.primary, theme.text_muted, theme.surface, true)
        } else {
            (theme.inactive, theme.text_muted, theme.surface, false)
        };

        let mut label_style = Style::default().fg(fg).bg(bg);
        if bold {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }

        let cell = Paragraph::new(Span::styled(label.to_string(), label_style))
            .alignment(Alignment::Center)
            .style(Style::default().bg(bg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        f.render_widget(cell, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_height() {
        let layout = KeyboardLayout::standard();
        assert_eq!(KeyboardWidget::required_height(&layout), 15);
    }
}
