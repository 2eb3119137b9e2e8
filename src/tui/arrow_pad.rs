//! Arrow key pad widget.

use ratatui::{
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Direction;
use crate::tui::Theme;

/// Lines per arrow cell.
const CELL_HEIGHT: u16 = 3;

/// The inverted-T arrow pad next to the keyboard.
///
/// Every arrow renders in the used style since all four belong to the
/// tool's shortcut set; the one matching the latest event lights up as
/// pressed.
pub struct ArrowPad;

impl ArrowPad {
    /// Height of the two-row pad.
    #[must_use]
    pub const fn required_height() -> u16 {
        CELL_HEIGHT * 2
    }

    /// Render the pad into `area`.
    pub fn render(f: &mut Frame, area: Rect, pressed: Option<Direction>, theme: &Theme) {
        let rows = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Length(CELL_HEIGHT), Constraint::Length(CELL_HEIGHT)])
            .split(area);

        let top = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Fill(1); 3])
            .split(rows[0]);
        let bottom = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Fill(1); 3])
            .split(rows[1]);

        Self::render_arrow(f, top[1], Direction::Up, pressed, theme);
        Self::render_arrow(f, bottom[0], Direction::Left, pressed, theme);
        Self::render_arrow(f, bottom[1], Direction::Down, pressed, theme);
        Self::render_arrow(f, bottom[2], Direction::Right, pressed, theme);
    }

    fn render_arrow(
        f: &mut Frame,
        area: Rect,
        direction: Direction,
        pressed: Option<Direction>,
        theme: &Theme,
    ) {
        let is_pressed = pressed == Some(direction);
        let (fg, border, bg) = if is_pressed {
            (theme.accent, theme.accent, theme.highlight_bg)
        } else {
            (theme.primary, theme.text_muted, theme.surface)
        };

        let cell = Paragraph::new(Span::styled(
            direction.glyph(),
            Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
        ))
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
