//! Command sentence widget.
//!
//! Renders the interpreted command as a styled sentence, one span per
//! fragment so each role gets its own color.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::CommandDescription;
use crate::tui::Theme;

/// Command bar widget.
pub struct CommandBar;

impl CommandBar {
    /// Render the sentence for `description`, or the pre-event placeholder
    /// when no key event has arrived yet.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        description: Option<&CommandDescription>,
        tool: &str,
        theme: &Theme,
    ) {
        let line = match description {
            Some(description) => Self::sentence_line(description, tool, theme),
            None => Self::placeholder_line(tool, theme),
        };

        let bar = Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(Style::default().bg(theme.background));
        f.render_widget(bar, area);
    }

    /// Sentence spans: polarity and magnitude accented, tool in primary,
    /// connectives muted, side in its own tone.
    fn sentence_line(
        description: &CommandDescription,
        tool: &str,
        theme: &Theme,
    ) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                description.polarity.word(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(tool.to_string(), Style::default().fg(theme.primary)),
            Span::styled(
                format!(" {} ", description.preposition.word()),
                Style::default().fg(theme.text_muted),
            ),
            Span::styled(
                description.target.label(),
                Style::default().fg(theme.success),
            ),
            Span::styled(" by ", Style::default().fg(theme.text_muted)),
            Span::styled(
                description.magnitude.to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }

    /// The initial sentence before any key event: the polarity slot shows
    /// the `[alt/opt]` hint.
    fn placeholder_line(tool: &str, theme: &Theme) -> Line<'static> {
        Line::from(vec![
            Span::styled("[alt/opt]", Style::default().fg(theme.text_muted)),
            Span::raw(" "),
            Span::styled(tool.to_string(), Style::default().fg(theme.primary)),
            Span::styled(" to ", Style::default().fg(theme.text_muted)),
            Span::styled("[arrow key]", Style::default().fg(theme.text_muted)),
            Span::styled(" by ", Style::default().fg(theme.text_muted)),
            Span::styled("1", Style::default().fg(theme.text_muted)),
        ])
    }
}
