//! Terminal user interface: theme, widgets, and the hosting event loop.
//!
//! The overlay component lives in [`overlay`]; this module owns terminal
//! setup/teardown and the demo loop that feeds it key events.

pub mod arrow_pad;
pub mod command_bar;
pub mod component;
pub mod keyboard;
pub mod overlay;
pub mod theme;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEventKind, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};

use crate::constants::APP_NAME;

// Re-export TUI components
pub use arrow_pad::ArrowPad;
pub use command_bar::CommandBar;
pub use component::Component;
pub use keyboard::KeyboardWidget;
pub use overlay::HotkeyMap;
pub use theme::Theme;

/// Initialize the terminal for the overlay.
///
/// Raw mode plus alternate screen, and the enhanced keyboard protocol where
/// the terminal supports it — without it, terminals report neither bare
/// modifier presses nor the cmd/super flag, both of which this overlay
/// exists to visualize.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    if supports_keyboard_enhancement().unwrap_or(false) {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )
        .context("Failed to enable keyboard enhancement")?;
    }

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to its normal state.
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    if supports_keyboard_enhancement().unwrap_or(false) {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
            .context("Failed to disable keyboard enhancement")?;
    }
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop.
///
/// Esc quits, F1 toggles the overlay; every other press is forwarded to the
/// overlay. Neither control key appears on the visual layout, so they never
/// collide with visualized keys.
pub fn run_tui(
    overlay: &mut HotkeyMap,
    theme: &Theme,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, overlay, theme))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                    KeyCode::Esc => break,
                    KeyCode::F(1) => overlay.toggle(),
                    _ => {
                        overlay.handle_key(&key);
                    }
                },
                Event::Resize(_, _) => {
                    // Re-render on next loop
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Render one frame: title line, overlay area, help line.
fn render(f: &mut Frame, overlay: &HotkeyMap, theme: &Theme) {
    // Fill the screen with the theme background so terminal defaults never
    // bleed through.
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(1), // Title line
            Constraint::Min(12),   // Overlay
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_title_line(f, chunks[0], overlay, theme);

    if overlay.is_visible() {
        overlay.render(f, chunks[1], theme);
    } else {
        render_hidden_hint(f, chunks[1], theme);
    }

    render_help_line(f, chunks[2], theme);
}

fn render_title_line(f: &mut Frame, area: Rect, overlay: &HotkeyMap, theme: &Theme) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {APP_NAME} "),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {}", overlay.tool()),
            Style::default().fg(theme.text_secondary),
        ),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn render_hidden_hint(f: &mut Frame, area: Rect, theme: &Theme) {
    let hint = Paragraph::new(Span::styled(
        "overlay hidden (press F1 to show)",
        Style::default().fg(theme.text_muted),
    ))
    .alignment(Alignment::Center);
    f.render_widget(hint, area);
}

fn render_help_line(f: &mut Frame, area: Rect, theme: &Theme) {
    let help = Line::from(vec![
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::styled(" quit  ", Style::default().fg(theme.text_muted)),
        Span::styled("F1", Style::default().fg(theme.accent)),
        Span::styled(" show/hide", Style::default().fg(theme.text_muted)),
    ]);
    f.render_widget(Paragraph::new(help), area);
}
