//! Hotkey Map - terminal overlay for visualizing keyboard shortcut state.
//!
//! Hosts the overlay widget in a full-screen terminal session: press
//! modifier and arrow keys to see them highlighted and the resulting
//! command described.

use anyhow::Result;
use clap::Parser;

use hotkeymap::config::{Config, ThemeMode};
use hotkeymap::constants::APP_NAME;
use hotkeymap::tui::{self, HotkeyMap, Theme};

/// Hotkey Map - terminal overlay for visualizing keyboard shortcut state
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Tool name shown in the command sentence (overrides config)
    #[arg(short, long, value_name = "NAME")]
    tool: Option<String>,

    /// Theme override
    #[arg(long, value_enum, value_name = "MODE")]
    theme: Option<CliThemeMode>,
}

/// Theme choices exposed on the command line.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliThemeMode {
    Auto,
    Dark,
    Light,
}

impl From<CliThemeMode> for ThemeMode {
    fn from(mode: CliThemeMode) -> Self {
        match mode {
            CliThemeMode::Auto => Self::Auto,
            CliThemeMode::Dark => Self::Dark,
            CliThemeMode::Light => Self::Light,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: {e:#}");
        eprintln!("Falling back to default configuration.");
        Config::new()
    });

    if let Some(tool) = cli.tool {
        config.overlay.tool = tool;
    }
    if let Some(mode) = cli.theme {
        config.ui.theme_mode = mode.into();
    }
    config.validate()?;

    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let theme = Theme::from_mode(config.ui.theme_mode);
    let mut overlay =
        HotkeyMap::new(config.overlay.tool.clone()).with_used_keys(config.overlay.used_keys.clone());
    overlay.show();

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut overlay, &theme, &mut terminal);
    tui::restore_terminal(terminal)?;

    result
}
