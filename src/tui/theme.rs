//! Theme system for consistent UI colors across dark and light modes.
//!
//! Provides a centralized color palette that can follow the OS theme
//! (dark/light mode) or be pinned explicitly via configuration.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders, titles, and the tool name
    pub primary: Color,
    /// Accent color for pressed keys, the polarity word, and the magnitude
    pub accent: Color,
    /// Color for the target-side fragment of the command sentence
    pub success: Color,

    /// Primary text content color
    pub text: Color,
    /// Secondary text color for subtitles
    pub text_secondary: Color,
    /// Muted text color for connective words and help hints
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Pressed-key background color
    pub highlight_bg: Color,
    /// Key cap fill color
    pub surface: Color,

    /// Emphasized hotkey color
    pub active: Color,
    /// Label color for keys outside the used set
    pub inactive: Color,
}

impl Theme {
    /// Detects the OS theme and returns the matching palette.
    ///
    /// Falls back to the dark theme when detection fails or reports an
    /// unspecified mode.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves a configured theme mode into a palette.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark palette for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),

            active: Color::Magenta,
            inactive: Color::Gray,
        }
    }

    /// Light palette for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),  // Dark green

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),

            active: Color::Rgb(130, 0, 130),
            inactive: Color::Rgb(180, 180, 180),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
