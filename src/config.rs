//! Configuration management for the application.
//!
//! Loads, validates, and saves configuration in TOML format with
//! platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::models::KeyboardLayout;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Overlay configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Tool name interpolated into the command sentence
    #[serde(default = "default_tool")]
    pub tool: String,
    /// Key labels rendered as relevant to this tool's shortcuts
    #[serde(default = "default_used_keys")]
    pub used_keys: Vec<String>,
}

/// Default tool name shown in the sentence.
fn default_tool() -> String {
    "hotkeymap".to_string()
}

/// The keys the command language actually reads.
fn default_used_keys() -> Vec<String> {
    ["shift", "alt", "cmd", "spacebar"]
        .iter()
        .map(|k| (*k).to_string())
        .collect()
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            used_keys: default_used_keys(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/HotkeyMap/config.toml`
/// - macOS: `~/Library/Application Support/HotkeyMap/config.toml`
/// - Windows: `%APPDATA%\HotkeyMap\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Overlay settings
    #[serde(default)]
    pub overlay: OverlayConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("HotkeyMap");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - tool name is non-empty
    /// - every used key names a key present on the standard layout
    pub fn validate(&self) -> Result<()> {
        if self.overlay.tool.trim().is_empty() {
            anyhow::bail!("Tool name cannot be empty");
        }

        let layout = KeyboardLayout::standard();
        for label in &self.overlay.used_keys {
            if !layout.contains_key(label) {
                anyhow::bail!("Used key '{label}' does not exist on the keyboard layout");
            }
        }

        Ok(())
    }
}
