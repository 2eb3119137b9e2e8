//! Application-wide constants.

/// The display name of the application (human-readable).
pub const APP_NAME: &str = "Hotkey Map";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "hotkeymap";
