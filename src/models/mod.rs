//! Data models for the keyboard layout, modifier state, and command
//! descriptions.
//!
//! Models are pure data, independent of UI and event plumbing.

pub mod command;
pub mod layout;
pub mod modifier;

// Re-export all model types
pub use command::{CommandDescription, Polarity, Preposition, TargetSide};
pub use layout::{KeyRow, KeyboardLayout, DEFAULT_WEIGHT};
pub use modifier::{Direction, ModifierState};
