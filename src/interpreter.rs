//! Modifier-state-to-command interpretation.
//!
//! This module holds the decision table that turns a [`ModifierState`] into
//! a [`CommandDescription`], and the sentence template that renders one for
//! display. Both are pure functions over small enumerated domains; every
//! input produces a defined output.

use crate::models::{CommandDescription, Direction, ModifierState, Polarity, Preposition, TargetSide};

/// Step size without shift.
const SMALL_STEP: u32 = 1;
/// Step size with shift held.
const LARGE_STEP: u32 = 10;

/// Interprets the current modifier state as a command description.
///
/// Rules, in evaluation order:
/// - shift selects the magnitude (10 instead of 1)
/// - alt flips polarity to Subtract and the preposition to "from"
/// - the arrow direction names the target side; cmd overrides it to all
///   sides regardless of direction
/// - cmd combined with the down arrow always means subtract-from,
///   independent of alt
#[must_use]
pub fn interpret(state: &ModifierState) -> CommandDescription {
    let magnitude = if state.shift { LARGE_STEP } else { SMALL_STEP };

    let mut polarity = if state.alt {
        Polarity::Subtract
    } else {
        Polarity::Add
    };
    let mut preposition = if state.alt {
        Preposition::From
    } else {
        Preposition::To
    };

    let target = if state.cmd {
        TargetSide::AllSides
    } else {
        match state.direction {
            Some(Direction::Up) => TargetSide::Top,
            Some(Direction::Down) => TargetSide::Bottom,
            Some(Direction::Left) => TargetSide::Left,
            Some(Direction::Right) => TargetSide::Right,
            None => TargetSide::Unset,
        }
    };

    // cmd+down collapses all sides inward: forced subtract-from even when
    // alt is not held. cmd+up has no matching force.
    if state.cmd && state.direction == Some(Direction::Down) {
        polarity = Polarity::Subtract;
        preposition = Preposition::From;
    }

    CommandDescription {
        polarity,
        preposition,
        target,
        magnitude,
    }
}

/// Renders a command description into its display sentence.
///
/// The template is fixed:
/// `<polarity> <tool> <preposition> <side> by <magnitude>`.
/// Deterministic and idempotent for identical input.
#[must_use]
pub fn format(description: &CommandDescription, tool: &str) -> String {
    format!(
        "{} {} {} {} by {}",
        description.polarity.word(),
        tool,
        description.preposition.word(),
        description.target.label(),
        description.magnitude
    )
}

/// The sentence shown before any key event arrives: the polarity slot is
/// still undecided, so it reads as a hint instead.
#[must_use]
pub fn placeholder(tool: &str) -> String {
    format!("[alt/opt] {tool} to [arrow key] by {SMALL_STEP}")
}
