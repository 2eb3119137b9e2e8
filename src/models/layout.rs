//! Static keyboard layout model.
//!
//! Describes the rows, key labels, and relative visual widths of the
//! on-screen keyboard. Pure data with lookup methods; the renderer decides
//! how weights translate into terminal cells.

use std::collections::HashMap;

/// Width weight assigned to keys without an explicit override.
pub const DEFAULT_WEIGHT: u16 = 1;

/// A single row of the visual keyboard.
///
/// Row names and key labels are stable strings; highlight lookups match on
/// the exact label text (both `shift` keys share one label and light up
/// together).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRow {
    /// Stable row identifier (e.g. "num", "space")
    pub name: String,
    /// Key labels in visual order
    pub keys: Vec<String>,
}

impl KeyRow {
    /// Creates a row from a name and ordered key labels.
    pub fn new(name: impl Into<String>, keys: &[&str]) -> Self {
        Self {
            name: name.into(),
            keys: keys.iter().map(|k| (*k).to_string()).collect(),
        }
    }

    /// Number of keys in this row.
    #[must_use]
    pub const fn key_count(&self) -> usize {
        self.keys.len()
    }
}

/// The visual keyboard: ordered rows plus a sparse width-weight table.
///
/// Weights are a mapping from `(row index, key index)` to a relative width,
/// with an explicit default of [`DEFAULT_WEIGHT`] for unmapped positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardLayout {
    rows: Vec<KeyRow>,
    weights: HashMap<(usize, usize), u16>,
}

impl KeyboardLayout {
    /// Creates an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            weights: HashMap::new(),
        }
    }

    /// The standard five-row layout shown by the overlay.
    ///
    /// Rows, labels, and width overrides reproduce the shipped visual model:
    /// wide `tab`/`caps`/`return`/`shift` edges and a dominant spacebar.
    #[must_use]
    pub fn standard() -> Self {
        let mut layout = Self::new();

        layout.push_row(
            KeyRow::new(
                "num",
                &[
                    "`", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "-", "=", "delete",
                ],
            ),
            &[(12, 2)],
        );
        layout.push_row(
            KeyRow::new(
                "tab",
                &[
                    "tab", "q", "w", "e", "r", "t", "y", "u", "i", "o", "p", "[", "]", "\\",
                ],
            ),
            &[(0, 2)],
        );
        layout.push_row(
            KeyRow::new(
                "caps",
                &[
                    "caps", "a", "s", "d", "f", "g", "h", "j", "k", "l", "'", "return",
                ],
            ),
            &[(0, 3), (11, 3)],
        );
        layout.push_row(
            KeyRow::new(
                "shift",
                &[
                    "shift", "z", "x", "c", "v", "b", "n", "m", ",", ".", "/", "shift",
                ],
            ),
            &[(0, 6), (11, 6)],
        );
        layout.push_row(
            KeyRow::new(
                "space",
                &["ctrl", "alt", "cmd", "spacebar", "cmd", "alt", "ctrl"],
            ),
            &[(3, 10)],
        );

        layout
    }

    /// Appends a row together with its sparse weight overrides.
    pub fn push_row(&mut self, row: KeyRow, overrides: &[(usize, u16)]) {
        let row_index = self.rows.len();
        for &(key_index, weight) in overrides {
            self.weights.insert((row_index, key_index), weight);
        }
        self.rows.push(row);
    }

    /// All rows in visual order.
    #[must_use]
    pub fn rows(&self) -> &[KeyRow] {
        &self.rows
    }

    /// Width weight for the key at `(row_index, key_index)`.
    ///
    /// Positions without an override weigh [`DEFAULT_WEIGHT`].
    #[must_use]
    pub fn weight(&self, row_index: usize, key_index: usize) -> u16 {
        self.weights
            .get(&(row_index, key_index))
            .copied()
            .unwrap_or(DEFAULT_WEIGHT)
    }

    /// Whether any row contains a key with this label.
    #[must_use]
    pub fn contains_key(&self, label: &str) -> bool {
        self.rows
            .iter()
            .any(|row| row.keys.iter().any(|k| k == label))
    }

    /// Total number of keys across all rows.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.rows.iter().map(KeyRow::key_count).sum()
    }
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self::standard()
    }
}
