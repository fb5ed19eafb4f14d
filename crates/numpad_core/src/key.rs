//! Key labels of the numeric grid.

/// Label of the backspace key unless configured otherwise.
pub const DEFAULT_BACKSPACE_LABEL: &str = "⌫";

/// Label of the decimal-point key.
pub const DECIMAL_LABEL: &str = ".";

/// Standard 4x3 grid, row by row, as hosts should lay it out.
pub const KEY_LAYOUT: [[&str; 3]; 4] = [
    ["1", "2", "3"],
    ["4", "5", "6"],
    ["7", "8", "9"],
    [DECIMAL_LABEL, "0", DEFAULT_BACKSPACE_LABEL],
];

/// A decoded key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Decimal,
    /// Any other single-character label. Inserted verbatim.
    Other(char),
    Backspace,
}

impl Key {
    /// Decode a key label.
    ///
    /// A label equal to `backspace_label` is [`Key::Backspace`]; anything else
    /// is classified by its first character. Returns `None` for an empty label.
    pub fn from_label(label: &str, backspace_label: &str) -> Option<Self> {
        if label == backspace_label {
            return Some(Self::Backspace);
        }
        let ch = label.chars().next()?;
        Some(match ch {
            '0'..='9' => Self::Digit(ch),
            '.' => Self::Decimal,
            other => Self::Other(other),
        })
    }

    /// Character this key inserts, if it inserts one.
    pub fn as_char(self) -> Option<char> {
        match self {
            Self::Digit(ch) | Self::Other(ch) => Some(ch),
            Self::Decimal => Some('.'),
            Self::Backspace => None,
        }
    }
}
