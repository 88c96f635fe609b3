//! Whole-string charset checks run before any transform.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ShiftError;

static ASCII_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(CharsetMode::Ascii.pattern()).expect("ascii charset pattern"));
static HEX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(CharsetMode::Hex.pattern()).expect("hex charset pattern"));
static GENERIC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(CharsetMode::Generic.pattern()).expect("generic charset pattern"));

/// Allowed-character policy attached to each public operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharsetMode {
    /// Letters, digits and space.
    Ascii,
    /// Hex digits and ASCII whitespace.
    Hex,
    /// Letters, digits, space and a fixed punctuation set.
    Generic,
}

impl CharsetMode {
    pub const fn pattern(self) -> &'static str {
        match self {
            CharsetMode::Ascii => r"^[a-zA-Z0-9 ]+$",
            CharsetMode::Hex => r"^[a-fA-F0-9\t\n\x0C\r ]+$",
            CharsetMode::Generic => r#"^[a-zA-Z0-9!.,'"?_=\-+@#$%&() ]+$"#,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            CharsetMode::Ascii => {
                "invalid string: only letters, digits, and spaces are allowed"
            }
            CharsetMode::Hex => {
                "invalid hex string: only A-F, a-f, 0-9, and whitespace are allowed"
            }
            CharsetMode::Generic => {
                "invalid string: only letters, digits, spaces, and the symbols ! . , ' \" ? _ = - + @ # $ % & ( ) are allowed"
            }
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            CharsetMode::Ascii => &ASCII_PATTERN,
            CharsetMode::Hex => &HEX_PATTERN,
            CharsetMode::Generic => &GENERIC_PATTERN,
        }
    }

    pub fn accepts(self, input: &str) -> bool {
        self.regex().is_match(input)
    }
}

impl fmt::Display for CharsetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CharsetMode::Ascii => "ascii",
            CharsetMode::Hex => "hex",
            CharsetMode::Generic => "generic",
        };
        f.write_str(label)
    }
}

/// Rejects `input` unless every character belongs to `mode`'s set.
/// The empty string is always rejected.
pub fn validate(mode: CharsetMode, input: &str) -> Result<(), ShiftError> {
    if mode.accepts(input) {
        Ok(())
    } else {
        Err(ShiftError::InvalidInput {
            mode,
            message: mode.message(),
        })
    }
}
