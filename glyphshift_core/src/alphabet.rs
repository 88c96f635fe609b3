//! Single-character rotation alphabets.
//!
//! Every variant maps one character, a signed offset and its position to
//! exactly one output character. Digits wrap modulo 10 and letters modulo 26
//! (modulo 6 for the hex letters `a-f`/`A-F`); the printable ASCII range
//! `0x20..=0x7E` wraps modulo 95. Characters a variant has no rule for are
//! returned unchanged.

use crate::config::Config;

const DIGIT_MODULUS: i64 = 10;
const LETTER_MODULUS: i64 = 26;
const HEX_LETTER_MODULUS: i64 = 6;
const PRINTABLE_MODULUS: i64 = 95;
const PRINTABLE_FIRST: u32 = 0x20;
const PRINTABLE_LAST: u32 = 0x7E;
const SPACE_SENTINEL: char = 'x';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationAlphabet {
    /// ASCII letters and digits; spaces become `'x'` unless ignored.
    Ascii,
    /// Digits, hex letters confined to `a-f`, rest of printable ASCII.
    Hex,
    /// Unicode digit/letter classes re-based onto ASCII, rest of printable ASCII.
    ///
    /// Classes come from `char::is_numeric`, `is_uppercase` and
    /// `is_lowercase`. These are wider than the decimal-digit and Lu/Ll
    /// categories: `'²'` and `'Ⅻ'` count as digits, and `'ª'` counts as
    /// lowercase. Every such character still lands on an ASCII digit or
    /// letter.
    Generic,
}

/// Per-character inputs shared by every position in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationParams {
    pub offset: i32,
    pub alternate: bool,
    pub ignore_space: bool,
}

impl RotationParams {
    pub const fn new(offset: i32) -> Self {
        Self {
            offset,
            alternate: false,
            ignore_space: false,
        }
    }

    pub const fn with_alternate(mut self, alternate: bool) -> Self {
        self.alternate = alternate;
        self
    }

    pub const fn with_ignore_space(mut self, ignore_space: bool) -> Self {
        self.ignore_space = ignore_space;
        self
    }

    pub const fn reversed(self) -> Self {
        Self {
            offset: -self.offset,
            ..self
        }
    }
}

impl From<&Config> for RotationParams {
    fn from(config: &Config) -> Self {
        Self {
            offset: config.shift,
            alternate: config.alternate,
            ignore_space: config.ignore_space,
        }
    }
}

/// Offset actually applied at `position`.
///
/// With alternation on, odd positions flip a positive offset to negative.
/// Zero and negative offsets are left as they are.
pub fn effective_offset(offset: i32, alternate: bool, position: usize) -> i32 {
    if alternate && position % 2 != 0 && offset > 0 {
        -offset
    } else {
        offset
    }
}

impl RotationAlphabet {
    /// Chooses the alphabet used by hex rotation.
    pub fn for_hex(restrict_hash_shift: bool) -> Self {
        if restrict_hash_shift {
            RotationAlphabet::Hex
        } else {
            RotationAlphabet::Generic
        }
    }

    pub fn rotate(self, ch: char, params: RotationParams, position: usize) -> char {
        let offset = i64::from(effective_offset(params.offset, params.alternate, position));
        match self {
            RotationAlphabet::Ascii => rotate_ascii(ch, offset, params.ignore_space),
            RotationAlphabet::Hex => rotate_hex(ch, offset, params.ignore_space),
            RotationAlphabet::Generic => rotate_generic(ch, offset, params.ignore_space),
        }
    }
}

fn rotate_ascii(ch: char, offset: i64, ignore_space: bool) -> char {
    match ch {
        '0'..='9' => wrap(ch, '0', DIGIT_MODULUS, offset),
        'A'..='Z' => wrap(ch, 'A', LETTER_MODULUS, offset),
        'a'..='z' => wrap(ch, 'a', LETTER_MODULUS, offset),
        ' ' if ignore_space => ' ',
        ' ' => SPACE_SENTINEL,
        _ => ch,
    }
}

fn rotate_hex(ch: char, offset: i64, ignore_space: bool) -> char {
    match ch {
        '0'..='9' => wrap(ch, '0', DIGIT_MODULUS, offset),
        'a'..='f' => wrap(ch, 'a', HEX_LETTER_MODULUS, offset),
        'A'..='F' => wrap(ch, 'A', HEX_LETTER_MODULUS, offset),
        _ => rotate_printable(ch, offset, ignore_space),
    }
}

fn rotate_generic(ch: char, offset: i64, ignore_space: bool) -> char {
    if ch.is_numeric() {
        wrap(ch, '0', DIGIT_MODULUS, offset)
    } else if ch.is_uppercase() {
        wrap(ch, 'A', LETTER_MODULUS, offset)
    } else if ch.is_lowercase() {
        wrap(ch, 'a', LETTER_MODULUS, offset)
    } else {
        rotate_printable(ch, offset, ignore_space)
    }
}

fn rotate_printable(ch: char, offset: i64, ignore_space: bool) -> char {
    let code = u32::from(ch);
    if !(PRINTABLE_FIRST..=PRINTABLE_LAST).contains(&code) || (ch == ' ' && ignore_space) {
        return ch;
    }
    wrap(ch, ' ', PRINTABLE_MODULUS, offset)
}

// Non-ASCII members of a class are measured from the ASCII anchor, so the
// result always lands inside `anchor..anchor + modulus`.
fn wrap(ch: char, anchor: char, modulus: i64, offset: i64) -> char {
    let distance = i64::from(u32::from(ch)) - i64::from(u32::from(anchor));
    let rotated = (distance + offset).rem_euclid(modulus);
    // `rotated` is below 95, so the sum stays inside printable ASCII.
    char::from_u32(u32::from(anchor) + rotated as u32).unwrap_or(ch)
}
