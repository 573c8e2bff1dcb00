//! The cipher table: four fixed numeral bases with invisible alphabets.
//!
//! Each cipher maps digit `d` to `alphabet[d]`. The alphabets share their
//! leading entries, so the smaller bases reuse the first characters of
//! Hex Whisper. Because of that overlap a carrier does not reveal which
//! cipher produced it; encoder and decoder must agree on it out of band.

pub mod digits;

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{Result, UniceptionError};

pub use digits::{digits_per_byte, from_base_digits, to_base_digits};

/// Hex Whisper digits, 0 through F.
///
/// U+2060 WORD JOINER is reserved for the boundary, so digit 3 is
/// U+FEFF ZERO WIDTH NO-BREAK SPACE.
const HEX_WHISPER: [char; 16] = [
    '\u{200B}', // ZERO WIDTH SPACE
    '\u{200C}', // ZERO WIDTH NON-JOINER
    '\u{200D}', // ZERO WIDTH JOINER
    '\u{FEFF}', // ZERO WIDTH NO-BREAK SPACE
    '\u{2009}', // THIN SPACE
    '\u{200A}', // HAIR SPACE
    '\u{202F}', // NARROW NO-BREAK SPACE
    '\u{205F}', // MEDIUM MATHEMATICAL SPACE
    '\u{2061}', // FUNCTION APPLICATION
    '\u{2062}', // INVISIBLE TIMES
    '\u{2063}', // INVISIBLE SEPARATOR
    '\u{2064}', // INVISIBLE PLUS
    '\u{2002}', // EN SPACE
    '\u{2004}', // THREE-PER-EM SPACE
    '\u{2005}', // FOUR-PER-EM SPACE
    '\u{2006}', // SIX-PER-EM SPACE
];

const OCTAL_POETRY: [char; 8] = [
    '\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}', '\u{2009}', '\u{200A}', '\u{202F}', '\u{205F}',
];

const QUATERNARY_VERSE: [char; 4] = ['\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}'];

const BINARY_BREATH: [char; 2] = ['\u{200B}', '\u{200C}'];

/// A named numeral base with its invisible digit alphabet.
pub struct CipherVariant {
    name: &'static str,
    alphabet: &'static [char],
    lookup: OnceLock<HashMap<char, u8>>,
}

impl CipherVariant {
    const fn new(name: &'static str, alphabet: &'static [char]) -> Self {
        Self {
            name,
            alphabet,
            lookup: OnceLock::new(),
        }
    }

    /// Canonical name, e.g. `Hex Whisper`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Numeral base, which is also the alphabet size.
    pub fn base(&self) -> u32 {
        self.alphabet.len() as u32
    }

    /// The digit characters, indexed by digit value.
    pub fn alphabet(&self) -> &'static [char] {
        self.alphabet
    }

    /// Digits needed to represent one byte in this cipher.
    pub fn digit_width(&self) -> usize {
        digits_per_byte(self.base())
    }

    /// Short tag such as `base16`.
    pub fn tag(&self) -> String {
        format!("base{}", self.base())
    }

    /// Name as the interactive menu showed it, e.g. `Hex Whisper (base16)`.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.tag())
    }

    /// Carrier character for a digit value.
    pub fn char_for(&self, digit: u8) -> char {
        self.alphabet[usize::from(digit)]
    }

    /// Digit value for a carrier character, or `None` if it is not in the alphabet.
    pub fn digit_for(&self, ch: char) -> Option<u8> {
        self.lookup
            .get_or_init(|| {
                self.alphabet
                    .iter()
                    .enumerate()
                    .map(|(digit, &c)| (c, digit as u8))
                    .collect()
            })
            .get(&ch)
            .copied()
    }

    fn matches(&self, position: usize, query: &str) -> bool {
        query.eq_ignore_ascii_case(self.name)
            || query.eq_ignore_ascii_case(&self.display_name())
            || query.eq_ignore_ascii_case(&self.tag())
            || query.parse::<usize>().ok() == Some(position + 1)
    }
}

impl fmt::Debug for CipherVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherVariant")
            .field("name", &self.name)
            .field("base", &self.base())
            .finish()
    }
}

impl fmt::Display for CipherVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl PartialEq for CipherVariant {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for CipherVariant {}

static CIPHERS: [CipherVariant; 4] = [
    CipherVariant::new("Hex Whisper", &HEX_WHISPER),
    CipherVariant::new("Octal Poetry", &OCTAL_POETRY),
    CipherVariant::new("Quaternary Verse", &QUATERNARY_VERSE),
    CipherVariant::new("Binary Breath", &BINARY_BREATH),
];

/// All ciphers in menu order (base 16, 8, 4, 2).
pub fn all() -> &'static [CipherVariant] {
    &CIPHERS
}

/// Looks up a cipher by name.
///
/// Accepts, case-insensitively, the canonical name (`Hex Whisper`), the
/// menu label (`Hex Whisper (base16)`), the base tag (`base16`) or the
/// 1-based menu position (`1`).
pub fn lookup(name: &str) -> Result<&'static CipherVariant> {
    let query = name.trim();
    CIPHERS
        .iter()
        .enumerate()
        .find(|(position, cipher)| cipher.matches(*position, query))
        .map(|(_, cipher)| cipher)
        .ok_or_else(|| UniceptionError::UnknownCipher(name.to_string()))
}
