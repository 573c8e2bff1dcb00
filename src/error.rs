//! Codec error types.

use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors that can occur while encoding, framing, or decoding a carrier.
///
/// Every error is local to the call that produced it; the codec never
/// mutates shared state, so callers can retry with corrected input.
#[derive(Error, Debug)]
pub enum UniceptionError {
    /// Cipher lookup failed.
    #[error("Unknown cipher: '{0}' (run `uniception ciphers` to list them)")]
    UnknownCipher(String),

    /// Payload contains a character outside the active alphabet.
    #[error(
        "Unexpected character {ch:?} (U+{code:04X}) at position {position} \
         while decoding with cipher '{cipher}'"
    )]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Its code point value.
        code: u32,
        /// Code point offset inside the payload.
        position: usize,
        /// Name of the cipher used for decoding.
        cipher: &'static str,
    },

    /// Digit count is not a multiple of the cipher's digit width.
    #[error("Encoded data length {digits} is not divisible by {width} digits per byte")]
    LengthMismatch {
        /// Number of digits in the payload.
        digits: usize,
        /// Digits per byte for the active cipher.
        width: usize,
    },

    /// A digit group recomposed to a value that does not fit in a byte.
    #[error("Digit group {chunk} recomposes to {value}, which does not fit in a byte")]
    ByteOutOfRange {
        /// Index of the digit group inside the payload.
        chunk: usize,
        /// The recomposed value.
        value: u32,
    },

    #[error("Empty message provided for decoding")]
    EmptyInput,

    #[error("No boundary found after prefix; cannot decode")]
    MissingBoundary,

    #[error("No closing boundary found; cannot decode")]
    MissingClosingBoundary,

    /// Recomposed bytes are not valid UTF-8 (usually the wrong cipher).
    #[error("Decoded bytes are not valid UTF-8 (wrong cipher?): {0}")]
    TextDecoding(#[from] FromUtf8Error),

    #[error("Invalid prefix '{input}': {reason}")]
    InvalidPrefix {
        /// The text the caller supplied.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, UniceptionError>;
