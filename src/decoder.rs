//! Message decoding from invisible carriers.
//!
//! The carrier does not record which cipher produced it. Decoding with a
//! different cipher than the one used for encoding yields either an error
//! (unexpected character, bad length, invalid UTF-8) or garbage text; the
//! caller is responsible for agreeing on the cipher out of band.

use tracing::debug;

use crate::cipher::{self, from_base_digits, CipherVariant};
use crate::error::{Result, UniceptionError};
use crate::text::parse_carrier;

/// Decodes a payload of invisible digit characters back into bytes.
///
/// Fails on the first character outside the cipher's alphabet, when the
/// digit count is not a multiple of the digit width, or when a digit group
/// recomposes to a value above 255.
pub fn decode_to_bytes(encoded: &str, cipher: &CipherVariant) -> Result<Vec<u8>> {
    let base = cipher.base();
    let width = cipher.digit_width();

    let digits = encoded
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            cipher
                .digit_for(ch)
                .ok_or(UniceptionError::UnexpectedCharacter {
                    ch,
                    code: u32::from(ch),
                    position,
                    cipher: cipher.name(),
                })
        })
        .collect::<Result<Vec<u8>>>()
        .inspect_err(|e| debug!(cipher = cipher.name(), error = %e, "payload rejected"))?;

    if digits.len() % width != 0 {
        debug!(cipher = cipher.name(), digits = digits.len(), width, "payload length mismatch");
        return Err(UniceptionError::LengthMismatch {
            digits: digits.len(),
            width,
        });
    }

    let bytes = digits
        .chunks(width)
        .enumerate()
        .map(|(chunk, group)| {
            let value = from_base_digits(group, base);
            u8::try_from(value).map_err(|_| UniceptionError::ByteOutOfRange { chunk, value })
        })
        .collect::<Result<Vec<u8>>>()?;

    debug!(
        cipher = cipher.name(),
        code_points = digits.len(),
        bytes = bytes.len(),
        "decoded payload"
    );

    Ok(bytes)
}

/// Decodes a payload and interprets the bytes as UTF-8.
///
/// Invalid UTF-8 is reported as [`UniceptionError::TextDecoding`], never
/// replaced lossily.
pub fn decode_text(encoded: &str, cipher: &CipherVariant) -> Result<String> {
    let bytes = decode_to_bytes(encoded, cipher)?;
    Ok(String::from_utf8(bytes)?)
}

/// Extracts and decodes the hidden message of a framed carrier.
///
/// `cipher_name` must name the cipher the carrier was encoded with.
pub fn decode(carrier: &str, cipher_name: &str) -> Result<String> {
    let cipher = cipher::lookup(cipher_name)?;
    let parsed = parse_carrier(carrier)?;
    decode_text(parsed.payload, cipher)
}
