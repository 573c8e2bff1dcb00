//! Message encoding into invisible carriers.
//!
//! This module orchestrates the encoding process:
//! 1. Convert the plaintext to UTF-8 bytes
//! 2. Write every byte as a fixed-width digit group in the cipher's base
//! 3. Map each digit to its invisible character
//! 4. Frame the payload with the prefix and boundary markers

use tracing::debug;

use crate::cipher::{self, to_base_digits, CipherVariant};
use crate::error::Result;
use crate::text::{parse_prefix, wrap};

/// Encodes raw bytes as a string of invisible digit characters.
///
/// The output holds exactly `data.len() * cipher.digit_width()` code points,
/// all drawn from the cipher's alphabet, in byte order. Never fails; empty
/// input yields an empty string.
pub fn encode_bytes(data: &[u8], cipher: &CipherVariant) -> String {
    let base = cipher.base();
    let width = cipher.digit_width();

    let encoded: String = data
        .iter()
        .flat_map(|&byte| to_base_digits(byte, base, width))
        .map(|digit| cipher.char_for(digit))
        .collect();

    debug!(
        cipher = cipher.name(),
        bytes = data.len(),
        code_points = data.len() * width,
        "encoded payload"
    );

    encoded
}

/// Encodes text through its UTF-8 bytes.
pub fn encode_text(plaintext: &str, cipher: &CipherVariant) -> String {
    encode_bytes(plaintext.as_bytes(), cipher)
}

/// Encodes `plaintext` into a complete framed carrier.
///
/// `cipher_name` is resolved with [`cipher::lookup`] and `prefix` with
/// [`parse_prefix`]. An empty prefix produces a carrier that starts with the
/// boundary, which [`crate::decode`] cannot parse back.
///
/// # Example
///
/// ```
/// let carrier = uniception::encode("hi", "Binary Breath", "U+2764").unwrap();
/// assert!(carrier.starts_with('\u{2764}'));
/// assert_eq!(uniception::decode(&carrier, "Binary Breath").unwrap(), "hi");
/// ```
pub fn encode(plaintext: &str, cipher_name: &str, prefix: &str) -> Result<String> {
    let cipher = cipher::lookup(cipher_name)?;
    let prefix = parse_prefix(prefix)?;
    Ok(wrap(prefix, &encode_text(plaintext, cipher)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::BOUNDARY;

    #[test]
    fn test_binary_breath_vector() {
        let cipher = cipher::lookup("Binary Breath").unwrap();
        let (c0, c1) = ('\u{200B}', '\u{200C}');
        let expected: String = [c0, c1, c0, c0, c0, c0, c0, c1].iter().collect();
        assert_eq!(encode_bytes(&[65], cipher), expected);
    }

    #[test]
    fn test_hex_whisper_digits() {
        let cipher = cipher::lookup("Hex Whisper").unwrap();
        // 0x4F -> digits 4, 15
        let expected: String = ['\u{2009}', '\u{2006}'].iter().collect();
        assert_eq!(encode_bytes(&[0x4F], cipher), expected);
    }

    #[test]
    fn test_length_invariant() {
        let data = "héllo 🌍".as_bytes();
        for cipher in cipher::all() {
            let encoded = encode_bytes(data, cipher);
            assert_eq!(encoded.chars().count(), data.len() * cipher.digit_width());
            assert!(encoded.chars().all(|c| cipher.alphabet().contains(&c)));
        }
    }

    #[test]
    fn test_empty_input() {
        for cipher in cipher::all() {
            assert_eq!(encode_bytes(&[], cipher), "");
        }
    }

    #[test]
    fn test_encode_frames_payload() {
        let carrier = encode("A", "base2", "X").unwrap();
        let payload = encode_bytes(b"A", cipher::lookup("base2").unwrap());
        assert_eq!(carrier, format!("X{}{}{}", BOUNDARY, payload, BOUNDARY));
    }

    #[test]
    fn test_encode_unknown_cipher() {
        assert!(encode("hi", "Morse Murmur", "X").is_err());
    }

    #[test]
    fn test_encode_invalid_prefix() {
        assert!(encode("hi", "Hex Whisper", "U+nope").is_err());
    }
}
