//! Parsing of the caller-supplied visible prefix.

use crate::error::{Result, UniceptionError};

/// Resolves prefix text into the code point placed before the first boundary.
///
/// - `U+2764` / `u+2764`: the code point with that hexadecimal value
/// - any other text: its first code point, verbatim
/// - empty text: no prefix
pub fn parse_prefix(input: &str) -> Result<Option<char>> {
    let hex = match input.get(..2) {
        Some(marker) if marker.eq_ignore_ascii_case("U+") => &input[2..],
        _ => return Ok(input.chars().next()),
    };

    let invalid = |reason: &str| UniceptionError::InvalidPrefix {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let code = u32::from_str_radix(hex, 16)
        .map_err(|_| invalid("could not parse the hexadecimal value"))?;

    char::from_u32(code)
        .map(Some)
        .ok_or_else(|| invalid("not a Unicode scalar value"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_point_notation() {
        assert_eq!(parse_prefix("U+2764").unwrap(), Some('\u{2764}'));
        assert_eq!(parse_prefix("u+1F600").unwrap(), Some('\u{1F600}'));
        assert_eq!(parse_prefix("U+41").unwrap(), Some('A'));
    }

    #[test]
    fn test_first_code_point_verbatim() {
        assert_eq!(parse_prefix("hello").unwrap(), Some('h'));
        assert_eq!(parse_prefix("\u{2764}\u{FE0F}").unwrap(), Some('\u{2764}'));
        assert_eq!(parse_prefix("U").unwrap(), Some('U'));
        assert_eq!(parse_prefix(" x").unwrap(), Some(' '));
    }

    #[test]
    fn test_empty_prefix() {
        assert_eq!(parse_prefix("").unwrap(), None);
    }

    #[test]
    fn test_multibyte_first_char_is_not_sliced() {
        // "é" is two bytes; the marker check must not split it
        assert_eq!(parse_prefix("é+").unwrap(), Some('é'));
    }

    #[test]
    fn test_invalid_hex() {
        for input in ["U+", "U+zz", "U+-1", "U+ 41"] {
            assert!(
                matches!(parse_prefix(input), Err(UniceptionError::InvalidPrefix { .. })),
                "{}",
                input
            );
        }
    }

    #[test]
    fn test_not_a_scalar_value() {
        for input in ["U+D800", "U+110000", "U+FFFFFFFF"] {
            assert!(matches!(
                parse_prefix(input),
                Err(UniceptionError::InvalidPrefix { .. })
            ));
        }
    }
}
