//! Carrier framing: visible prefix, boundary markers, invisible payload.
//!
//! ```text
//! [prefix][BOUNDARY][payload][BOUNDARY][suffix...]
//! ```
//!
//! The prefix is a single visible code point that gives the carrier
//! something to select and copy. The suffix is whatever trails the closing
//! boundary and is ignored.

use tracing::debug;

use crate::error::{Result, UniceptionError};

/// The code point repeated to form the boundary (U+2060 WORD JOINER).
pub const BOUNDARY_CHAR: char = '\u{2060}';

/// Three word joiners delimiting the payload on both ends.
pub const BOUNDARY: &str = "\u{2060}\u{2060}\u{2060}";

/// A carrier split into its frame parts, borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCarrier<'a> {
    /// First code point of the carrier.
    pub prefix: char,
    /// Everything strictly between the two boundaries.
    pub payload: &'a str,
    /// Everything after the closing boundary.
    pub suffix: &'a str,
}

/// Frames an encoded payload as `prefix + BOUNDARY + payload + BOUNDARY`.
///
/// A `None` prefix leaves the carrier starting with the boundary itself.
/// [`parse_carrier`] always consumes the first code point as the prefix, so
/// such a carrier cannot be parsed back; pass a prefix when the carrier is
/// meant to be decoded.
pub fn wrap(prefix: Option<char>, payload: &str) -> String {
    let mut carrier = String::with_capacity(
        prefix.map_or(0, char::len_utf8) + payload.len() + 2 * BOUNDARY.len(),
    );
    if let Some(p) = prefix {
        carrier.push(p);
    }
    carrier.push_str(BOUNDARY);
    carrier.push_str(payload);
    carrier.push_str(BOUNDARY);
    carrier
}

/// Splits a carrier into prefix, payload and suffix.
///
/// The search for the opening boundary starts after the first code point,
/// so a prefix that happens to be a word joiner never opens the frame.
pub fn parse_carrier(message: &str) -> Result<ParsedCarrier<'_>> {
    let prefix = message.chars().next().ok_or(UniceptionError::EmptyInput)?;

    let after_prefix = prefix.len_utf8();
    let open = message[after_prefix..]
        .find(BOUNDARY)
        .map(|offset| after_prefix + offset)
        .ok_or(UniceptionError::MissingBoundary)?;

    let start = open + BOUNDARY.len();
    let close = message[start..]
        .find(BOUNDARY)
        .map(|offset| start + offset)
        .ok_or(UniceptionError::MissingClosingBoundary)?;

    debug!(
        prefix = %format!("U+{:04X}", u32::from(prefix)),
        payload_start = start,
        payload_end = close,
        "parsed carrier frame"
    );

    Ok(ParsedCarrier {
        prefix,
        payload: &message[start..close],
        suffix: &message[close + BOUNDARY.len()..],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_is_three_word_joiners() {
        assert_eq!(BOUNDARY.chars().count(), 3);
        assert!(BOUNDARY.chars().all(|c| c == BOUNDARY_CHAR));
    }

    #[test]
    fn test_wrap_layout() {
        let carrier = wrap(Some('X'), "ab");
        assert_eq!(carrier, format!("X{}ab{}", BOUNDARY, BOUNDARY));
    }

    #[test]
    fn test_wrap_without_prefix() {
        assert_eq!(wrap(None, ""), format!("{}{}", BOUNDARY, BOUNDARY));
    }

    #[test]
    fn test_parse_roundtrip() {
        let carrier = wrap(Some('X'), "\u{200B}\u{200C}");
        let parsed = parse_carrier(&carrier).unwrap();
        assert_eq!(parsed.prefix, 'X');
        assert_eq!(parsed.payload, "\u{200B}\u{200C}");
        assert_eq!(parsed.suffix, "");
    }

    #[test]
    fn test_parse_with_suffix() {
        let carrier = format!("\u{2764}{}AB{}trailing junk", BOUNDARY, BOUNDARY);
        let parsed = parse_carrier(&carrier).unwrap();
        assert_eq!(parsed.prefix, '\u{2764}');
        assert_eq!(parsed.payload, "AB");
        assert_eq!(parsed.suffix, "trailing junk");
    }

    #[test]
    fn test_parse_empty_payload() {
        let carrier = wrap(Some('Z'), "");
        let parsed = parse_carrier(&carrier).unwrap();
        assert_eq!(parsed.payload, "");
    }

    #[test]
    fn test_parse_stops_at_first_closing_boundary() {
        let carrier = format!("P{b}one{b}two{b}", b = BOUNDARY);
        let parsed = parse_carrier(&carrier).unwrap();
        assert_eq!(parsed.payload, "one");
        assert_eq!(parsed.suffix, format!("two{}", BOUNDARY));
    }

    #[test]
    fn test_word_joiner_prefix_does_not_open_frame() {
        let carrier = wrap(Some(BOUNDARY_CHAR), "x");
        let parsed = parse_carrier(&carrier).unwrap();
        assert_eq!(parsed.prefix, BOUNDARY_CHAR);
        assert_eq!(parsed.payload, "x");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_carrier(""), Err(UniceptionError::EmptyInput)));
    }

    #[test]
    fn test_parse_missing_boundary() {
        assert!(matches!(
            parse_carrier("just some visible text"),
            Err(UniceptionError::MissingBoundary)
        ));
    }

    #[test]
    fn test_parse_missing_closing_boundary() {
        let carrier = format!("X{}\u{200B}\u{200C}", BOUNDARY);
        assert!(matches!(
            parse_carrier(&carrier),
            Err(UniceptionError::MissingClosingBoundary)
        ));
    }

    #[test]
    fn test_unprefixed_carrier_is_not_parseable() {
        let carrier = wrap(None, "\u{200B}\u{200C}");
        assert!(matches!(
            parse_carrier(&carrier),
            Err(UniceptionError::MissingClosingBoundary)
        ));
    }
}
