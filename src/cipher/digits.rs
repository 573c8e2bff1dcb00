//! Positional base conversion between bytes and fixed-width digit groups.
//!
//! Every byte is written as exactly [`digits_per_byte`] digits, most
//! significant first and left-padded with zeros, so a payload can be split
//! back into bytes without any separators.

/// Number of base-`base` digits needed to represent one byte.
///
/// This is `ceil(8 / log2(base))`, computed exactly as the smallest width
/// `w` with `base^w >= 256`: 2 for base 16, 3 for base 8, 4 for base 4 and
/// 8 for base 2.
pub fn digits_per_byte(base: u32) -> usize {
    debug_assert!(base >= 2, "base must be at least 2");

    let mut width = 0;
    let mut capacity: u32 = 1;
    while capacity < 256 {
        capacity *= base;
        width += 1;
    }
    width
}

/// Converts a byte into exactly `width` digits in `base`, most significant first.
///
/// Positions left over once the value is exhausted stay zero, which
/// left-pads the result.
pub fn to_base_digits(byte: u8, base: u32, width: usize) -> Vec<u8> {
    let mut digits = vec![0u8; width];
    let mut n = u32::from(byte);

    for slot in digits.iter_mut().rev() {
        if n == 0 {
            break;
        }
        *slot = (n % base) as u8;
        n /= base;
    }

    digits
}

/// Recomposes a digit group (most significant first) into its value.
///
/// The result is a `u32` because a group of valid digits can exceed 255
/// for bases whose width overshoots a byte (e.g. `777` in base 8).
pub fn from_base_digits(digits: &[u8], base: u32) -> u32 {
    digits
        .iter()
        .fold(0u32, |value, &digit| value * base + u32::from(digit))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASES: [u32; 4] = [16, 8, 4, 2];

    #[test]
    fn test_digits_per_byte() {
        assert_eq!(digits_per_byte(16), 2);
        assert_eq!(digits_per_byte(8), 3);
        assert_eq!(digits_per_byte(4), 4);
        assert_eq!(digits_per_byte(2), 8);
    }

    #[test]
    fn test_digits_per_byte_matches_log_formula() {
        for base in BASES {
            let expected = (8.0 / f64::from(base).log2()).ceil() as usize;
            assert_eq!(digits_per_byte(base), expected, "base {}", base);
        }
    }

    #[test]
    fn test_binary_digits_of_a() {
        assert_eq!(to_base_digits(65, 2, 8), vec![0, 1, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_zero_is_all_zero_digits() {
        for base in BASES {
            let width = digits_per_byte(base);
            assert_eq!(to_base_digits(0, base, width), vec![0; width]);
        }
    }

    #[test]
    fn test_max_byte() {
        assert_eq!(to_base_digits(255, 16, 2), vec![15, 15]);
        assert_eq!(to_base_digits(255, 8, 3), vec![3, 7, 7]);
        assert_eq!(to_base_digits(255, 4, 4), vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_every_byte_recomposes_in_every_base() {
        for base in BASES {
            let width = digits_per_byte(base);
            for byte in 0..=255u8 {
                let digits = to_base_digits(byte, base, width);
                assert_eq!(digits.len(), width);
                assert!(digits.iter().all(|&d| u32::from(d) < base));
                assert_eq!(from_base_digits(&digits, base), u32::from(byte));
            }
        }
    }

    #[test]
    fn test_from_base_digits_can_exceed_a_byte() {
        assert_eq!(from_base_digits(&[7, 7, 7], 8), 511);
    }
}
