//! Seven-segment patterns
//!
//! Bit layout of a display register (segment A is the top bar):
//! ```text
//!    ─A─
//!   F   B
//!    ─G─
//!   E   C
//!    ─D─  .DP
//! ```
//! `0bPGFE_DCBA`

/// Patterns for the digits 0-9
pub const DIGITS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

/// Decimal point (or colon, on clock modules) segment
pub const DECIMAL_POINT: u8 = 0x80;

/// Middle bar only
pub const MINUS: u8 = 0x40;

/// All segments off
pub const BLANK: u8 = 0x00;

/// Segment pattern for a decimal digit, or `None` if `digit > 9`
pub const fn encode_digit(digit: u8) -> Option<u8> {
    if digit < 10 {
        Some(DIGITS[digit as usize])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_digit() {
        assert_eq!(encode_digit(0), Some(0x3F));
        assert_eq!(encode_digit(1), Some(0x06));
        assert_eq!(encode_digit(8), Some(0x7F));
        assert_eq!(encode_digit(10), None);
    }

    #[test]
    fn test_decimal_point_is_separate_bit() {
        for pattern in DIGITS {
            assert_eq!(pattern & DECIMAL_POINT, 0);
        }
        assert_eq!(DIGITS[7] | DECIMAL_POINT, 0x87);
    }
}
