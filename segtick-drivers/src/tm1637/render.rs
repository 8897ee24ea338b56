//! Segment rendering helpers

use heapless::Vec;
use segtick_protocol::commands::DISPLAY_REGISTERS;
use segtick_protocol::digits::BLANK;
use segtick_protocol::encode_digit;

/// Segment bytes for every display position
pub type Segments = Vec<u8, { DISPLAY_REGISTERS as usize }>;

/// Encode decimal digits; values above 9 render blank
pub fn digits(values: &[u8]) -> Segments {
    values
        .iter()
        .take(DISPLAY_REGISTERS as usize)
        .map(|&d| encode_digit(d).unwrap_or(BLANK))
        .collect()
}

/// Right-aligned decimal rendering of `value` over `width` positions
///
/// Leading positions are blank. A value wider than the display keeps its
/// least significant digits. `width` is capped at the register count.
pub fn number(value: u32, width: u8) -> Segments {
    let width = width.min(DISPLAY_REGISTERS) as usize;
    let mut out: Segments = core::iter::repeat(BLANK).take(width).collect();

    let mut rest = value;
    for slot in out.iter_mut().rev() {
        *slot = encode_digit((rest % 10) as u8).unwrap_or(BLANK);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    out
}
