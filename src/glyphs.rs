//! Segment glyph table for the single 7-segment digit.
//!
//! Each entry is the raw 8-bit pattern shifted into the 74HC595 for one
//! digit; bit polarity is whatever the wiring wants, so the table is the
//! single source of truth for it.  `BLANK` turns every segment off.

/// Pattern that leaves the display blank (all segments off).
pub const BLANK: u8 = 0xFF;

/// Segment patterns for digits 0-9, indexed by digit.
pub const DIGITS: [u8; 10] = [
    0x11, // 0
    0xD7, // 1
    0x32, // 2
    0x92, // 3
    0xD4, // 4
    0x98, // 5
    0x18, // 6
    0xD3, // 7
    0x10, // 8
    0x90, // 9
];

/// Look up the segment pattern for `digit`.
///
/// Any value outside 0-9 maps to `BLANK` - a defined fallback, not an
/// error.
pub fn glyph(digit: u8) -> u8 {
    DIGITS.get(usize::from(digit)).copied().unwrap_or(BLANK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_glyph_per_digit() {
        assert_eq!(DIGITS.len(), 10);
        for digit in 0..10u8 {
            assert_eq!(glyph(digit), DIGITS[usize::from(digit)]);
        }
    }

    #[test]
    fn known_patterns() {
        assert_eq!(glyph(0), 0x11);
        assert_eq!(glyph(1), 0xD7);
        assert_eq!(glyph(8), 0x10);
        assert_eq!(glyph(9), 0x90);
    }

    #[test]
    fn out_of_range_maps_to_blank() {
        assert_eq!(glyph(10), BLANK);
        assert_eq!(glyph(42), BLANK);
        assert_eq!(glyph(u8::MAX), BLANK);
    }

    #[test]
    fn blank_is_distinct_from_every_digit() {
        assert!(DIGITS.iter().all(|&p| p != BLANK));
    }
}
