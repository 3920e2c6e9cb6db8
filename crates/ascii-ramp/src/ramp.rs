//! The character ramp: an ordered luminance-to-glyph lookup table.
//!
//! [`CharacterRamp`] quantizes an 8-bit luminance value into one of twelve
//! glyphs, ordered from visually densest (`@`, darkest) to sparsest (`!`,
//! lightest). The sequence is fixed; output parity with existing renderings
//! depends on both the characters and their order.

/// The standard 12-step ramp, darkest to lightest.
const STANDARD_RAMP: [char; 12] = ['@', '#', '$', '%', '?', '*', '+', ';', ':', ',', '.', '!'];

/// Fixed ordered sequence of characters representing increasing brightness.
///
/// A luminance value of 0 maps to the first (darkest) character, 255 to the
/// last (lightest). Quantization uses integer arithmetic,
/// `index = luma * (len - 1) / 255`, which is exactly the floored form of
/// `(luma / 255) * (len - 1)`.
///
/// There is deliberately no constructor taking arbitrary characters: the
/// ramp is a process-wide constant.
///
/// # Example
///
/// ```
/// use ascii_ramp::CharacterRamp;
///
/// let ramp = CharacterRamp::standard();
/// assert_eq!(ramp.char_for(0), '@');
/// assert_eq!(ramp.char_for(255), '!');
/// assert_eq!(ramp.len(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterRamp {
    chars: &'static [char],
}

impl CharacterRamp {
    /// The standard ramp: `@ # $ % ? * + ; : , . !`.
    #[inline]
    pub const fn standard() -> Self {
        Self {
            chars: &STANDARD_RAMP,
        }
    }

    /// Number of brightness steps in the ramp.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`; present for `len()` symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The full character sequence, darkest first.
    #[inline]
    pub fn chars(&self) -> &[char] {
        self.chars
    }

    /// Quantize an 8-bit luminance value to a ramp index.
    ///
    /// Monotonic: a brighter input never yields a smaller index. The result
    /// is always within `0..len()`.
    #[inline]
    pub fn index_for(&self, luma: u8) -> usize {
        (luma as usize * (self.chars.len() - 1)) / 255
    }

    /// Character at a ramp index, clamped to the last step.
    #[inline]
    pub fn char_at(&self, index: usize) -> char {
        self.chars[index.min(self.chars.len() - 1)]
    }

    /// Quantize a luminance value straight to its character.
    #[inline]
    pub fn char_for(&self, luma: u8) -> char {
        self.char_at(self.index_for(luma))
    }

    /// Whether a character belongs to the ramp.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

impl Default for CharacterRamp {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_sequence_and_order() {
        let ramp = CharacterRamp::standard();
        let expected: Vec<char> = "@#$%?*+;:,.!".chars().collect();
        assert_eq!(ramp.chars(), expected.as_slice());
        assert_eq!(ramp.len(), 12);
    }

    #[test]
    fn test_boundary_values() {
        let ramp = CharacterRamp::standard();
        assert_eq!(ramp.index_for(0), 0, "black must hit the darkest step");
        assert_eq!(ramp.char_for(0), '@');
        assert_eq!(ramp.index_for(255), 11, "white must hit the lightest step");
        assert_eq!(ramp.char_for(255), '!');
    }

    #[test]
    fn test_index_monotonic_and_in_range() {
        let ramp = CharacterRamp::standard();
        let mut previous = 0;
        for v in 0..=255u8 {
            let idx = ramp.index_for(v);
            assert!(idx < ramp.len(), "index {} out of range for luma {}", idx, v);
            assert!(
                idx >= previous,
                "index decreased from {} to {} at luma {}",
                previous,
                idx,
                v
            );
            previous = idx;
        }
    }

    #[test]
    fn test_quantization_matches_floored_normalization() {
        // index = floor((v / 255) * (len - 1)) computed in floating point
        // must agree with the integer form for every input value.
        let ramp = CharacterRamp::standard();
        for v in 0..=255u8 {
            let float_idx = ((v as f64 / 255.0) * (ramp.len() - 1) as f64) as usize;
            assert_eq!(
                ramp.index_for(v),
                float_idx,
                "integer and float quantization diverge at luma {}",
                v
            );
        }
    }

    #[test]
    fn test_mid_gray_lands_mid_ramp() {
        let ramp = CharacterRamp::standard();
        // 128 * 11 / 255 = 5
        assert_eq!(ramp.index_for(128), 5);
        assert_eq!(ramp.char_for(128), '*');
    }

    #[test]
    fn test_char_at_clamps() {
        let ramp = CharacterRamp::standard();
        assert_eq!(ramp.char_at(11), '!');
        assert_eq!(ramp.char_at(500), '!');
    }

    #[test]
    fn test_contains() {
        let ramp = CharacterRamp::standard();
        assert!(ramp.contains('@'));
        assert!(ramp.contains('!'));
        assert!(!ramp.contains(' '));
        assert!(!ramp.contains('a'));
    }
}
