//! Property-based tests for the codecs.
//!
//! Uses proptest to verify invariants that must hold across all inputs,
//! including arbitrary (mostly malformed) byte and unit sequences.

use proptest::prelude::*;
use unitext::codec::{
    self, REPLACEMENT_CHARACTER, decode_utf8, decode_utf8_counted, decode_utf16, decode_utf32,
    encode_utf8, encode_utf16, encode_utf32, validate_utf8, validate_utf16,
};

// ============================================================================
// Strategies
// ============================================================================

/// Arbitrary Unicode scalar values.
fn codepoints() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(any::<char>(), 0..64)
}

/// Arbitrary bytes, biased toward UTF-8 lead and continuation patterns.
fn noisy_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            any::<u8>(),
            0x80u8..0xC0,
            0xC0u8..0xF8,
            Just(0xED),
            Just(0xF4),
        ],
        0..64,
    )
}

/// Arbitrary UTF-16 units, biased toward surrogates.
fn noisy_units() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(prop_oneof![any::<u16>(), 0xD800u16..0xE000], 0..64)
}

// ============================================================================
// Round trips
// ============================================================================

proptest! {
    #[test]
    fn utf8_round_trip(s in codepoints()) {
        prop_assert_eq!(decode_utf8(&encode_utf8(&s)), s);
    }

    #[test]
    fn utf16_round_trip(s in codepoints()) {
        prop_assert_eq!(decode_utf16(&encode_utf16(&s)), s);
    }

    #[test]
    fn utf32_round_trip(s in codepoints()) {
        prop_assert_eq!(decode_utf32(&encode_utf32(&s)), s);
    }

    /// The encoders agree with the standard library's.
    #[test]
    fn encoders_match_std(s in "\\PC{0,64}") {
        let chars: Vec<char> = s.chars().collect();
        prop_assert_eq!(encode_utf8(&chars), s.as_bytes().to_vec());
        prop_assert_eq!(encode_utf16(&chars), s.encode_utf16().collect::<Vec<_>>());
    }
}

// ============================================================================
// Malformed input
// ============================================================================

proptest! {
    /// Decoding arbitrary bytes never panics and always re-encodes to valid UTF-8.
    #[test]
    fn utf8_decode_is_total(bytes in noisy_bytes()) {
        let decoded = decode_utf8(&bytes);
        prop_assert!(String::from_utf8(encode_utf8(&decoded)).is_ok());
        prop_assert!(decoded.len() <= bytes.len());
    }

    /// Input that validates always decodes without substitution. The converse
    /// does not hold: overlong forms decode cleanly but fail validation.
    #[test]
    fn utf8_validate_implies_clean_decode(bytes in noisy_bytes()) {
        let decoded = decode_utf8_counted(&bytes);
        if validate_utf8(&bytes).is_ok() {
            prop_assert!(decoded.is_clean());
        }
        prop_assert_eq!(validate_utf8(&bytes).is_ok(), std::str::from_utf8(&bytes).is_ok());
    }

    /// Well-formed input decodes like `str::chars` with no replacements.
    #[test]
    fn utf8_valid_input_is_clean(s in "\\PC{0,64}") {
        let decoded = decode_utf8_counted(s.as_bytes());
        prop_assert!(decoded.is_clean());
        prop_assert_eq!(decoded.codepoints, s.chars().collect::<Vec<_>>());
    }

    /// Unpaired surrogates follow the same policy as `char::decode_utf16`.
    #[test]
    fn utf16_matches_std_lossy(units in noisy_units()) {
        let expected: Vec<char> = char::decode_utf16(units.iter().copied())
            .map(|r| r.unwrap_or(REPLACEMENT_CHARACTER))
            .collect();
        prop_assert_eq!(decode_utf16(&units), expected);
        prop_assert_eq!(
            validate_utf16(&units).is_ok(),
            char::decode_utf16(units.iter().copied()).all(|r| r.is_ok())
        );
    }

    /// UTF-32 decoding keeps one codepoint per unit.
    #[test]
    fn utf32_decode_preserves_length(units in prop::collection::vec(any::<u32>(), 0..64)) {
        let decoded = codec::decode_utf32_counted(&units);
        prop_assert_eq!(decoded.codepoints.len(), units.len());
        let invalid = units.iter().filter(|&&u| char::from_u32(u).is_none()).count();
        prop_assert_eq!(decoded.replacements, invalid);
    }
}
