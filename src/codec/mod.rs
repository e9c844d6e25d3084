//! Stateless transcoding between codepoints and UTF-8/16/32 unit sequences.
//!
//! Every lossy decoder is total: malformed input becomes U+FFFD and scanning
//! resynchronizes, so decoding never fails. The `validate_*` functions are the
//! strict counterparts and report the offset of the first ill-formed unit.
//!
//! Unpaired surrogates are handled the same way on every path: a lone half in
//! UTF-16, a surrogate value in UTF-32 and a UTF-8 sequence whose bits spell a
//! surrogate all decode to U+FFFD. The output is always a sequence of `char`.
//!
//! # Examples
//!
//! ```
//! use unitext::codec::{decode_utf16, decode_utf8, encode_utf16};
//!
//! assert_eq!(decode_utf8(&[0xE0]), vec!['\u{FFFD}']);
//! assert_eq!(decode_utf16(&[0xD83D, 0xDE00]), vec!['\u{1F600}']);
//! assert_eq!(encode_utf16(&['\u{1F600}']), vec![0xD83D, 0xDE00]);
//! ```

mod utf16;
mod utf32;
mod utf8;

pub use utf8::{decode_utf8, decode_utf8_counted, encode_utf8, encode_utf8_into, validate_utf8};
pub use utf16::{
    decode_utf16, decode_utf16_counted, encode_utf16, encode_utf16_into, is_high_surrogate,
    is_low_surrogate, is_surrogate, validate_utf16,
};
pub use utf32::{
    decode_utf32, decode_utf32_counted, encode_utf32, encode_utf32_into, validate_utf32,
};

use crate::error::Result;
use crate::text::{EncodedViews, UnitCache};
use std::fmt;
use std::hash::Hash;

/// The codepoint substituted for undecodable input.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Output of a lossy decode together with how much of it was substituted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Decoded codepoints.
    pub codepoints: Vec<char>,
    /// Number of U+FFFD substitutions made for malformed input.
    pub replacements: usize,
}

impl Decoded {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            codepoints: Vec::with_capacity(capacity),
            replacements: 0,
        }
    }

    #[inline]
    fn push(&mut self, c: char) {
        self.codepoints.push(c);
    }

    #[inline]
    fn push_replacement(&mut self) {
        self.codepoints.push(REPLACEMENT_CHARACTER);
        self.replacements += 1;
    }

    /// True when no input had to be replaced.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.replacements == 0
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Utf8 {}
    impl Sealed for super::Utf16 {}
    impl Sealed for super::Utf32 {}
}

/// A supported encoding, selected at compile time.
///
/// The trait is sealed: [`Utf8`], [`Utf16`] and [`Utf32`] are the only
/// implementors, so asking for any other encoding does not compile.
pub trait Encoding: sealed::Sealed {
    /// Code unit of this encoding.
    type Unit: Copy + Default + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static;

    /// Human-readable encoding name.
    const NAME: &'static str;

    /// Decode `units`, counting replacements.
    fn decode_counted(units: &[Self::Unit]) -> Decoded;

    /// Append the encoding of `codepoints` to `out`.
    fn encode_into(codepoints: &[char], out: &mut Vec<Self::Unit>);

    /// Check `units` for well-formedness.
    fn validate(units: &[Self::Unit]) -> Result<()>;

    #[doc(hidden)]
    fn view(views: &EncodedViews) -> &UnitCache<Self::Unit>;

    #[doc(hidden)]
    fn view_mut(views: &mut EncodedViews) -> &mut UnitCache<Self::Unit>;

    /// Decode `units`, replacing malformed input with U+FFFD.
    #[must_use]
    fn decode(units: &[Self::Unit]) -> Vec<char> {
        Self::decode_counted(units).codepoints
    }

    /// Encode `codepoints` into a fresh buffer.
    #[must_use]
    fn encode(codepoints: &[char]) -> Vec<Self::Unit> {
        let mut out = Vec::with_capacity(codepoints.len());
        Self::encode_into(codepoints, &mut out);
        out
    }
}

/// UTF-8 encoding tag (`u8` units).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Utf8;

/// UTF-16 encoding tag (`u16` units, surrogate pairs above U+FFFF).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Utf16;

/// UTF-32 encoding tag (`u32` units).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Utf32;

impl Encoding for Utf8 {
    type Unit = u8;
    const NAME: &'static str = "UTF-8";

    fn decode_counted(units: &[u8]) -> Decoded {
        decode_utf8_counted(units)
    }

    fn encode_into(codepoints: &[char], out: &mut Vec<u8>) {
        encode_utf8_into(codepoints, out);
    }

    fn validate(units: &[u8]) -> Result<()> {
        validate_utf8(units)
    }

    fn view(views: &EncodedViews) -> &UnitCache<Self::Unit> {
        &views.utf8
    }

    fn view_mut(views: &mut EncodedViews) -> &mut UnitCache<Self::Unit> {
        &mut views.utf8
    }
}

impl Encoding for Utf16 {
    type Unit = u16;
    const NAME: &'static str = "UTF-16";

    fn decode_counted(units: &[u16]) -> Decoded {
        decode_utf16_counted(units)
    }

    fn encode_into(codepoints: &[char], out: &mut Vec<u16>) {
        encode_utf16_into(codepoints, out);
    }

    fn validate(units: &[u16]) -> Result<()> {
        validate_utf16(units)
    }

    fn view(views: &EncodedViews) -> &UnitCache<Self::Unit> {
        &views.utf16
    }

    fn view_mut(views: &mut EncodedViews) -> &mut UnitCache<Self::Unit> {
        &mut views.utf16
    }
}

impl Encoding for Utf32 {
    type Unit = u32;
    const NAME: &'static str = "UTF-32";

    fn decode_counted(units: &[u32]) -> Decoded {
        decode_utf32_counted(units)
    }

    fn encode_into(codepoints: &[char], out: &mut Vec<u32>) {
        encode_utf32_into(codepoints, out);
    }

    fn validate(units: &[u32]) -> Result<()> {
        validate_utf32(units)
    }

    fn view(views: &EncodedViews) -> &UnitCache<Self::Unit> {
        &views.utf32
    }

    fn view_mut(views: &mut EncodedViews) -> &mut UnitCache<Self::Unit> {
        &mut views.utf32
    }
}
