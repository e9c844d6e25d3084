//! Arguments accepted wherever a codepoint sequence is expected.

use crate::codec;
use crate::text::Text;
use crate::wide::{self, WideChar};
use std::borrow::Cow;

/// Anything that can be viewed as a sequence of codepoints.
///
/// Text values and `char` slices are borrowed as-is; UTF-8 strings and wide
/// buffers are decoded first, so comparisons are always codepoint-wise.
pub trait CodepointSeq {
    /// The codepoints of `self`.
    fn codepoints(&self) -> Cow<'_, [char]>;
}

impl CodepointSeq for Text {
    fn codepoints(&self) -> Cow<'_, [char]> {
        Cow::Borrowed(self.as_chars())
    }
}

impl CodepointSeq for [char] {
    fn codepoints(&self) -> Cow<'_, [char]> {
        Cow::Borrowed(self)
    }
}

impl<const N: usize> CodepointSeq for [char; N] {
    fn codepoints(&self) -> Cow<'_, [char]> {
        Cow::Borrowed(self)
    }
}

impl CodepointSeq for Vec<char> {
    fn codepoints(&self) -> Cow<'_, [char]> {
        Cow::Borrowed(self)
    }
}

impl CodepointSeq for char {
    fn codepoints(&self) -> Cow<'_, [char]> {
        Cow::Borrowed(std::slice::from_ref(self))
    }
}

impl CodepointSeq for str {
    fn codepoints(&self) -> Cow<'_, [char]> {
        Cow::Owned(codec::decode_utf8(self.as_bytes()))
    }
}

impl CodepointSeq for String {
    fn codepoints(&self) -> Cow<'_, [char]> {
        self.as_str().codepoints()
    }
}

impl CodepointSeq for [WideChar] {
    fn codepoints(&self) -> Cow<'_, [char]> {
        Cow::Owned(wide::decode_wide(self).codepoints)
    }
}

impl<T: CodepointSeq + ?Sized> CodepointSeq for &T {
    fn codepoints(&self) -> Cow<'_, [char]> {
        (**self).codepoints()
    }
}
