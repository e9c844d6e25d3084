//! The [`Text`] value type and its editing operations.

use crate::codec::{self, Decoded, Encoding, Utf8, Utf16, Utf32};
use crate::error::{Error, Result};
use crate::event;
use crate::text::seq::CodepointSeq;
use crate::text::store::CodepointStore;
use crate::text::views::EncodedViews;
use crate::unicode::{self, Whitespace};
use crate::wide::{self, WideChar};
use std::io::{Read, Write};

/// A single Unicode scalar value.
pub type Codepoint = char;

/// Sentinel returned by searches that find nothing.
pub const NPOS: usize = usize::MAX;

/// Text stored as a sequence of decoded codepoints.
///
/// Indices count codepoints, not encoded units. Decoding from any encoding is
/// lossy-but-total: malformed input becomes U+FFFD. Encoded views are built on
/// demand and cached until the next mutation; they are not part of the value's
/// identity, and a clone starts with cold caches.
///
/// ```
/// use unitext::Text;
///
/// let mut t = Text::from("héllo 😀");
/// assert_eq!(t.len(), 7);
/// assert_eq!(t.at(6), '😀');
/// assert_eq!(t.c_str::<unitext::codec::Utf16>().len(), 9); // pair + NUL
/// ```
#[derive(Clone, Default)]
pub struct Text {
    store: CodepointStore,
    views: EncodedViews,
}

impl Text {
    /// Sentinel returned by searches that find nothing.
    pub const NPOS: usize = NPOS;

    /// Create an empty text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty text with room for `capacity` codepoints.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: CodepointStore::with_capacity(capacity),
            views: EncodedViews::new(),
        }
    }

    /// Create a text from already-decoded codepoints.
    #[must_use]
    pub fn from_chars(codepoints: &[char]) -> Self {
        Self::from_vec(codepoints.to_vec())
    }

    pub(crate) fn from_vec(codepoints: Vec<char>) -> Self {
        Self {
            store: CodepointStore::from_vec(codepoints),
            views: EncodedViews::new(),
        }
    }

    fn from_decoded(source: &str, decoded: Decoded) -> Self {
        event::report_replacements(source, decoded.replacements);
        Self::from_vec(decoded.codepoints)
    }

    /// Decode units of encoding `E`, replacing malformed input with U+FFFD.
    #[must_use]
    pub fn from_encoded<E: Encoding>(units: &[E::Unit]) -> Self {
        Self::from_decoded(E::NAME, E::decode_counted(units))
    }

    /// Decode units of encoding `E`, failing on the first malformed unit.
    pub fn from_encoded_strict<E: Encoding>(units: &[E::Unit]) -> Result<Self> {
        E::validate(units)?;
        Ok(Self::from_vec(E::decode(units)))
    }

    /// Decode UTF-8 bytes, replacing malformed sequences with U+FFFD.
    #[must_use]
    pub fn from_utf8(bytes: &[u8]) -> Self {
        Self::from_encoded::<Utf8>(bytes)
    }

    /// Decode UTF-8 bytes, failing on the first malformed sequence.
    pub fn from_utf8_strict(bytes: &[u8]) -> Result<Self> {
        Self::from_encoded_strict::<Utf8>(bytes)
    }

    /// Decode UTF-16 units, replacing unpaired surrogates with U+FFFD.
    #[must_use]
    pub fn from_utf16(units: &[u16]) -> Self {
        Self::from_encoded::<Utf16>(units)
    }

    /// Decode UTF-16 units, failing on the first unpaired surrogate.
    pub fn from_utf16_strict(units: &[u16]) -> Result<Self> {
        Self::from_encoded_strict::<Utf16>(units)
    }

    /// Decode UTF-32 units, replacing non-scalar values with U+FFFD.
    #[must_use]
    pub fn from_utf32(units: &[u32]) -> Self {
        Self::from_encoded::<Utf32>(units)
    }

    /// Decode UTF-32 units, failing on the first non-scalar value.
    pub fn from_utf32_strict(units: &[u32]) -> Result<Self> {
        Self::from_encoded_strict::<Utf32>(units)
    }

    /// Decode a whole native wide buffer, NULs included.
    #[must_use]
    pub fn from_wide(units: &[WideChar]) -> Self {
        Self::from_decoded("wide", wide::decode_wide(units))
    }

    /// Decode a native wide buffer up to its first NUL.
    #[must_use]
    pub fn from_wide_nul(units: &[WideChar]) -> Self {
        Self::from_wide(wide::until_nul(units))
    }

    /// Decode a NUL-terminated native wide string owned by foreign code.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or point to a readable, NUL-terminated `wchar_t`
    /// buffer that is not mutated during the call.
    #[allow(unsafe_code)]
    pub unsafe fn from_wide_ptr(ptr: *const WideChar) -> Result<Self> {
        // SAFETY: forwarded from the caller.
        let units = unsafe { wide::wide_slice_from_ptr(ptr) }.ok_or(Error::NullPointer)?;
        Ok(Self::from_wide(units))
    }

    /// Read all bytes from `reader` and decode them as UTF-8.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_utf8(&bytes))
    }

    /// Write the UTF-8 encoding (without terminator) to `writer`.
    pub fn write_to<W: Write>(&mut self, mut writer: W) -> Result<()> {
        writer.write_all(self.encoded::<Utf8>())?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Size and access
    // ------------------------------------------------------------------

    /// Number of codepoints.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Number of codepoints (alias of [`len`](Self::len)).
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.store.len()
    }

    /// True if the text has no codepoints.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Allocated capacity in codepoints.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// The codepoints.
    #[inline]
    #[must_use]
    pub fn as_chars(&self) -> &[char] {
        self.store.as_slice()
    }

    /// Consume the text, returning its codepoints.
    #[must_use]
    pub fn into_chars(self) -> Vec<char> {
        self.store.into_vec()
    }

    /// Mutable codepoints. Invalidates the encoded views.
    pub fn as_mut_chars(&mut self) -> &mut [char] {
        self.store.as_mut_slice()
    }

    /// Codepoint at `index`, or `'\0'` when out of range.
    #[inline]
    #[must_use]
    pub fn at(&self, index: usize) -> char {
        self.store.get(index).unwrap_or('\0')
    }

    /// Codepoint at `index`, if in range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.store.get(index)
    }

    /// Last codepoint.
    #[must_use]
    pub fn last(&self) -> Option<char> {
        self.as_chars().last().copied()
    }

    /// Mutable reference to the last codepoint.
    pub fn last_mut(&mut self) -> Option<&mut char> {
        if self.is_empty() {
            return None;
        }
        self.store.as_mut_slice().last_mut()
    }

    /// Iterate over the codepoints.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, char>> {
        self.as_chars().iter().copied()
    }

    /// Encoded view caches, for inspecting cache state.
    #[must_use]
    pub fn encoded_views(&self) -> &EncodedViews {
        &self.views
    }

    /// Mutation generation of the underlying store.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.store.generation()
    }

    /// Terminal display width under the global [`unicode::WidthMethod`].
    #[must_use]
    pub fn display_width(&self) -> usize {
        unicode::display_width(self.as_chars())
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// NUL-terminated encoding in `E`, cached until the next mutation.
    pub fn c_str<E: Encoding>(&mut self) -> &[E::Unit] {
        self.views.get::<E>(&self.store)
    }

    /// Encoding in `E` without the terminator, cached like [`c_str`](Self::c_str).
    pub fn encoded<E: Encoding>(&mut self) -> &[E::Unit] {
        let units = self.views.get::<E>(&self.store);
        &units[..units.len() - 1]
    }

    /// Fresh, unterminated encoding in `E`. Does not touch the cache.
    #[must_use]
    pub fn encode<E: Encoding>(&self) -> Vec<E::Unit> {
        E::encode(self.as_chars())
    }

    /// UTF-8 bytes.
    #[must_use]
    pub fn to_utf8(&self) -> Vec<u8> {
        self.encode::<Utf8>()
    }

    /// UTF-16 units.
    #[must_use]
    pub fn to_utf16(&self) -> Vec<u16> {
        self.encode::<Utf16>()
    }

    /// UTF-32 units.
    #[must_use]
    pub fn to_utf32(&self) -> Vec<u32> {
        self.encode::<Utf32>()
    }

    /// NUL-terminated native wide buffer.
    #[must_use]
    pub fn to_wide(&self) -> Vec<WideChar> {
        let mut out = Vec::with_capacity(self.len() + 1);
        wide::encode_wide_into(self.as_chars(), &mut out);
        out.push(0);
        out
    }

    /// Compare with a native wide buffer after decoding it.
    #[must_use]
    pub fn eq_wide(&self, units: &[WideChar]) -> bool {
        self.as_chars() == wide::decode_wide(units).codepoints.as_slice()
    }

    // ------------------------------------------------------------------
    // Appending
    // ------------------------------------------------------------------

    /// Append one codepoint.
    pub fn push(&mut self, c: char) {
        self.store.push(c);
    }

    /// Append a bare byte. Only ASCII bytes are appended; others are dropped
    /// since a lone non-ASCII byte is never a complete UTF-8 sequence.
    pub fn push_byte(&mut self, byte: u8) {
        if byte.is_ascii() {
            self.store.push(char::from(byte));
        }
    }

    /// Append a bare UTF-16 unit. A surrogate half becomes U+FFFD.
    pub fn push_utf16_unit(&mut self, unit: u16) {
        let c = char::from_u32(u32::from(unit)).unwrap_or(codec::REPLACEMENT_CHARACTER);
        self.store.push(c);
    }

    /// Append a bare native wide unit. A unit that cannot stand alone becomes
    /// U+FFFD.
    pub fn push_wide(&mut self, unit: WideChar) {
        self.store.push(wide::wide_unit_to_char(unit));
    }

    /// Append another text.
    pub fn append(&mut self, other: &Self) {
        self.store.extend_from_slice(other.as_chars());
    }

    /// Append already-decoded codepoints.
    pub fn append_chars(&mut self, codepoints: &[char]) {
        self.store.extend_from_slice(codepoints);
    }

    /// Append a string slice.
    pub fn append_str(&mut self, s: &str) {
        self.append_utf8(s.as_bytes());
    }

    /// Append decoded UTF-8 bytes.
    pub fn append_utf8(&mut self, bytes: &[u8]) {
        self.append_decoded(Utf8::NAME, codec::decode_utf8_counted(bytes));
    }

    /// Append decoded UTF-16 units.
    pub fn append_utf16(&mut self, units: &[u16]) {
        self.append_decoded(Utf16::NAME, codec::decode_utf16_counted(units));
    }

    /// Append decoded UTF-32 units.
    pub fn append_utf32(&mut self, units: &[u32]) {
        self.append_decoded(Utf32::NAME, codec::decode_utf32_counted(units));
    }

    /// Append a decoded native wide buffer.
    pub fn append_wide(&mut self, units: &[WideChar]) {
        self.append_decoded("wide", wide::decode_wide(units));
    }

    fn append_decoded(&mut self, source: &str, decoded: Decoded) {
        event::report_replacements(source, decoded.replacements);
        self.store.extend_from_slice(&decoded.codepoints);
    }

    // ------------------------------------------------------------------
    // In-place edits
    // ------------------------------------------------------------------

    /// Remove every codepoint.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Truncate or extend with `fill` to exactly `new_len` codepoints.
    pub fn resize(&mut self, new_len: usize, fill: char) {
        self.store.vec_mut().resize(new_len, fill);
    }

    /// Remove leading ASCII whitespace (space, tab, LF, CR).
    pub fn trim_start(&mut self) {
        let start = self
            .as_chars()
            .iter()
            .position(|&c| !Whitespace::TRIM.matches(c))
            .unwrap_or(self.len());
        if start > 0 {
            self.store.vec_mut().drain(..start);
        }
    }

    /// Remove trailing ASCII whitespace (space, tab, LF, CR).
    pub fn trim_end(&mut self) {
        let end = self
            .as_chars()
            .iter()
            .rposition(|&c| !Whitespace::TRIM.matches(c))
            .map_or(0, |i| i + 1);
        if end < self.len() {
            self.store.vec_mut().truncate(end);
        }
    }

    /// Remove leading and trailing ASCII whitespace.
    pub fn trim(&mut self) {
        self.trim_start();
        self.trim_end();
    }

    /// Prepend `fill` until the text is `total_width` codepoints long.
    pub fn pad_left(&mut self, total_width: usize, fill: char) {
        let Some(pad) = total_width.checked_sub(self.len()).filter(|&n| n > 0) else {
            return;
        };
        self.store
            .vec_mut()
            .splice(0..0, std::iter::repeat_n(fill, pad));
    }

    /// Append `fill` until the text is `total_width` codepoints long.
    pub fn pad_right(&mut self, total_width: usize, fill: char) {
        if self.len() >= total_width {
            return;
        }
        self.store.vec_mut().resize(total_width, fill);
    }

    /// Insert `seq` before codepoint `index`; indices past the end append.
    pub fn insert<S: CodepointSeq + ?Sized>(&mut self, index: usize, seq: &S) {
        let seq = seq.codepoints();
        if seq.is_empty() {
            return;
        }
        let index = index.min(self.len());
        self.store
            .vec_mut()
            .splice(index..index, seq.iter().copied());
    }

    /// Remove up to `count` codepoints starting at `index`. No-op when
    /// `index` is out of range.
    pub fn remove(&mut self, index: usize, count: usize) {
        let len = self.len();
        if index >= len || count == 0 {
            return;
        }
        let end = index + count.min(len - index);
        self.store.vec_mut().drain(index..end);
    }

    // ------------------------------------------------------------------
    // Copying edits
    // ------------------------------------------------------------------

    /// Codepoints `[pos, pos + len)`, clamped to the end. Empty when `pos` is
    /// out of range.
    #[must_use]
    pub fn substr(&self, pos: usize, len: usize) -> Self {
        let size = self.len();
        if pos >= size {
            return Self::new();
        }
        let end = pos + len.min(size - pos);
        Self::from_chars(&self.as_chars()[pos..end])
    }

    /// ASCII-only uppercase; every other codepoint is unchanged.
    #[must_use]
    pub fn to_upper(&self) -> Self {
        self.iter().map(|c| c.to_ascii_uppercase()).collect()
    }

    /// ASCII-only lowercase; every other codepoint is unchanged.
    #[must_use]
    pub fn to_lower(&self) -> Self {
        self.iter().map(|c| c.to_ascii_lowercase()).collect()
    }

    /// Replace every occurrence of `from` with `to`.
    #[must_use]
    pub fn replace_char(&self, from: char, to: char) -> Self {
        self.iter().map(|c| if c == from { to } else { c }).collect()
    }

    /// Replace leftmost non-overlapping occurrences of `from` with `to`.
    ///
    /// An empty `from` never matches, so the result is an unchanged copy.
    #[must_use]
    pub fn replace<F, T>(&self, from: &F, to: &T) -> Self
    where
        F: CodepointSeq + ?Sized,
        T: CodepointSeq + ?Sized,
    {
        let from = from.codepoints();
        let to = to.codepoints();
        let hay = self.as_chars();
        if from.is_empty() {
            return self.clone();
        }

        let mut out = Vec::with_capacity(hay.len());
        let mut pos = 0;
        while pos < hay.len() {
            if hay[pos..].starts_with(&from) {
                out.extend_from_slice(&to);
                pos += from.len();
            } else {
                out.push(hay[pos]);
                pos += 1;
            }
        }
        Self::from_vec(out)
    }

    /// Copy with leading ASCII whitespace removed.
    #[must_use]
    pub fn trimmed_start(&self) -> Self {
        let mut out = self.clone();
        out.trim_start();
        out
    }

    /// Copy with trailing ASCII whitespace removed.
    #[must_use]
    pub fn trimmed_end(&self) -> Self {
        let mut out = self.clone();
        out.trim_end();
        out
    }

    /// Copy with leading and trailing ASCII whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        let mut out = self.clone();
        out.trim();
        out
    }

    /// Copy left-padded to `total_width`.
    #[must_use]
    pub fn padded_left(&self, total_width: usize, fill: char) -> Self {
        let mut out = self.clone();
        out.pad_left(total_width, fill);
        out
    }

    /// Copy right-padded to `total_width`.
    #[must_use]
    pub fn padded_right(&self, total_width: usize, fill: char) -> Self {
        let mut out = self.clone();
        out.pad_right(total_width, fill);
        out
    }

    /// Copy with `seq` inserted at `index` (clamped).
    #[must_use]
    pub fn inserted<S: CodepointSeq + ?Sized>(&self, index: usize, seq: &S) -> Self {
        let mut out = self.clone();
        out.insert(index, seq);
        out
    }

    /// Copy with up to `count` codepoints removed at `index`.
    #[must_use]
    pub fn removed(&self, index: usize, count: usize) -> Self {
        let mut out = self.clone();
        out.remove(index, count);
        out
    }

    /// Split on every `delimiter`.
    ///
    /// Empty text yields no parts. Adjacent delimiters yield empty parts, but
    /// a trailing delimiter does not add a trailing empty part.
    #[must_use]
    pub fn split(&self, delimiter: char) -> Vec<Self> {
        let chars = self.as_chars();
        if chars.is_empty() {
            return Vec::new();
        }

        let mut parts = Vec::new();
        let mut start = 0;
        for (i, &c) in chars.iter().enumerate() {
            if c == delimiter {
                parts.push(Self::from_chars(&chars[start..i]));
                start = i + 1;
            }
        }
        if start < chars.len() {
            parts.push(Self::from_chars(&chars[start..]));
        }
        parts
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// True if the text begins with `prefix`.
    #[must_use]
    pub fn starts_with<S: CodepointSeq + ?Sized>(&self, prefix: &S) -> bool {
        self.as_chars().starts_with(&prefix.codepoints())
    }

    /// True if the text ends with `suffix`.
    #[must_use]
    pub fn ends_with<S: CodepointSeq + ?Sized>(&self, suffix: &S) -> bool {
        self.as_chars().ends_with(&suffix.codepoints())
    }

    /// True if `needle` occurs anywhere. An empty needle always matches.
    #[must_use]
    pub fn contains<S: CodepointSeq + ?Sized>(&self, needle: &S) -> bool {
        let needle = needle.codepoints();
        if needle.is_empty() {
            return true;
        }
        self.as_chars()
            .windows(needle.len())
            .any(|window| window == needle.as_ref())
    }

    /// True if `c` occurs anywhere.
    #[must_use]
    pub fn contains_char(&self, c: char) -> bool {
        self.index_of(c) != NPOS
    }

    /// Index of the first `c`, or [`NPOS`].
    #[must_use]
    pub fn index_of(&self, c: char) -> usize {
        self.as_chars().iter().position(|&x| x == c).unwrap_or(NPOS)
    }

    /// Index of the last `c`, or [`NPOS`].
    #[must_use]
    pub fn last_index_of(&self, c: char) -> usize {
        self.as_chars().iter().rposition(|&x| x == c).unwrap_or(NPOS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::REPLACEMENT_CHARACTER as R;

    fn t(s: &str) -> Text {
        Text::from(s)
    }

    #[test]
    fn test_len_counts_codepoints() {
        let s = t("a€😀");
        assert_eq!(s.len(), 3);
        assert_eq!(s.length(), 3);
        assert_eq!(s.to_utf8().len(), 1 + 3 + 4);
        assert_eq!(s.to_utf16().len(), 1 + 1 + 2);
    }

    #[test]
    fn test_substr() {
        let s = t("hello world");
        assert_eq!(s.substr(6, 5), "world");
        assert_eq!(s.substr(6, 100), "world");
        assert_eq!(s.substr(0, 0), "");
        assert!(s.substr(s.len(), 3).is_empty());
        assert!(s.substr(99, 1).is_empty());
    }

    #[test]
    fn test_case_conversion_is_ascii_only() {
        assert_eq!(t("Abc123").to_upper(), "ABC123");
        assert_eq!(t("AbC").to_lower(), "abc");
        assert_eq!(t("é").to_upper(), "é");
        assert_eq!(t("É").to_lower(), "É");
        assert_eq!(t("straße").to_upper(), "STRAßE");
    }

    #[test]
    fn test_replace_char() {
        assert_eq!(t("a-b-c").replace_char('-', '+'), "a+b+c");
        assert_eq!(t("abc").replace_char('z', 'y'), "abc");
    }

    #[test]
    fn test_replace_sequence_non_overlapping() {
        assert_eq!(t("aaa").replace("aa", "b"), "ba");
        assert_eq!(t("abcabc").replace("bc", "X"), "aXaX");
        assert_eq!(t("abc").replace("abc", ""), "");
        assert_eq!(t("ab").replace("abc", "X"), "ab");
        assert_eq!(t("😀x😀").replace("😀", "<>"), "<>x<>");
    }

    #[test]
    fn test_replace_empty_pattern_copies() {
        assert_eq!(t("abc").replace("", "X"), "abc");
    }

    #[test]
    fn test_prefix_suffix_contains() {
        let s = t("héllo");
        assert!(s.starts_with("hé"));
        assert!(s.starts_with(""));
        assert!(!s.starts_with("héllo!"));
        assert!(s.ends_with("llo"));
        assert!(!s.ends_with("x"));
        assert!(s.contains("él"));
        assert!(s.contains(""));
        assert!(!s.contains("le"));
        assert!(s.contains_char('é'));
        assert!(!t("").contains("a"));
    }

    #[test]
    fn test_trim() {
        let mut s = t(" \t\r\nabc \n");
        s.trim();
        assert_eq!(s, "abc");

        assert_eq!(t("  x ").trimmed_start(), "x ");
        assert_eq!(t("  x ").trimmed_end(), "  x");
        assert_eq!(t(" \t\n ").trimmed(), "");
        // Form feed is not trimmed.
        assert_eq!(t("\u{0C}x").trimmed(), "\u{0C}x");
    }

    #[test]
    fn test_index_of() {
        let s = t("abcabc");
        assert_eq!(s.index_of('b'), 1);
        assert_eq!(s.last_index_of('b'), 4);
        assert_eq!(s.index_of('z'), NPOS);
        assert_eq!(s.last_index_of('z'), Text::NPOS);
        assert_eq!(t("").index_of('a'), NPOS);
    }

    #[test]
    fn test_split() {
        let parts = t("a,,b").split(',');
        assert_eq!(parts, vec![t("a"), t(""), t("b")]);
        assert!(t("").split(',').is_empty());
        assert_eq!(t("a,b,").split(','), vec![t("a"), t("b")]);
        assert_eq!(t(",a").split(','), vec![t(""), t("a")]);
        assert_eq!(t(",").split(','), vec![t("")]);
        assert_eq!(t("abc").split(','), vec![t("abc")]);
    }

    #[test]
    fn test_pad() {
        assert_eq!(t("7").padded_left(3, '0'), "007");
        assert_eq!(t("7").padded_right(3, '.'), "7..");
        assert_eq!(t("1234").padded_left(3, '0'), "1234");
        let once = t("ab").padded_left(5, ' ');
        assert_eq!(once.padded_left(5, ' '), once);
    }

    #[test]
    fn test_insert_clamps() {
        let mut s = t("ad");
        s.insert(1, "bc");
        assert_eq!(s, "abcd");
        s.insert(100, "!");
        assert_eq!(s, "abcd!");
        assert_eq!(t("x").inserted(0, &t("<")), "<x");
    }

    #[test]
    fn test_remove() {
        let mut s = t("abcdef");
        s.remove(1, 2);
        assert_eq!(s, "adef");
        s.remove(2, usize::MAX);
        assert_eq!(s, "ad");
        s.remove(s.len(), 1);
        assert_eq!(s, "ad");
        assert_eq!(t("abc").removed(0, 0), "abc");
    }

    #[test]
    fn test_at_out_of_range_is_nul() {
        let s = t("ab");
        assert_eq!(s.at(1), 'b');
        assert_eq!(s.at(2), '\0');
        assert_eq!(s.get(2), None);
    }

    #[test]
    fn test_push_byte_ascii_only() {
        let mut s = Text::new();
        s.push_byte(b'a');
        s.push_byte(0xC3);
        s.push_byte(0x7F);
        assert_eq!(s.as_chars(), &['a', '\u{7F}']);
    }

    #[test]
    fn test_push_utf16_unit_replaces_surrogates() {
        let mut s = Text::new();
        s.push_utf16_unit(0x41);
        s.push_utf16_unit(0xD83D);
        s.push_utf16_unit(0xDE00);
        assert_eq!(s.as_chars(), &['A', R, R]);
    }

    #[test]
    fn test_appends() {
        let mut s = t("a");
        s.append(&t("b"));
        s.append_str("c");
        s.append_utf8(&[0xE2, 0x82, 0xAC]);
        s.append_utf16(&[0xD83D, 0xDE00]);
        s.append_utf32(&[0x21]);
        assert_eq!(s, "abc€😀!");
    }

    #[test]
    fn test_resize_and_last() {
        let mut s = t("ab");
        s.resize(4, '\0');
        assert_eq!(s.as_chars(), &['a', 'b', '\0', '\0']);
        s.resize(1, 'x');
        assert_eq!(s, "a");
        if let Some(c) = s.last_mut() {
            *c = 'z';
        }
        assert_eq!(s.last(), Some('z'));
        s.clear();
        assert_eq!(s.last(), None);
        assert!(s.last_mut().is_none());
    }

    #[test]
    fn test_c_str_tracks_mutation() {
        let mut s = t("ab");
        assert_eq!(s.c_str::<Utf8>(), b"ab\0");
        s.push('c');
        assert_eq!(s.c_str::<Utf8>(), b"abc\0");
        assert_eq!(s.encoded::<Utf8>(), b"abc");
        s.as_mut_chars()[0] = 'X';
        assert_eq!(s.c_str::<Utf16>(), &[0x58, 0x62, 0x63, 0]);
        assert_eq!(s.c_str::<Utf32>(), &[0x58, 0x62, 0x63, 0]);
    }

    #[test]
    fn test_repeated_c_str_hits_cache() {
        let mut s = t("cache me");
        let _ = s.c_str::<Utf16>();
        let _ = s.c_str::<Utf16>();
        let _ = s.encoded::<Utf16>();
        assert_eq!(s.encoded_views().cache::<Utf16>().encode_count(), 1);
    }

    #[test]
    fn test_strict_constructors() {
        assert!(Text::from_utf8_strict(b"fine").is_ok());
        assert!(matches!(
            Text::from_utf8_strict(&[b'a', 0xFF]),
            Err(Error::InvalidUtf8 { offset: 1 })
        ));
        assert!(Text::from_utf16_strict(&[0xD800]).is_err());
        assert!(Text::from_utf32_strict(&[0x11_0000]).is_err());
    }

    #[test]
    fn test_strict_utf8_rejects_overlong_nul() {
        // C0 80 is an overlong NUL; the lossy path still decodes it.
        let bytes = [b'a', 0xC0, 0x80, b'b'];
        assert!(matches!(
            Text::from_utf8_strict(&bytes),
            Err(Error::InvalidUtf8 { offset: 1 })
        ));
        assert_eq!(Text::from_utf8(&bytes).as_chars(), &['a', '\0', 'b']);
    }

    #[test]
    fn test_lossy_constructors() {
        assert_eq!(Text::from_utf8(&[0xE0]).as_chars(), &[R]);
        assert_eq!(Text::from_utf16(&[0xD83D, 0xDE00]), "😀");
        assert_eq!(Text::from_utf32(&[0x68, 0x69]), "hi");
    }

    #[test]
    fn test_wide_round_trip() {
        let s = t("wide 😀");
        let w = s.to_wide();
        assert_eq!(w.last(), Some(&0));
        assert_eq!(Text::from_wide_nul(&w), s);
        assert!(s.eq_wide(&w[..w.len() - 1]));
        let mut pushed = Text::new();
        pushed.push_wide(0x41);
        assert_eq!(pushed, "A");
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_from_wide_ptr() {
        let w = t("ptr 😀").to_wide();
        // SAFETY: `w` is NUL-terminated and outlives the call.
        let s = unsafe { Text::from_wide_ptr(w.as_ptr()) }.unwrap();
        assert_eq!(s, "ptr 😀");

        let empty: [WideChar; 1] = [0];
        // SAFETY: a lone terminator is a valid empty buffer.
        let s = unsafe { Text::from_wide_ptr(empty.as_ptr()) }.unwrap();
        assert!(s.is_empty());

        // SAFETY: null is explicitly allowed.
        let err = unsafe { Text::from_wide_ptr(std::ptr::null()) }.unwrap_err();
        assert!(matches!(err, Error::NullPointer));
    }

    #[test]
    fn test_read_write() {
        let s = Text::read_from(&b"read \xF0\x9F\x98\x80"[..]).unwrap();
        assert_eq!(s, "read 😀");
        let mut out = Vec::new();
        let mut s = s;
        s.write_to(&mut out).unwrap();
        assert_eq!(out, "read 😀".as_bytes());
    }
}
