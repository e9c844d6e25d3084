//! Comparison, operator, conversion and formatting impls for [`Text`].
//!
//! Comparisons against encoded strings decode the other side first and then
//! compare codepoint by codepoint; raw encoded units are never compared.

use crate::codec;
use crate::text::Text;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt::{self, Write as _};
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Index, IndexMut};
use std::str::FromStr;

// ----------------------------------------------------------------------
// Equality and ordering
// ----------------------------------------------------------------------

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.as_chars() == other.as_chars()
    }
}

impl Eq for Text {}

impl PartialOrd for Text {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Text {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_chars().cmp(other.as_chars())
    }
}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_chars().hash(state);
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.iter().eq(other.chars())
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<String> for Text {
    fn eq(&self, other: &String) -> bool {
        *self == *other.as_str()
    }
}

impl PartialEq<Text> for str {
    fn eq(&self, other: &Text) -> bool {
        *other == *self
    }
}

impl PartialEq<Text> for &str {
    fn eq(&self, other: &Text) -> bool {
        *other == **self
    }
}

impl PartialEq<Text> for String {
    fn eq(&self, other: &Text) -> bool {
        *other == *self.as_str()
    }
}

impl PartialEq<[u16]> for Text {
    fn eq(&self, other: &[u16]) -> bool {
        self.as_chars() == codec::decode_utf16(other).as_slice()
    }
}

impl PartialEq<[u32]> for Text {
    fn eq(&self, other: &[u32]) -> bool {
        self.as_chars() == codec::decode_utf32(other).as_slice()
    }
}

impl PartialOrd<str> for Text {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        Some(self.iter().cmp(other.chars()))
    }
}

impl PartialOrd<&str> for Text {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        self.partial_cmp(*other)
    }
}

// ----------------------------------------------------------------------
// Indexing
// ----------------------------------------------------------------------

impl Index<usize> for Text {
    type Output = char;

    /// # Panics
    ///
    /// Panics if `index` is out of range; use [`Text::at`] for a
    /// non-panicking read.
    fn index(&self, index: usize) -> &char {
        &self.as_chars()[index]
    }
}

impl IndexMut<usize> for Text {
    fn index_mut(&mut self, index: usize) -> &mut char {
        &mut self.as_mut_chars()[index]
    }
}

// ----------------------------------------------------------------------
// Concatenation
// ----------------------------------------------------------------------

impl AddAssign<&Text> for Text {
    fn add_assign(&mut self, rhs: &Text) {
        self.append(rhs);
    }
}

impl AddAssign<Text> for Text {
    fn add_assign(&mut self, rhs: Text) {
        self.append(&rhs);
    }
}

impl AddAssign<&str> for Text {
    fn add_assign(&mut self, rhs: &str) {
        self.append_str(rhs);
    }
}

impl AddAssign<String> for Text {
    fn add_assign(&mut self, rhs: String) {
        self.append_str(&rhs);
    }
}

impl AddAssign<char> for Text {
    fn add_assign(&mut self, rhs: char) {
        self.push(rhs);
    }
}

impl<T> Add<T> for Text
where
    Text: AddAssign<T>,
{
    type Output = Text;

    fn add(mut self, rhs: T) -> Text {
        self += rhs;
        self
    }
}

impl<T> Add<T> for &Text
where
    Text: AddAssign<T>,
{
    type Output = Text;

    fn add(self, rhs: T) -> Text {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

// ----------------------------------------------------------------------
// Iteration
// ----------------------------------------------------------------------

impl<'a> IntoIterator for &'a Text {
    type Item = char;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, char>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Text {
    type Item = char;
    type IntoIter = std::vec::IntoIter<char>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_chars().into_iter()
    }
}

impl FromIterator<char> for Text {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl Extend<char> for Text {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        let chars: Vec<char> = iter.into_iter().collect();
        self.append_chars(&chars);
    }
}

// ----------------------------------------------------------------------
// Conversions
// ----------------------------------------------------------------------

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::from_utf8(s.as_bytes())
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&String> for Text {
    fn from(s: &String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&[char]> for Text {
    fn from(codepoints: &[char]) -> Self {
        Self::from_chars(codepoints)
    }
}

impl From<Vec<char>> for Text {
    fn from(codepoints: Vec<char>) -> Self {
        Self::from_vec(codepoints)
    }
}

impl From<char> for Text {
    fn from(c: char) -> Self {
        Self::from_vec(vec![c])
    }
}

impl From<&Text> for String {
    fn from(text: &Text) -> Self {
        text.iter().collect()
    }
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        Self::from(&text)
    }
}

impl FromStr for Text {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl AsRef<[char]> for Text {
    fn as_ref(&self) -> &[char] {
        self.as_chars()
    }
}

// ----------------------------------------------------------------------
// Formatting
// ----------------------------------------------------------------------

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.width().is_none() && f.precision().is_none() {
            return self.iter().try_for_each(|c| f.write_char(c));
        }
        f.pad(&String::from(self))
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&String::from(self), f)
    }
}
