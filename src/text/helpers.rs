//! Locale-free predicates and builders over [`Text`].

use crate::text::Text;
use crate::text::seq::CodepointSeq;
use crate::unicode::Whitespace;
use std::fmt;

impl Text {
    /// True for `None` or an empty text.
    #[must_use]
    pub fn is_null_or_empty(text: Option<&Self>) -> bool {
        text.is_none_or(Self::is_empty)
    }

    /// True when every codepoint is ASCII whitespace, including form feed and
    /// vertical tab. An empty text counts as blank.
    #[must_use]
    pub fn is_empty_or_whitespace(&self) -> bool {
        self.iter().all(|c| Whitespace::BLANK.matches(c))
    }

    /// Format any displayable value, e.g. a number, as text.
    #[must_use]
    pub fn from_display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Self::from(value.to_string())
    }

    /// Fixed-point formatting with exactly `precision` fractional digits.
    ///
    /// Non-finite values are spelled `nan`, `inf` and `-inf`, as C's `%f`
    /// prints them.
    #[must_use]
    pub fn from_float<F: Into<f64>>(value: F, precision: usize) -> Self {
        let value: f64 = value.into();
        if value.is_nan() {
            return Self::from("nan");
        }
        if value.is_infinite() {
            return Self::from(if value < 0.0 { "-inf" } else { "inf" });
        }
        Self::from(format!("{value:.precision$}"))
    }

    /// Concatenate `parts` with `delimiter` between consecutive parts.
    ///
    /// No parts yields an empty text.
    #[must_use]
    pub fn join<I, D>(parts: I, delimiter: &D) -> Self
    where
        I: IntoIterator,
        I::Item: CodepointSeq,
        D: CodepointSeq + ?Sized,
    {
        let delimiter = delimiter.codepoints();
        let mut out = Self::new();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                out.append_chars(&delimiter);
            }
            out.append_chars(&part.codepoints());
        }
        out
    }
}
