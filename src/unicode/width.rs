//! Display width of codepoints for terminal-oriented formatting.
//!
//! Widths are summed per codepoint; no grapheme clustering is applied.

use std::sync::atomic::{AtomicU8, Ordering};
use unicode_width::UnicodeWidthChar;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

const WIDTH_METHOD_WCWIDTH: u8 = 0;
const WIDTH_METHOD_UNICODE: u8 = 1;

static WIDTH_METHOD: AtomicU8 = AtomicU8::new(WIDTH_METHOD_WCWIDTH);

/// Set the global width method used by `display_width` helpers.
pub fn set_width_method(method: WidthMethod) {
    let value = match method {
        WidthMethod::WcWidth => WIDTH_METHOD_WCWIDTH,
        WidthMethod::Unicode => WIDTH_METHOD_UNICODE,
    };
    WIDTH_METHOD.store(value, Ordering::Relaxed);
}

/// Get the global width method.
#[must_use]
pub fn width_method() -> WidthMethod {
    match WIDTH_METHOD.load(Ordering::Relaxed) {
        WIDTH_METHOD_UNICODE => WidthMethod::Unicode,
        _ => WidthMethod::WcWidth,
    }
}

/// Display width of a single codepoint using a specific method.
///
/// Control characters have width 0.
#[inline]
#[must_use]
pub fn char_width_with_method(c: char, method: WidthMethod) -> usize {
    // Printable ASCII is the common case.
    if (' '..='~').contains(&c) {
        return 1;
    }
    if c.is_control() {
        return 0;
    }
    match method {
        WidthMethod::WcWidth => UnicodeWidthChar::width(c).unwrap_or(0),
        WidthMethod::Unicode => UnicodeWidthChar::width_cjk(c).unwrap_or(0),
    }
}

/// Display width of a codepoint sequence using a specific method.
#[must_use]
pub fn display_width_with_method(codepoints: &[char], method: WidthMethod) -> usize {
    codepoints
        .iter()
        .map(|&c| char_width_with_method(c, method))
        .sum()
}

/// Display width of a codepoint sequence (global method).
#[must_use]
pub fn display_width(codepoints: &[char]) -> usize {
    display_width_with_method(codepoints, width_method())
}
