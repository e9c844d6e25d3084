//! ASCII whitespace classes used by trimming and blank detection.

use bitflags::bitflags;

bitflags! {
    /// Set of ASCII whitespace codepoints.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Whitespace: u8 {
        const SPACE = 1 << 0;
        const TAB = 1 << 1;
        const LINE_FEED = 1 << 2;
        const CARRIAGE_RETURN = 1 << 3;
        const FORM_FEED = 1 << 4;
        const VERTICAL_TAB = 1 << 5;

        /// Codepoints removed by `trim`, `trim_start` and `trim_end`.
        const TRIM = Self::SPACE.bits()
            | Self::TAB.bits()
            | Self::LINE_FEED.bits()
            | Self::CARRIAGE_RETURN.bits();

        /// Codepoints accepted by blank detection (C `isspace` in the C locale).
        const BLANK = Self::TRIM.bits()
            | Self::FORM_FEED.bits()
            | Self::VERTICAL_TAB.bits();
    }
}

impl Whitespace {
    /// Class of a single codepoint, empty for non-whitespace.
    #[must_use]
    pub const fn of(c: char) -> Self {
        match c {
            ' ' => Self::SPACE,
            '\t' => Self::TAB,
            '\n' => Self::LINE_FEED,
            '\r' => Self::CARRIAGE_RETURN,
            '\u{0C}' => Self::FORM_FEED,
            '\u{0B}' => Self::VERTICAL_TAB,
            _ => Self::empty(),
        }
    }

    /// True if `c` belongs to this set.
    #[inline]
    #[must_use]
    pub const fn matches(self, c: char) -> bool {
        self.intersects(Self::of(c))
    }
}

impl Default for Whitespace {
    fn default() -> Self {
        Self::TRIM
    }
}
