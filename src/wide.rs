//! Native wide-character interop.
//!
//! `wchar_t` is 16 bits on Windows (UTF-16 with surrogate pairs) and 32 bits
//! elsewhere (UTF-32). This module is the only place that looks at the host
//! platform; it routes wide buffers to the matching codec family, which itself
//! never branches on platform.

#![allow(clippy::unnecessary_cast)] // wchar_t is i32 on some targets and u32 on others

use crate::codec::{self, Decoded};

/// The platform's native wide character.
pub type WideChar = libc::wchar_t;

/// Encoding tag matching [`WideChar`] on this platform.
#[cfg(windows)]
pub type WideEncoding = codec::Utf16;

/// Encoding tag matching [`WideChar`] on this platform.
#[cfg(not(windows))]
pub type WideEncoding = codec::Utf32;

/// Width of [`WideChar`] in bits.
pub const WIDE_CHAR_BITS: u32 = (std::mem::size_of::<WideChar>() * 8) as u32;

/// Decode a wide buffer, replacing malformed units with U+FFFD.
#[cfg(windows)]
#[must_use]
pub fn decode_wide(units: &[WideChar]) -> Decoded {
    codec::decode_utf16_counted(units)
}

/// Decode a wide buffer, replacing malformed units with U+FFFD.
#[cfg(not(windows))]
#[must_use]
pub fn decode_wide(units: &[WideChar]) -> Decoded {
    let raw: Vec<u32> = units.iter().map(|&u| u as u32).collect();
    codec::decode_utf32_counted(&raw)
}

/// Append the wide encoding of `codepoints` to `out`, without a terminator.
#[cfg(windows)]
pub fn encode_wide_into(codepoints: &[char], out: &mut Vec<WideChar>) {
    codec::encode_utf16_into(codepoints, out);
}

/// Append the wide encoding of `codepoints` to `out`, without a terminator.
#[cfg(not(windows))]
pub fn encode_wide_into(codepoints: &[char], out: &mut Vec<WideChar>) {
    out.reserve(codepoints.len());
    out.extend(codepoints.iter().map(|&c| u32::from(c) as WideChar));
}

/// Convert one bare wide unit to a codepoint.
///
/// A unit that cannot stand alone (a surrogate half on 16-bit platforms, or a
/// non-scalar value on 32-bit ones) yields U+FFFD.
#[must_use]
pub fn wide_unit_to_char(unit: WideChar) -> char {
    char::from_u32(unit as u32).unwrap_or(codec::REPLACEMENT_CHARACTER)
}

/// Units before the first NUL in `units`.
#[must_use]
pub fn until_nul(units: &[WideChar]) -> &[WideChar] {
    let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
    &units[..end]
}

/// Borrow a NUL-terminated foreign wide string, excluding the terminator.
///
/// Returns `None` for a null pointer.
///
/// # Safety
///
/// `ptr` must be null or point to a readable, NUL-terminated `wchar_t`
/// buffer that stays alive and unmodified for `'a`.
#[allow(unsafe_code)]
#[must_use]
pub unsafe fn wide_slice_from_ptr<'a>(ptr: *const WideChar) -> Option<&'a [WideChar]> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: caller guarantees a valid NUL-terminated buffer.
    unsafe {
        let len = libc::wcslen(ptr);
        Some(std::slice::from_raw_parts(ptr, len))
    }
}
