//! UTF-16 decoding and encoding with surrogate pairing.

use super::Decoded;
use crate::error::{Error, Result};

const HIGH_START: u16 = 0xD800;
const LOW_START: u16 = 0xDC00;

/// True for a high (leading) surrogate unit, `0xD800..=0xDBFF`.
#[inline]
#[must_use]
pub const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

/// True for a low (trailing) surrogate unit, `0xDC00..=0xDFFF`.
#[inline]
#[must_use]
pub const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

/// True for either surrogate half.
#[inline]
#[must_use]
pub const fn is_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDFFF)
}

#[inline]
fn combine(high: u16, low: u16) -> char {
    let cp = 0x1_0000 + ((u32::from(high - HIGH_START) << 10) | u32::from(low - LOW_START));
    // high/low ranges keep cp inside 0x10000..=0x10FFFF
    char::from_u32(cp).unwrap_or(super::REPLACEMENT_CHARACTER)
}

/// Decode the unit at `i`; `None` means an unpaired surrogate. Returns the
/// number of units consumed.
#[inline]
fn step(units: &[u16], i: usize) -> (Option<char>, usize) {
    let unit = units[i];
    if is_high_surrogate(unit) {
        if let Some(&next) = units.get(i + 1) {
            if is_low_surrogate(next) {
                return (Some(combine(unit, next)), 2);
            }
        }
        return (None, 1);
    }
    // Non-surrogate BMP units convert directly; a lone low surrogate does not.
    (char::from_u32(u32::from(unit)), 1)
}

/// Decode UTF-16 units, replacing unpaired surrogates with U+FFFD.
#[must_use]
pub fn decode_utf16(units: &[u16]) -> Vec<char> {
    decode_utf16_counted(units).codepoints
}

/// Decode UTF-16 units and report how many replacements were made.
#[must_use]
pub fn decode_utf16_counted(units: &[u16]) -> Decoded {
    let mut out = Decoded::with_capacity(units.len());
    let mut i = 0;
    while i < units.len() {
        let (c, len) = step(units, i);
        match c {
            Some(c) => out.push(c),
            None => out.push_replacement(),
        }
        i += len;
    }
    out
}

/// Check that `units` contain no unpaired surrogate.
pub fn validate_utf16(units: &[u16]) -> Result<()> {
    let mut i = 0;
    while i < units.len() {
        let (c, len) = step(units, i);
        if c.is_none() {
            return Err(Error::InvalidUtf16 { offset: i });
        }
        i += len;
    }
    Ok(())
}

/// Encode codepoints as UTF-16.
#[must_use]
pub fn encode_utf16(codepoints: &[char]) -> Vec<u16> {
    let mut out = Vec::with_capacity(codepoints.len());
    encode_utf16_into(codepoints, &mut out);
    out
}

/// Append the UTF-16 encoding of `codepoints` to `out`.
pub fn encode_utf16_into(codepoints: &[char], out: &mut Vec<u16>) {
    out.reserve(codepoints.len());
    for &c in codepoints {
        let cp = u32::from(c);
        if cp <= 0xFFFF {
            out.push(cp as u16);
        } else {
            let v = cp - 0x1_0000;
            out.push(HIGH_START + ((v >> 10) & 0x3FF) as u16);
            out.push(LOW_START + (v & 0x3FF) as u16);
        }
    }
}
