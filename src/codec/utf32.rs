//! UTF-32 decoding and encoding.

use super::{Decoded, REPLACEMENT_CHARACTER};
use crate::error::{Error, Result};

/// Decode UTF-32 units. Surrogates and values above U+10FFFF become U+FFFD.
#[must_use]
pub fn decode_utf32(units: &[u32]) -> Vec<char> {
    units
        .iter()
        .map(|&u| char::from_u32(u).unwrap_or(REPLACEMENT_CHARACTER))
        .collect()
}

/// Decode UTF-32 units and report how many replacements were made.
#[must_use]
pub fn decode_utf32_counted(units: &[u32]) -> Decoded {
    let mut out = Decoded::with_capacity(units.len());
    for &u in units {
        match char::from_u32(u) {
            Some(c) => out.push(c),
            None => out.push_replacement(),
        }
    }
    out
}

/// Check that every unit is a Unicode scalar value.
pub fn validate_utf32(units: &[u32]) -> Result<()> {
    match units.iter().position(|&u| char::from_u32(u).is_none()) {
        Some(offset) => Err(Error::InvalidCodepoint {
            offset,
            value: units[offset],
        }),
        None => Ok(()),
    }
}

/// Encode codepoints as UTF-32.
#[must_use]
pub fn encode_utf32(codepoints: &[char]) -> Vec<u32> {
    codepoints.iter().map(|&c| u32::from(c)).collect()
}

/// Append the UTF-32 encoding of `codepoints` to `out`.
pub fn encode_utf32_into(codepoints: &[char], out: &mut Vec<u32>) {
    out.extend(codepoints.iter().map(|&c| u32::from(c)));
}
