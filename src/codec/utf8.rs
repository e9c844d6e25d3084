//! UTF-8 decoding and encoding.

use super::Decoded;
use crate::error::{Error, Result};

/// Outcome of scanning one sequence at a given offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    /// A well-formed sequence of `len` bytes.
    Char(char, usize),
    /// Bad lead byte, bad continuation byte, or a value that is not a scalar
    /// value. Scanning resumes `advance` bytes further on.
    Invalid { advance: usize },
    /// The sequence runs past the end of the input.
    Truncated,
}

/// Continuation byte count and payload bits of a lead byte.
#[inline]
const fn classify_lead(lead: u8) -> Option<(usize, u32)> {
    if lead < 0x80 {
        Some((0, lead as u32))
    } else if lead >> 5 == 0b110 {
        Some((1, (lead & 0x1F) as u32))
    } else if lead >> 4 == 0b1110 {
        Some((2, (lead & 0x0F) as u32))
    } else if lead >> 3 == 0b1_1110 {
        Some((3, (lead & 0x07) as u32))
    } else {
        None
    }
}

#[inline]
const fn is_continuation(b: u8) -> bool {
    b >> 6 == 0b10
}

fn step(bytes: &[u8], i: usize) -> Step {
    let Some((extra, mut cp)) = classify_lead(bytes[i]) else {
        return Step::Invalid { advance: 1 };
    };
    if i + extra >= bytes.len() {
        return Step::Truncated;
    }

    let tail = &bytes[i + 1..=i + extra];
    if !tail.iter().copied().all(is_continuation) {
        // Resynchronize one byte past the lead, not past the bad byte.
        return Step::Invalid { advance: 1 };
    }
    for &b in tail {
        cp = (cp << 6) | u32::from(b & 0x3F);
    }

    // Encoded surrogates and values above U+10FFFF are consumed whole.
    char::from_u32(cp).map_or(Step::Invalid { advance: extra + 1 }, |c| {
        Step::Char(c, extra + 1)
    })
}

/// Decode UTF-8 bytes, replacing malformed sequences with U+FFFD.
#[must_use]
pub fn decode_utf8(bytes: &[u8]) -> Vec<char> {
    decode_utf8_counted(bytes).codepoints
}

/// Decode UTF-8 bytes and report how many replacements were made.
///
/// A truncated sequence at the end of the input emits a single U+FFFD and
/// ends the scan, so any bytes after the truncated lead are not decoded.
#[must_use]
pub fn decode_utf8_counted(bytes: &[u8]) -> Decoded {
    let mut out = Decoded::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match step(bytes, i) {
            Step::Char(c, len) => {
                out.push(c);
                i += len;
            }
            Step::Invalid { advance } => {
                out.push_replacement();
                i += advance;
            }
            Step::Truncated => {
                out.push_replacement();
                break;
            }
        }
    }

    out
}

/// True if `c` needs all `len` bytes, i.e. the sequence is not overlong.
#[inline]
const fn is_shortest_form(c: char, len: usize) -> bool {
    let min = match len {
        1 => 0,
        2 => 0x80,
        3 => 0x800,
        _ => 0x1_0000,
    };
    c as u32 >= min
}

/// Check that `bytes` are well-formed UTF-8.
///
/// Stricter than [`decode_utf8`]: overlong forms (`C0 AF`, `E0 80 80`) are
/// rejected here even though the lossy decoder accepts them, so an `Ok` here
/// implies a clean decode but not the converse.
pub fn validate_utf8(bytes: &[u8]) -> Result<()> {
    let mut i = 0;
    while i < bytes.len() {
        match step(bytes, i) {
            Step::Char(c, len) if is_shortest_form(c, len) => i += len,
            Step::Char(..) | Step::Invalid { .. } | Step::Truncated => {
                return Err(Error::InvalidUtf8 { offset: i });
            }
        }
    }
    Ok(())
}

/// Encode codepoints as UTF-8.
#[must_use]
pub fn encode_utf8(codepoints: &[char]) -> Vec<u8> {
    let mut out = Vec::with_capacity(codepoints.len());
    encode_utf8_into(codepoints, &mut out);
    out
}

/// Append the UTF-8 encoding of `codepoints` to `out`.
pub fn encode_utf8_into(codepoints: &[char], out: &mut Vec<u8>) {
    out.reserve(codepoints.len());
    for &c in codepoints {
        let cp = u32::from(c);
        if cp <= 0x7F {
            out.push(cp as u8);
        } else if cp <= 0x7FF {
            out.push((0xC0 | (cp >> 6)) as u8);
            out.push((0x80 | (cp & 0x3F)) as u8);
        } else if cp <= 0xFFFF {
            out.push((0xE0 | (cp >> 12)) as u8);
            out.push((0x80 | ((cp >> 6) & 0x3F)) as u8);
            out.push((0x80 | (cp & 0x3F)) as u8);
        } else {
            out.push((0xF0 | (cp >> 18)) as u8);
            out.push((0x80 | ((cp >> 12) & 0x3F)) as u8);
            out.push((0x80 | ((cp >> 6) & 0x3F)) as u8);
            out.push((0x80 | (cp & 0x3F)) as u8);
        }
    }
}
