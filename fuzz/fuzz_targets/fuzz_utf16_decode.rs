//! Fuzz target for lossy UTF-16 decoding.

#![no_main]

use libfuzzer_sys::fuzz_target;
use unitext::REPLACEMENT_CHARACTER;
use unitext::codec::{decode_utf16, encode_utf16};

fuzz_target!(|units: Vec<u16>| {
    let decoded = decode_utf16(&units);
    let expected: Vec<char> = char::decode_utf16(units.iter().copied())
        .map(|r| r.unwrap_or(REPLACEMENT_CHARACTER))
        .collect();
    assert_eq!(decoded, expected);

    // Decoding our own output is lossless.
    assert_eq!(decode_utf16(&encode_utf16(&decoded)), decoded);
});
