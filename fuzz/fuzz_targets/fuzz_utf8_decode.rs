//! Fuzz target for lossy UTF-8 decoding.
//!
//! Decoding must never panic and must re-encode to well-formed UTF-8. Strict
//! validation must agree with the standard library and imply a clean decode.

#![no_main]

use libfuzzer_sys::fuzz_target;
use unitext::codec::{decode_utf8_counted, encode_utf8, validate_utf8};

fuzz_target!(|data: &[u8]| {
    let decoded = decode_utf8_counted(data);
    if validate_utf8(data).is_ok() {
        assert!(decoded.is_clean());
    }
    assert_eq!(validate_utf8(data).is_ok(), std::str::from_utf8(data).is_ok());
    assert!(decoded.codepoints.len() <= data.len());

    let reencoded = encode_utf8(&decoded.codepoints);
    assert!(std::str::from_utf8(&reencoded).is_ok());
    // Shortest-form input survives unchanged.
    if std::str::from_utf8(data).is_ok() {
        assert_eq!(reencoded, data);
    }
});
