//! Fuzz target for codepoint-indexed edits.
//!
//! Arbitrary edit scripts must never panic, and every export must match a
//! fresh encode of the current content.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use unitext::Text;
use unitext::codec::{Utf8, Utf16, Utf32};

#[derive(Arbitrary, Debug)]
enum Edit {
    Push(char),
    Insert(usize, String),
    Remove(usize, usize),
    Replace(String, String),
    PadLeft(u8, char),
    Trim,
    Resize(u8, char),
    Export(u8),
}

fuzz_target!(|input: (String, Vec<Edit>)| {
    let (seed, edits) = input;
    let mut text = Text::from(seed.as_str());

    for edit in edits {
        match edit {
            Edit::Push(c) => text.push(c),
            Edit::Insert(at, s) => text.insert(at, s.as_str()),
            Edit::Remove(at, n) => text.remove(at, n),
            Edit::Replace(from, to) => text = text.replace(from.as_str(), to.as_str()),
            Edit::PadLeft(w, c) => text.pad_left(usize::from(w), c),
            Edit::Trim => text.trim(),
            Edit::Resize(n, c) => text.resize(usize::from(n), c),
            Edit::Export(which) => match which % 3 {
                0 => {
                    let expected = text.to_utf8();
                    assert_eq!(text.encoded::<Utf8>(), expected.as_slice());
                }
                1 => {
                    let expected = text.to_utf16();
                    assert_eq!(text.encoded::<Utf16>(), expected.as_slice());
                }
                _ => {
                    let expected = text.to_utf32();
                    assert_eq!(text.encoded::<Utf32>(), expected.as_slice());
                }
            },
        }
    }
});
