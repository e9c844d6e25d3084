//! `unitext` - codepoint-indexed text with lossless UTF-8/16/32 transcoding.
//!
//! [`Text`] stores decoded Unicode scalar values and indexes them by codepoint.
//! Encoded forms for interop are produced on demand and cached until the next
//! mutation. Malformed input never fails: it decodes to U+FFFD, and strict
//! constructors are available when rejection is wanted.

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (wcslen FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional unit packing in the codecs
#![allow(clippy::cast_possible_wrap)] // wchar_t is signed on some targets
#![allow(clippy::cast_sign_loss)] // wchar_t is signed on some targets
#![allow(clippy::module_name_repetitions)] // Allow codec::Utf8 etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod codec;
pub mod error;
pub mod event;
pub mod text;
pub mod unicode;
pub mod wide;

// Re-export core types at crate root
pub use codec::{Decoded, Encoding, REPLACEMENT_CHARACTER, Utf8, Utf16, Utf32};
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use text::{Codepoint, CodepointSeq, NPOS, Text};
pub use unicode::{WidthMethod, set_width_method};
pub use wide::WideChar;
