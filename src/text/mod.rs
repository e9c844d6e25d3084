//! The codepoint text value and its supporting pieces.
//!
//! Key types:
//!
//! - [`Text`]: owned, codepoint-indexed text with editing operations
//! - [`CodepointStore`]: the canonical codepoint sequence and its generation
//! - [`EncodedViews`]: lazily encoded, NUL-terminated UTF-8/16/32 caches
//! - [`CodepointSeq`]: argument trait for needles, inserts and join parts
//!
//! # Examples
//!
//! ## Editing by codepoint index
//!
//! ```
//! use unitext::Text;
//!
//! let mut t = Text::from("  naïve café  ");
//! t.trim();
//! t.insert(5, " and");
//! assert_eq!(t, "naïve and café");
//! assert_eq!(t.index_of('é'), 13);
//! assert_eq!(t.substr(10, 4), "café");
//! ```
//!
//! ## Interop buffers
//!
//! ```
//! use unitext::Text;
//! use unitext::codec::{Utf8, Utf16};
//!
//! let mut t = Text::from_utf16(&[0xD83D, 0xDE00]);
//! assert_eq!(t.c_str::<Utf8>(), &[0xF0, 0x9F, 0x98, 0x80, 0]);
//! t.push('!');
//! assert_eq!(t.c_str::<Utf16>(), &[0xD83D, 0xDE00, 0x21, 0]);
//! ```

mod helpers;
mod ops;
mod seq;
mod store;
mod value;
mod views;

pub use seq::CodepointSeq;
pub use store::CodepointStore;
pub use value::{Codepoint, NPOS, Text};
pub use views::{EncodedViews, UnitCache};
