//! Error types for unitext.
//!
//! Decoding and editing never fail by default; these errors only come out of
//! the strict validators, the I/O adapters and the raw wide-pointer constructor.

use std::fmt;
use std::io;

/// Result type alias for unitext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for unitext operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from a reader or writer adapter.
    Io(io::Error),
    /// Ill-formed UTF-8 sequence starting at byte `offset`.
    InvalidUtf8 { offset: usize },
    /// Unpaired surrogate at unit `offset`.
    InvalidUtf16 { offset: usize },
    /// UTF-32 unit at `offset` is not a Unicode scalar value.
    InvalidCodepoint { offset: usize, value: u32 },
    /// A foreign wide-string pointer was null.
    NullPointer,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidUtf8 { offset } => {
                write!(f, "invalid UTF-8 sequence at byte {offset}")
            }
            Self::InvalidUtf16 { offset } => {
                write!(f, "unpaired UTF-16 surrogate at unit {offset}")
            }
            Self::InvalidCodepoint { offset, value } => {
                write!(f, "invalid codepoint U+{value:04X} at unit {offset}")
            }
            Self::NullPointer => write!(f, "null wide-string pointer"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidUtf8 { offset: 3 };
        assert!(err.to_string().contains("byte 3"));

        let err = Error::InvalidUtf16 { offset: 7 };
        assert!(err.to_string().contains("unit 7"));

        let err = Error::InvalidCodepoint {
            offset: 1,
            value: 0xD800,
        };
        assert!(err.to_string().contains("U+D800"));

        let err = Error::InvalidCodepoint {
            offset: 0,
            value: 0x11_0000,
        };
        assert!(err.to_string().contains("U+110000"));

        assert!(Error::NullPointer.to_string().contains("null"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
