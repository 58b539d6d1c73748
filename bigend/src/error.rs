use crate::width::Width;
use std::{fmt, io};

/// What went wrong in a fallible codec call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Strict decoding got a byte count other than the width's.
    LengthMismatch {
        /// The width being decoded.
        width: Width,
        /// The number of bytes supplied.
        actual: usize,
    },
    /// A bit count with no matching [`Width`].
    UnsupportedWidth(u32),
    /// The writer rejected an encoding of the given length.
    Write(usize),
}

/// Errors reported by the strict and I/O-facing parts of the codec.
///
/// The core [`encode`](crate::encode) and [`decode`](crate::decode) operations never produce one.
pub struct Error {
    kind: ErrorKind,
    source: Option<io::Error>,
}

impl Error {
    /// Creates a new `Error` of the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Creates a new `Error` of the given kind, caused by an I/O failure.
    pub fn with_context(kind: ErrorKind, error: io::Error) -> Self {
        Self {
            kind,
            source: Some(error),
        }
    }

    /// The kind of failure.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // defer to Display
        write!(f, "{}", self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::LengthMismatch { width, actual } => write!(
                f,
                "length mismatch for {}-bit integer: expected {} bytes, got {}",
                width.bits(),
                width.bytes(),
                actual,
            ),
            ErrorKind::UnsupportedWidth(bits) => write!(
                f,
                "unsupported integer width: {} bits (expected 8, 16, 32 or 64)",
                bits
            ),
            ErrorKind::Write(len) => {
                write!(f, "failed to write {} encoded bytes", len)?;
                if let Some(source) = &self.source {
                    write!(f, ": {}", source)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|error| error as &(dyn std::error::Error + 'static))
    }
}
