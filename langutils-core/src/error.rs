//! Core error types (deterministic only)

use core::fmt;

/// Decoding and call-shape errors raised by the classification engine
///
/// Classification predicates never surface the decoding variants; they
/// degrade to `false`. Only explicit decode and counting operations return
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Input of the wrong shape, e.g. several characters where one is expected
    InvalidArgument { reason: &'static str },
    /// Byte not allowed by the encoding
    InvalidByte { position: usize, byte: u8 },
    /// Lead byte is a continuation byte, or a continuation byte is missing its marker bits
    MalformedSequence { position: usize },
    /// Input ended before all continuation bytes were seen
    TruncatedSequence { position: usize },
    /// Decoded value is overlong, a surrogate, or above U+10FFFF
    InvalidCodePoint { position: usize, value: u32 },
    /// Position at or past the end of input
    OutOfBounds { position: usize },
    /// Escape marker not followed by a well-formed code point
    MalformedEscape { position: usize },
}

impl CoreError {
    /// Byte offset the error refers to, if any
    pub fn position(&self) -> Option<usize> {
        match self {
            CoreError::InvalidArgument { .. } => None,
            CoreError::InvalidByte { position, .. }
            | CoreError::MalformedSequence { position }
            | CoreError::TruncatedSequence { position }
            | CoreError::InvalidCodePoint { position, .. }
            | CoreError::OutOfBounds { position }
            | CoreError::MalformedEscape { position } => Some(*position),
        }
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            CoreError::InvalidByte { position, byte } => {
                write!(f, "byte 0x{byte:02x} at position {position} is not valid in this encoding")
            }
            CoreError::MalformedSequence { position } => {
                write!(f, "malformed UTF-8 sequence at position {position}")
            }
            CoreError::TruncatedSequence { position } => {
                write!(f, "truncated UTF-8 sequence at position {position}")
            }
            CoreError::InvalidCodePoint { position, value } => {
                write!(f, "invalid code point U+{value:04X} at position {position}")
            }
            CoreError::OutOfBounds { position } => {
                write!(f, "position {position} is past the end of input")
            }
            CoreError::MalformedEscape { position } => {
                write!(f, "malformed escape sequence at position {position}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
