//! API error types

use langutils_core::CoreError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Call-shape problem, e.g. several characters passed where one is expected
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Input could not be decoded or counted
    #[error("encoding error: {0}")]
    Encoding(CoreError),

    /// Encoding name or code not recognized
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    /// Language name or code not recognized
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// Escape encoding name or code not recognized
    #[error("unknown escape encoding: {0}")]
    UnknownEscapeEncoding(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Byte offset at or past the end of the input
    #[error("position {0} is past the end of input")]
    OutOfBounds(usize),
}

impl ApiError {
    /// Byte offset in the input that the error points at, if any
    pub fn position(&self) -> Option<usize> {
        match self {
            ApiError::Encoding(err) => err.position(),
            ApiError::OutOfBounds(position) => Some(*position),
            _ => None,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidArgument { reason } => ApiError::InvalidArgument(reason.to_string()),
            CoreError::OutOfBounds { position } => ApiError::OutOfBounds(position),
            other => ApiError::Encoding(other),
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_are_routed() {
        let err: ApiError = CoreError::InvalidArgument {
            reason: "expected one character, got several",
        }
        .into();
        assert!(matches!(err, ApiError::InvalidArgument(ref msg) if msg.contains("several")));

        let err: ApiError = CoreError::TruncatedSequence { position: 4 }.into();
        assert!(matches!(
            err,
            ApiError::Encoding(CoreError::TruncatedSequence { position: 4 })
        ));
        assert_eq!(
            err.to_string(),
            "encoding error: truncated UTF-8 sequence at position 4"
        );
        assert_eq!(err.position(), Some(4));
    }

    #[test]
    fn test_out_of_bounds_keeps_position() {
        let err: ApiError = CoreError::OutOfBounds { position: 9 }.into();
        assert!(matches!(err, ApiError::OutOfBounds(9)));
        assert_eq!(err.position(), Some(9));
        assert_eq!(err.to_string(), "position 9 is past the end of input");

        let err = ApiError::UnknownLanguage("klingon".to_string());
        assert_eq!(err.position(), None);
    }
}
