//! Error raised when data has the wrong format, e.g. a reader that found
//! content it could not parse.

use std::error::Error as StdError;
use std::fmt;
use std::io;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Data had an unexpected format. Carries a message, an underlying cause, or both.
#[derive(Debug, thiserror::Error)]
pub struct InvalidFormatError {
    message: Option<String>,
    #[source]
    cause: Option<BoxError>,
}

impl InvalidFormatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            cause: None,
        }
    }

    pub fn from_cause(cause: impl Into<BoxError>) -> Self {
        Self {
            message: None,
            cause: Some(cause.into()),
        }
    }

    pub fn with_cause(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self {
            message: Some(message.into()),
            cause: Some(cause.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, &self.cause) {
            (Some(msg), _) => write!(f, "invalid format: {}", msg),
            (None, Some(cause)) => write!(f, "invalid format: {}", cause),
            (None, None) => write!(f, "invalid format"),
        }
    }
}

impl From<InvalidFormatError> for io::Error {
    fn from(err: InvalidFormatError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_only() {
        let err = InvalidFormatError::new("expected header");
        assert_eq!(err.to_string(), "invalid format: expected header");
        assert_eq!(err.message(), Some("expected header"));
        assert!(err.source().is_none());
    }

    #[test]
    fn cause_only_displays_cause() {
        let cause = String::from_utf8(vec![0xff]).unwrap_err();
        let err = InvalidFormatError::from_cause(cause);
        assert!(err.message().is_none());
        assert!(err.to_string().starts_with("invalid format: "));
        assert!(err.source().is_some());
    }

    #[test]
    fn message_and_cause() {
        let cause = io::Error::new(io::ErrorKind::UnexpectedEof, "truncated");
        let err = InvalidFormatError::with_cause("bad list", cause);
        assert_eq!(err.to_string(), "invalid format: bad list");
        assert_eq!(err.source().unwrap().to_string(), "truncated");
    }

    #[test]
    fn converts_into_invalid_data_io_error() {
        let io_err: io::Error = InvalidFormatError::new("nope").into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
        let inner = io_err
            .get_ref()
            .and_then(|e| e.downcast_ref::<InvalidFormatError>())
            .expect("inner error is InvalidFormatError");
        assert_eq!(inner.message(), Some("nope"));
    }
}
