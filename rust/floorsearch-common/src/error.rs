use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn empty_input(name: impl Into<String>) -> Error {
        Error(ErrorKind::EmptyInput { name: name.into() }.into())
    }

    pub fn invalid_range(lo: usize, hi: usize, len: usize) -> Error {
        Error(ErrorKind::InvalidRange { lo, hi, len }.into())
    }

    pub fn unsorted_input(name: impl Into<String>, position: usize) -> Error {
        Error(
            ErrorKind::UnsortedInput {
                name: name.into(),
                position,
            }
            .into(),
        )
    }

    pub fn incomparable_value(name: impl Into<String>, position: usize) -> Error {
        Error(
            ErrorKind::IncomparableValue {
                name: name.into(),
                position,
            }
            .into(),
        )
    }

    pub fn kind_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Error {
        Error(
            ErrorKind::KindMismatch {
                expected: expected.into(),
                actual: actual.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("empty input '{name}'")]
    EmptyInput { name: String },

    #[error("invalid search range [{lo}, {hi}] for a sequence of length {len}")]
    InvalidRange { lo: usize, hi: usize, len: usize },

    /// `position` is the index of the first element that is smaller than its predecessor.
    #[error("'{name}' is not sorted in non-decreasing order at position {position}")]
    UnsortedInput { name: String, position: usize },

    /// A value without a total order relation to itself (a floating-point NaN).
    #[error("'{name}' holds an incomparable value at position {position}")]
    IncomparableValue { name: String, position: usize },

    #[error("element kind mismatch: expected {expected}, got {actual}")]
    KindMismatch { expected: String, actual: String },
}

impl ErrorKind {
    /// Returns `true` for errors caused by violating an ordering precondition.
    pub fn is_ordering_violation(&self) -> bool {
        matches!(
            self,
            ErrorKind::UnsortedInput { .. } | ErrorKind::IncomparableValue { .. }
        )
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
