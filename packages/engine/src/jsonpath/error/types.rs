//! JSON Path Error Types
//!
//! Compile-time errors (`InvalidPathFormat`, `FilterBindingMismatch`,
//! `InvalidPattern`, `InvalidConfig`) and evaluation-time errors (`NoSuchPath`,
//! `Internal`) share one error type distinguished by kind.

/// JSON Path processing error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed path grammar or inline predicate
    InvalidPathFormat,
    /// Fewer filters supplied than `[?]` placeholders in the path
    FilterBindingMismatch,
    /// A single-value read matched nothing
    NoSuchPath,
    /// A regular expression operand failed to compile
    InvalidPattern,
    /// Configuration values rejected by validation
    InvalidConfig,
    /// An evaluation outcome that the path shape should have ruled out
    Internal,
}

impl ErrorKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidPathFormat => "invalid path format",
            ErrorKind::FilterBindingMismatch => "filter binding mismatch",
            ErrorKind::NoSuchPath => "no such path",
            ErrorKind::InvalidPattern => "invalid pattern",
            ErrorKind::InvalidConfig => "invalid configuration",
            ErrorKind::Internal => "internal error",
        }
    }
}

/// Main JSON Path error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("JSON Path Error ({}): {message}", .kind.as_str())]
pub struct JsonPathError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Result type for JSON Path operations
pub type JsonPathResult<T> = Result<T, JsonPathError>;

impl JsonPathError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    #[must_use]
    pub fn is_compile_time(&self) -> bool {
        !matches!(self.kind, ErrorKind::NoSuchPath | ErrorKind::Internal)
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig, msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, msg.into())
    }
}
