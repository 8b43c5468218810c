//! Error taxonomy for reader operations.
//!
//! Every failure surfaced by key validation or store access is classified into
//! one of three kinds. Each kind has a stable numeric code that callers may
//! branch on and that appears in the rendered message:
//!
//! | Kind | Code | Name |
//! |------|------|------|
//! | [`ErrorKind::ResourceNotFound`] | 1 | `RESOURCE_NOT_FOUND` |
//! | [`ErrorKind::Internal`] | 2 | `INTERNAL_ERROR` |
//! | [`ErrorKind::Validation`] | 3 | `VALIDATION_ERROR` |

use std::error::Error as StdError;
use std::fmt;

/// Boxed underlying cause carried by every [`RNibError`].
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// The three error classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Requested key or group member is absent.
    ResourceNotFound,
    /// Store communication or payload decode failure.
    Internal,
    /// Caller supplied an empty or invalid identifier.
    Validation,
}

impl ErrorKind {
    /// Stable numeric code.
    pub fn code(&self) -> u32 {
        match self {
            ErrorKind::ResourceNotFound => 1,
            ErrorKind::Internal => 2,
            ErrorKind::Validation => 3,
        }
    }

    /// Name rendered in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::ResourceNotFound => "RESOURCE_NOT_FOUND",
            ErrorKind::Internal => "INTERNAL_ERROR",
            ErrorKind::Validation => "VALIDATION_ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classified reader error.
#[derive(Debug)]
pub enum RNibError {
    /// Requested entity does not exist in the store.
    ResourceNotFound(Cause),

    /// Store failure or undecodable payload.
    Internal(Cause),

    /// Invalid input, detected before any store access.
    Validation(Cause),
}

impl RNibError {
    /// Create a not-found error.
    pub fn resource_not_found(cause: impl Into<Cause>) -> Self {
        RNibError::ResourceNotFound(cause.into())
    }

    /// Create an internal error.
    pub fn internal(cause: impl Into<Cause>) -> Self {
        RNibError::Internal(cause.into())
    }

    /// Create a validation error.
    pub fn validation(cause: impl Into<Cause>) -> Self {
        RNibError::Validation(cause.into())
    }

    /// Classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RNibError::ResourceNotFound(_) => ErrorKind::ResourceNotFound,
            RNibError::Internal(_) => ErrorKind::Internal,
            RNibError::Validation(_) => ErrorKind::Validation,
        }
    }

    /// Stable numeric code (1, 2 or 3).
    pub fn code(&self) -> u32 {
        self.kind().code()
    }

    /// Kind name, e.g. `VALIDATION_ERROR`.
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// The cause this error was created with, unmodified.
    pub fn underlying_cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        match self {
            RNibError::ResourceNotFound(cause)
            | RNibError::Internal(cause)
            | RNibError::Validation(cause) => cause.as_ref(),
        }
    }

    /// Consume the error and return its cause.
    pub fn into_cause(self) -> Cause {
        match self {
            RNibError::ResourceNotFound(cause)
            | RNibError::Internal(cause)
            | RNibError::Validation(cause) => cause,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RNibError::ResourceNotFound(_))
    }

    /// Check if this is an internal error.
    pub fn is_internal(&self) -> bool {
        matches!(self, RNibError::Internal(_))
    }

    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, RNibError::Validation(_))
    }
}

impl fmt::Display for RNibError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {}",
            self.code(),
            self.name(),
            self.underlying_cause()
        )
    }
}

impl StdError for RNibError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.underlying_cause())
    }
}

/// Result type alias for reader operations.
pub type Result<T> = std::result::Result<T, RNibError>;
