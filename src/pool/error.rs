//! Object pool error types.

use std::fmt;
use std::time::Duration;

/// Non-fatal outcomes of a bounded acquisition.
///
/// Misuse of a closed pool (release or close after close) is not represented
/// here; it panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// No resource became available before the deadline.
    Timeout(Duration),

    /// The pool was closed before a resource could be handed out.
    Closed,
}

impl PoolError {
    /// Check if this is a timeout error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, PoolError::Timeout(_))
    }

    /// Check if this is a closed error.
    pub fn is_closed(&self) -> bool {
        matches!(self, PoolError::Closed)
    }
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::Timeout(duration) => {
                write!(f, "no pooled resource available after {:?}", duration)
            }
            PoolError::Closed => write!(f, "pool has been closed"),
        }
    }
}

impl std::error::Error for PoolError {}

/// Result type alias for pool operations.
pub type PoolResult<T> = Result<T, PoolError>;
