//! Common error infrastructure for maze-core.
//!
//! Domain-specific errors ([`crate::GridError`], [`crate::PathError`],
//! [`crate::ConfigError`]) live beside the code that produces them. This module
//! provides the classification they share so callers can decide between
//! retrying on a later tick and aborting the run.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Recoverable error - a later tick with more knowledge may succeed.
    ///
    /// Examples: no path under the current belief map
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: cell outside the grid, heuristic weight below 1.0
    Validation,

    /// Fatal error - the simulation must not start.
    ///
    /// Examples: malformed maze matrix
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common behaviour for all maze-core error types.
pub trait MazeError: std::error::Error {
    /// Classifies the error for recovery decisions.
    fn severity(&self) -> ErrorSeverity;

    /// Stable machine-readable code, suitable for logs.
    fn error_code(&self) -> &'static str;
}
