use std::fmt;

use thiserror::Error;

/// Unified error type for the Tempus crates.
///
/// Every failure raised while resolving a temporal function signature,
/// extracting a timezone, or executing a transform over a batch surfaces as
/// one of these variants. Errors propagate with `?` and are never recovered
/// internally: a failed type resolution aborts query compilation and a
/// failed execution aborts the query.
///
/// # Thread Safety
///
/// `Error` is `Send` and `Sync`, so it can cross the boundaries of whatever
/// batch scheduling the calling engine uses.
#[derive(Error, Debug)]
pub enum Error {
    /// A temporal function was called with a number of arguments it does not
    /// accept.
    ///
    /// Raised only during signature resolution (and by the same check at the
    /// start of execution); never per row.
    #[error(
        "Number of arguments for function {function} doesn't match: passed {passed}, should be {expected}"
    )]
    ArgumentCountMismatch {
        function: &'static str,
        passed: usize,
        expected: &'static str,
    },

    /// An argument has a type the function cannot accept.
    ///
    /// This covers:
    /// - a non temporal first argument
    /// - a second argument that is not a constant string
    /// - a timezone argument on a day-only input whose result has no timezone
    /// - a physical encoding reaching the dispatch engine that it does not
    ///   recognize
    ///
    /// The message names the function and the offending type.
    #[error("{0}")]
    IllegalArgumentType(String),

    /// A timezone name that the timezone database does not know.
    #[error("Invalid time zone: {0}")]
    InvalidTimeZone(String),

    /// Invalid user input that is not a type error, such as a malformed
    /// `DATE` literal.
    #[error("Invalid argument: {0}")]
    InvalidArgumentError(String),

    /// Arrow library error raised by a kernel used while materializing
    /// results.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Internal error indicating a bug or unexpected state.
    ///
    /// This should never occur during normal operation. If it does, the
    /// message describes which invariant was violated.
    #[error("An internal operation failed: {0}")]
    Internal(String),
}

/// Stable, payload-free classification of an [`Error`].
///
/// Callers that map errors onto user-visible diagnostic codes match on this
/// instead of on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ArgumentCountMismatch,
    IllegalArgumentType,
    InvalidTimeZone,
    InvalidArgument,
    Arrow,
    Internal,
}

impl ErrorKind {
    /// Stable upper-snake-case code for diagnostics.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::ArgumentCountMismatch => "NUMBER_OF_ARGUMENTS_DOESNT_MATCH",
            ErrorKind::IllegalArgumentType => "ILLEGAL_TYPE_OF_ARGUMENT",
            ErrorKind::InvalidTimeZone => "INVALID_TIME_ZONE",
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::Arrow => "ARROW_ERROR",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ArgumentCountMismatch { .. } => ErrorKind::ArgumentCountMismatch,
            Error::IllegalArgumentType(_) => ErrorKind::IllegalArgumentType,
            Error::InvalidTimeZone(_) => ErrorKind::InvalidTimeZone,
            Error::InvalidArgumentError(_) => ErrorKind::InvalidArgument,
            Error::Arrow(_) => ErrorKind::Arrow,
            Error::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Create an arity error for a function accepting one or two arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use tempus_result::{Error, ErrorKind};
    ///
    /// let err = Error::argument_count_mismatch("toYear", 3);
    /// assert_eq!(err.kind(), ErrorKind::ArgumentCountMismatch);
    /// assert!(err.to_string().contains("passed 3, should be 1 or 2"));
    /// ```
    #[inline]
    pub fn argument_count_mismatch(function: &'static str, passed: usize) -> Self {
        Error::ArgumentCountMismatch {
            function,
            passed,
            expected: "1 or 2",
        }
    }

    /// Create the standard "illegal type of argument" error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tempus_result::Error;
    ///
    /// let err = Error::illegal_argument_type("String", "toMonth");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Illegal type String of argument of function toMonth"
    /// );
    /// ```
    #[inline]
    pub fn illegal_argument_type(type_name: impl fmt::Display, function: &str) -> Self {
        Error::IllegalArgumentType(format!(
            "Illegal type {type_name} of argument of function {function}"
        ))
    }

    /// Create an invalid timezone error from any displayable error.
    #[inline]
    pub fn invalid_time_zone<E: fmt::Display>(name: &str, err: E) -> Self {
        Error::InvalidTimeZone(format!("'{name}': {err}"))
    }
}
