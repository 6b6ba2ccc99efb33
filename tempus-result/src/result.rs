use crate::error::Error;

/// Result type alias used throughout Tempus.
///
/// Shorthand for `std::result::Result<T, Error>`; every fallible operation in
/// the workspace returns this type.
pub type Result<T> = std::result::Result<T, Error>;
