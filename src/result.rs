use crate::error::Error as R34Err;

/// Shorthand for results returned by this crate.
pub type Result<T> = std::result::Result<T, R34Err>;
