//! Error types for the random color core.

use thiserror::Error;

/// Errors produced by color generation and parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// A caller-supplied argument was absent or out of range
    /// (missing options list, negative count, unknown name, bad recipe).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A hue matched no band in the bound table. The table partitions the
    /// circle, so this only happens if the table itself is malformed.
    #[error("internal error: hue {0} is not covered by any color band")]
    HueOutsideTable(i32),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}
