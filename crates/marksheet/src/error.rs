//! Error types for the marksheet engine

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running checks
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the core data model (bad address, unknown sheet, ...)
    #[error(transparent)]
    Core(#[from] marksheet_core::Error),

    /// Expected-value table dimensions do not match the target range
    #[error(
        "Expected-value table is {actual_rows}x{actual_cols}, \
         but range covers {expected_rows}x{expected_cols}"
    )]
    ShapeMismatch {
        /// Rows the range covers
        expected_rows: u32,
        /// Columns the range covers
        expected_cols: u16,
        /// Rows in the supplied table
        actual_rows: usize,
        /// Columns in the first mismatching table row
        actual_cols: usize,
    },

    /// Unrecognized IANA timezone identifier
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}
