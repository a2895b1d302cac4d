//! Error types for the jarow library.
//!
//! All failures are precondition violations reported synchronously to the
//! caller: invalid metric parameters or malformed typo tables. Degenerate
//! inputs (empty strings, fully dissimilar strings, zero-match pairs) are
//! well-defined scores, never errors.
//!
//! # Examples
//!
//! ```
//! use jarow::error::{MetricError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MetricError::invalid_parameter("typo_scale must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for jarow operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricError {
    /// Invalid metric parameters (bad scale, threshold, or boost settings).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A typo table pair was inserted twice, which would silently overwrite
    /// an existing score.
    #[error("Conflicting typo table entry: {row:?} -> {col:?}")]
    ConflictingEntry {
        /// Outer key of the offending entry.
        row: char,
        /// Inner key of the offending entry.
        col: char,
    },

    /// A typo pair list had odd length, leaving one character unpaired.
    #[error("Typo pair list has odd length ({0}); characters must come in pairs")]
    UnpairedChar(usize),
}

/// Result type alias for operations that may fail with MetricError.
pub type Result<T> = std::result::Result<T, MetricError>;

impl MetricError {
    /// Create a new invalid parameter error.
    pub fn invalid_parameter<S: Into<String>>(msg: S) -> Self {
        MetricError::InvalidParameter(msg.into())
    }
}
