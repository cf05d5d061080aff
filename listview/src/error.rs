//! Error types for list operations.

use thiserror::Error;

/// Errors returned by fallible list operations.
///
/// These are contract violations on the caller's side. Degenerate geometry
/// (zero viewport, zero rows) never produces an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListError {
    /// An index was outside `[0, len)` (or `[0, len]` for insertion).
    #[error("index {index} is out of range for a list of {len} items")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of items at the time of the call.
        len: usize,
    },

    /// A selected item was requested while nothing is selected.
    #[error("nothing is selected")]
    NoSelection,

    /// The operation requires a different selection strategy.
    #[error("operation requires {expected} selection")]
    SelectionMode {
        /// Name of the selection strategy the operation needs.
        expected: &'static str,
    },

    /// A configuration value is not usable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ListError {
    /// Shorthand for [`ListError::IndexOutOfRange`].
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ListError>;
