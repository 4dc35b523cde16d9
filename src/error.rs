//! Error types for graph mutation.
//!
//! Only malformed arguments are errors. Looking up a vertex or edge that does
//! not exist is an ordinary outcome and is reported through return values
//! (`false`, an empty map, or a weight of `0`).

use crate::graph::Weight;

/// Result type for fallible graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Graph error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// `set` was called with a weight below zero.
    #[error("invalid argument: edge weight must be non-negative, got {0}")]
    NegativeWeight(Weight),

    /// An edge value was constructed with a weight that is not strictly positive.
    #[error("invalid argument: stored edge weight must be positive, got {0}")]
    NonPositiveWeight(Weight),
}

impl GraphError {
    /// Returns `true` if the error was caused by an invalid caller argument.
    ///
    /// Every current variant is an argument error; the graph is left untouched
    /// whenever one is returned.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::NegativeWeight(_) | Self::NonPositiveWeight(_))
    }

    /// The offending weight.
    pub fn weight(&self) -> Weight {
        match *self {
            Self::NegativeWeight(w) | Self::NonPositiveWeight(w) => w,
        }
    }
}
