//! Error type for the fallible heap operations.

use std::fmt;

/// Error returned by `decrease_key`, `delete`, and `k_min` on a violated
/// precondition. The heap is left untouched in every error case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The delta passed to `decrease_key` was negative
    NegativeDelta,
    /// The handle's node is no longer in this heap (already removed)
    StaleHandle,
    /// `k_min` requires the source heap to consist of exactly one tree
    NotSingleTree,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::NegativeDelta => {
                write!(f, "decrease_key requires a non-negative delta")
            }
            HeapError::StaleHandle => {
                write!(f, "handle is no longer valid (node was removed)")
            }
            HeapError::NotSingleTree => {
                write!(f, "k_min requires a heap consisting of exactly one tree")
            }
        }
    }
}

impl std::error::Error for HeapError {}
