//! Error type shared by the list algorithms.

use thiserror::Error;

/// Precondition violations reported by the list algorithms.
///
/// None of these are transient: the same input always produces the same
/// error, so callers should not retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The value at `index` cannot be ordered against the rest of the list.
    #[error("value at position {index} is not comparable with the list order")]
    NotComparable { index: usize },

    /// The value at `index` is smaller than its predecessor.
    #[error("list is not sorted: value at position {index} decreases")]
    NotSorted { index: usize },

    /// A node handed in by the caller is not reachable from the head.
    #[error("node is not reachable from the list head")]
    NodeNotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
