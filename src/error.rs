//! Error types for the balanced trees.

use thiserror::Error;

/// Result type alias using TreeError.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors reported when building a tree or when checking its structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Invalid degree {0}: must be at least 1")]
    InvalidDegree(usize),

    // Structural violations found by `check_invariants`
    #[error("Keys out of order at depth {depth}, index {index}")]
    KeysOutOfOrder { depth: usize, index: usize },

    #[error("Node at depth {depth} holds {len} keys, expected between {min} and {max}")]
    Occupancy {
        depth: usize,
        len: usize,
        min: usize,
        max: usize,
    },

    #[error("Internal node at depth {depth} holds {keys} keys but {children} children")]
    ChildCount {
        depth: usize,
        keys: usize,
        children: usize,
    },

    #[error("Leaf found at depth {found}, other leaves are at depth {expected}")]
    UnevenLeafDepth { expected: usize, found: usize },

    #[error("Key in child {child} of a node at depth {depth} falls outside its separators")]
    SeparatorViolation { depth: usize, child: usize },

    #[error("Node at depth {depth} has balance factor {balance}")]
    Unbalanced { depth: usize, balance: isize },

    #[error("Node at depth {depth} caches height {cached}, actual height is {actual}")]
    StaleHeight {
        depth: usize,
        cached: usize,
        actual: usize,
    },
}
