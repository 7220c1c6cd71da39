//! Errors raised when a precondition of a tree operation doesn't hold.

use thiserror::Error;

/// Result type alias using our [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong building or querying a [`Tree`][crate::Tree].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A bulk constructor was handed nothing to build from.
    #[error("cannot build a tree from empty input")]
    EmptyInput,

    /// Input to [`Tree::from_sorted`][crate::Tree::from_sorted] wasn't strictly ascending.
    #[error("input is not strictly ascending at index {index}")]
    NotStrictlyAscending {
        /// Position of the first element not greater than its predecessor.
        index: usize,
    },

    /// Input to [`Tree::from_preorder`][crate::Tree::from_preorder] isn't the pre-order
    /// traversal of any binary search tree.
    #[error("input is not a binary search tree pre-order traversal (bad element at index {index})")]
    InvalidPreorder {
        /// Position of the first element outside of its admissible range.
        index: usize,
    },

    /// `k` wasn't in `1..=len` for a rank query.
    #[error("rank {k} is out of range for a tree with {len} nodes")]
    RankOutOfRange {
        /// The requested rank.
        k: usize,
        /// How many nodes the tree has.
        len: usize,
    },

    /// Two fixture nodes share an id.
    #[error("duplicate node id: {0}")]
    DuplicateId(String),

    /// A fixture node points at an id that doesn't exist.
    #[error("unknown node id: {0}")]
    UnknownNode(String),

    /// A fixture node is reachable along more than one path (or via a cycle).
    #[error("node {0} has more than one parent")]
    SharedNode(String),

    /// A fixture node can't be reached from the root.
    #[error("node {0} is not reachable from the root")]
    DetachedNode(String),

    /// A fixture describes a tree that breaks the search tree ordering.
    #[error("nodes do not satisfy the binary search tree property")]
    NotSearchTree,
}
