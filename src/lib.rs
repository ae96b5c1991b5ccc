//! # Path-addressed n-ary trees
//!
//! Generic, in-memory trees where each node owns an ordered list of
//! children, plus the queries built on top of them.
//!
//! ## Core pieces
//!
//! 1. **[`TreeIndex`]**: immutable root-to-node path of 1-based child positions
//! 2. **[`Tree`]**: recursive node with insert/remove/resolve by index
//! 3. **Queries**: predicate search, set containment, smallest common
//!    subtrees (walk down) and first common ancestor (walk up)
//!
//! All traversals use an explicit work stack, so deep trees are bounded by
//! heap rather than by the call stack.
//!
//! ## Usage Example
//!
//! ```
//! use treepath::{Tree, TreeIndex};
//!
//! let tree = Tree::new(0)
//!     .with_subtree(Tree::new(1).with_child(4).with_child(5))
//!     .with_child(2);
//!
//! assert_eq!(*tree.get(&"1.2".parse::<TreeIndex>()?)?, 5);
//!
//! let found = tree.find_matches(|value| *value > 3);
//! assert_eq!(found[0].index.to_string(), "1.1");
//!
//! let common = tree.smallest_common_subtrees(&[4, 5]);
//! assert_eq!(common[0].index, TreeIndex::new([1]));
//! # Ok::<(), treepath::TreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod query; // Search and common-subtree algorithms
pub mod tree; // Tree node, path index, traversal

// Re-exports for convenience
pub use query::{ElementMatch, SubtreeMatch};
pub use tree::{BinaryTree, PreOrder, Tree, TreeIndex};

use thiserror::Error;

/// Result alias for structural tree operations
pub type Result<T, E = TreeError> = std::result::Result<T, E>;

/// Errors raised by structural tree operations
///
/// Every operation validates before mutating, so a returned error means the
/// tree was left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Operation needs at least one index segment
    #[error("cannot take the {operation} of an empty tree index")]
    EmptyIndex {
        /// Operation that was attempted
        operation: &'static str,
    },

    /// Operation needs exactly one index segment
    #[error("tree index has {len} segments, expected exactly one")]
    NotUnique {
        /// Actual number of segments
        len: usize,
    },

    /// A segment or position does not address an existing child
    #[error("child {segment} out of range for {len} children")]
    OutOfRange {
        /// 1-based child position that failed to resolve
        segment: usize,
        /// Children available at that level
        len: usize,
    },

    /// Operation not allowed on this node
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// Text could not be parsed as a tree index
    #[error("invalid tree index: {0}")]
    InvalidIndex(String),
}
