//! Search and containment queries over [`Tree`]
//!
//! - Predicate search: every matching value with its index, in pre-order.
//! - Containment: which subtrees hold all of a set of values.
//! - Common subtrees: deepest subtrees holding a value set (walk down),
//!   and the nearest enclosing subtree holding a value (walk up).
//!
//! Query results borrow from the tree; they never take ownership.
//! Finding nothing is an empty result, not an error.

mod common;
mod search;

use std::fmt;

use crate::tree::{Tree, TreeIndex};

/// A value found by predicate search, with the index of its node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementMatch<'a, T> {
    /// Matching value
    pub value: &'a T,

    /// Index of the node holding `value`
    pub index: TreeIndex,
}

impl<T: fmt::Display> fmt::Display for ElementMatch<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.value, self.index)
    }
}

/// A subtree found by a containment query, with its index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtreeMatch<'a, T> {
    /// Borrowed subtree
    pub tree: &'a Tree<T>,

    /// Index of the subtree's root
    pub index: TreeIndex,
}

impl<T> SubtreeMatch<'_, T> {
    /// Depth of the match below the traversal root
    pub fn depth(&self) -> usize {
        self.index.len()
    }
}

impl<T> fmt::Display for SubtreeMatch<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.index, f)
    }
}
