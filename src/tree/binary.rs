//! Binary tree view over [`Tree`]
//!
//! Root has either no children or exactly two: left (segment 1) and right (segment 2).
//! Below the root, subtrees are ordinary trees.

use super::Tree;
use crate::TreeError;

const LEFT: usize = 0;
const RIGHT: usize = 1;

/// Tree whose root carries a left and a right subtree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryTree<T> {
    tree: Tree<T>,
}

impl<T> BinaryTree<T> {
    /// Root with both subtrees
    pub fn new(value: T, left: Tree<T>, right: Tree<T>) -> Self {
        Self {
            tree: Tree::with_children(value, vec![left, right]),
        }
    }

    /// Root without subtrees
    pub fn leaf(value: T) -> Self {
        Self {
            tree: Tree::new(value),
        }
    }

    /// Left subtree, if present
    pub fn left(&self) -> Option<&Tree<T>> {
        self.tree.child(LEFT)
    }

    /// Right subtree, if present
    pub fn right(&self) -> Option<&Tree<T>> {
        self.tree.child(RIGHT)
    }

    /// Replace the left subtree, returning the old one
    pub fn set_left(&mut self, subtree: Tree<T>) -> Result<Tree<T>, TreeError> {
        self.replace(LEFT, subtree)
    }

    /// Replace the right subtree, returning the old one
    pub fn set_right(&mut self, subtree: Tree<T>) -> Result<Tree<T>, TreeError> {
        self.replace(RIGHT, subtree)
    }

    /// Underlying general tree
    pub fn as_tree(&self) -> &Tree<T> {
        &self.tree
    }

    /// Unwrap into the underlying general tree
    pub fn into_tree(self) -> Tree<T> {
        self.tree
    }

    fn replace(&mut self, position: usize, subtree: Tree<T>) -> Result<Tree<T>, TreeError> {
        let len = self.tree.child_count();
        let slot = self.tree.child_mut(position).ok_or(TreeError::OutOfRange {
            segment: position + 1,
            len,
        })?;
        Ok(std::mem::replace(slot, subtree))
    }
}

impl<T> AsRef<Tree<T>> for BinaryTree<T> {
    fn as_ref(&self) -> &Tree<T> {
        &self.tree
    }
}

impl<T> From<BinaryTree<T>> for Tree<T> {
    fn from(binary: BinaryTree<T>) -> Self {
        binary.tree
    }
}
