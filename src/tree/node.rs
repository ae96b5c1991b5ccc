//! Owned n-ary tree node
//!
//! Node = value + ordered list of exclusively owned children.
//! No parent links: ascending is done by shortening a `TreeIndex`
//! and resolving it again from the traversal root.

use std::fmt;

use tracing::debug;

use super::{Nodes, PreOrder, TreeIndex, Values};
use crate::TreeError;

/// Tree node owning its value and its children
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tree<T> {
    value: T,
    children: Vec<Tree<T>>,
}

impl<T> Tree<T> {
    /// Create a leaf holding `value`
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Create a node with pre-built children
    pub fn with_children(value: T, children: Vec<Tree<T>>) -> Self {
        Self { value, children }
    }

    /// Builder form of [`Tree::add_child`]
    pub fn with_child(mut self, value: T) -> Self {
        self.add_child(value);
        self
    }

    /// Builder form of [`Tree::add_subtree`]
    pub fn with_subtree(mut self, subtree: Tree<T>) -> Self {
        self.add_subtree(subtree);
        self
    }

    /// Value held by this node
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the value held by this node
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replace the value, returning the previous one
    pub fn set_value(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    /// Append a leaf holding `value` as the last child
    pub fn add_child(&mut self, value: T) -> &mut Self {
        self.add_subtree(Tree::new(value))
    }

    /// Append `subtree` as the last child
    pub fn add_subtree(&mut self, subtree: Tree<T>) -> &mut Self {
        self.children.push(subtree);
        self
    }

    /// Immediate children, in insertion order
    pub fn children(&self) -> &[Tree<T>] {
        &self.children
    }

    /// Child at a zero-based position
    pub fn child(&self, position: usize) -> Option<&Tree<T>> {
        self.children.get(position)
    }

    /// Mutable child at a zero-based position
    pub fn child_mut(&mut self, position: usize) -> Option<&mut Tree<T>> {
        self.children.get_mut(position)
    }

    /// Number of immediate children
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// True if this node has at least one child
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// True if this node has no children
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Value of the node addressed by `index`
    pub fn get(&self, index: &TreeIndex) -> Result<&T, TreeError> {
        self.subtree(index).map(Tree::value)
    }

    /// Mutable value of the node addressed by `index`
    pub fn get_mut(&mut self, index: &TreeIndex) -> Result<&mut T, TreeError> {
        self.subtree_mut(index).map(Tree::value_mut)
    }

    /// Subtree addressed by `index`; the root index yields `self`
    ///
    /// Each segment is decremented once at its own level.
    pub fn subtree(&self, index: &TreeIndex) -> Result<&Tree<T>, TreeError> {
        let mut node = self;
        for &segment in index.segments() {
            node = node.child_by_segment(segment)?;
        }
        Ok(node)
    }

    /// Mutable subtree addressed by `index`
    pub fn subtree_mut(&mut self, index: &TreeIndex) -> Result<&mut Tree<T>, TreeError> {
        let mut node = self;
        for &segment in index.segments() {
            let position = node.position_of(segment)?;
            node = &mut node.children[position];
        }
        Ok(node)
    }

    /// Detach the subtree addressed by `index` and hand ownership to the caller
    ///
    /// The whole path is resolved before anything is removed, so a failure
    /// leaves the tree untouched.
    pub fn remove_subtree(&mut self, index: &TreeIndex) -> Result<Tree<T>, TreeError> {
        let Some((&last, _)) = index.segments().split_last() else {
            return Err(TreeError::UnsupportedOperation(
                "a tree cannot remove itself",
            ));
        };

        let parent = self.subtree_mut(&index.parent())?;
        let position = parent.position_of(last)?;
        let removed = parent.children.remove(position);
        debug!(%index, remaining = parent.children.len(), "removed subtree");
        Ok(removed)
    }

    /// Detach the child at a zero-based position
    pub fn remove_child_at(&mut self, position: usize) -> Result<Tree<T>, TreeError> {
        if position >= self.children.len() {
            return Err(TreeError::OutOfRange {
                segment: position.saturating_add(1),
                len: self.children.len(),
            });
        }
        Ok(self.children.remove(position))
    }

    /// Values of the immediate children of the node addressed by `index`
    pub fn child_values(&self, index: &TreeIndex) -> Result<Vec<&T>, TreeError> {
        Ok(self
            .subtree(index)?
            .children
            .iter()
            .map(Tree::value)
            .collect())
    }

    /// Call `visit` once for each immediate child, in order
    pub fn for_each_child<F>(&self, visit: F)
    where
        F: FnMut(&Tree<T>),
    {
        self.children.iter().for_each(visit);
    }

    /// Depth-first pre-order traversal yielding each node with its index
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self)
    }

    /// Depth-first pre-order walk yielding each node with its depth
    ///
    /// Cheaper than [`Tree::pre_order`] when indices are not needed.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self)
    }

    /// Depth-first pre-order iterator over every value, root first
    pub fn iter(&self) -> Values<'_, T> {
        Values::new(self)
    }

    /// Every value in pre-order
    pub fn values(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Values of childless nodes, left to right
    ///
    /// A lone root is its own leaf.
    pub fn leaves(&self) -> Vec<&T> {
        self.nodes()
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| node.value())
            .collect()
    }

    /// Number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Segment count of the deepest index in this subtree (0 for a leaf)
    pub fn height(&self) -> usize {
        self.nodes().map(|(depth, _)| depth).max().unwrap_or(0)
    }

    fn position_of(&self, segment: usize) -> Result<usize, TreeError> {
        match segment.checked_sub(1) {
            Some(position) if position < self.children.len() => Ok(position),
            _ => Err(TreeError::OutOfRange {
                segment,
                len: self.children.len(),
            }),
        }
    }

    fn child_by_segment(&self, segment: usize) -> Result<&Tree<T>, TreeError> {
        let position = self.position_of(segment)?;
        Ok(&self.children[position])
    }
}

impl<T> Drop for Tree<T> {
    // Flatten descendants onto a heap stack so drop depth stays constant.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Values<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Indented outline, one `<index> <value>` line per node in pre-order
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, node) in self.pre_order() {
            writeln!(
                f,
                "{:indent$}{} {}",
                "",
                index,
                node.value(),
                indent = index.len() * 2
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree<i32> {
        Tree::new(0)
            .with_subtree(Tree::new(1).with_child(4).with_child(5))
            .with_child(2)
    }

    #[test]
    fn test_chained_construction() {
        let mut tree = Tree::new("root");
        tree.add_child("a").add_child("b").add_subtree(Tree::new("c"));

        assert_eq!(tree.child_count(), 3);
        assert!(tree.has_children());
        assert!(tree.child(2).unwrap().is_leaf());
        assert!(tree.child(3).is_none());
    }

    #[test]
    fn test_get_decrements_once_per_level() {
        let tree = sample();

        assert_eq!(*tree.get(&TreeIndex::root()).unwrap(), 0);
        assert_eq!(*tree.get(&TreeIndex::new([1])).unwrap(), 1);
        assert_eq!(*tree.get(&TreeIndex::new([1, 2])).unwrap(), 5);
        assert_eq!(*tree.get(&TreeIndex::new([2])).unwrap(), 2);
    }

    #[test]
    fn test_get_out_of_range() {
        let tree = sample();

        assert!(matches!(
            tree.get(&TreeIndex::new([3])),
            Err(TreeError::OutOfRange { segment: 3, len: 2 })
        ));
        assert!(matches!(
            tree.get(&TreeIndex::new([0])),
            Err(TreeError::OutOfRange { segment: 0, len: 2 })
        ));
        assert!(matches!(
            tree.get(&TreeIndex::new([2, 1])),
            Err(TreeError::OutOfRange { segment: 1, len: 0 })
        ));
    }

    #[test]
    fn test_subtree_identity() {
        let tree = sample();
        assert!(std::ptr::eq(tree.subtree(&TreeIndex::root()).unwrap(), &tree));
    }

    #[test]
    fn test_set_value_and_get_mut() {
        let mut tree = sample();

        assert_eq!(tree.set_value(10), 0);
        *tree.get_mut(&TreeIndex::new([1, 1])).unwrap() = 40;

        assert_eq!(tree.values(), vec![&10, &1, &40, &5, &2]);
    }

    #[test]
    fn test_remove_subtree() {
        let mut tree = sample();

        let removed = tree.remove_subtree(&TreeIndex::new([1, 1])).unwrap();
        assert_eq!(*removed.value(), 4);
        assert_eq!(tree.values(), vec![&0, &1, &5, &2]);

        let removed = tree.remove_subtree(&TreeIndex::new([1])).unwrap();
        assert_eq!(removed.values(), vec![&1, &5]);
        assert_eq!(tree.values(), vec![&0, &2]);
    }

    #[test]
    fn test_remove_failures_leave_tree_unchanged() {
        let mut tree = sample();
        let before = tree.clone();

        assert!(matches!(
            tree.remove_subtree(&TreeIndex::root()),
            Err(TreeError::UnsupportedOperation(_))
        ));
        assert!(matches!(
            tree.remove_subtree(&TreeIndex::new([1, 3])),
            Err(TreeError::OutOfRange { segment: 3, len: 2 })
        ));
        assert!(matches!(
            tree.remove_subtree(&TreeIndex::new([5, 1])),
            Err(TreeError::OutOfRange { segment: 5, len: 2 })
        ));
        assert!(matches!(
            tree.remove_child_at(2),
            Err(TreeError::OutOfRange { segment: 3, len: 2 })
        ));

        assert_eq!(tree, before);
    }

    #[test]
    fn test_remove_child_at_is_zero_based() {
        let mut tree = sample();
        let removed = tree.remove_child_at(1).unwrap();

        assert_eq!(*removed.value(), 2);
        assert_eq!(tree.child_count(), 1);
    }

    #[test]
    fn test_leaves_and_values() {
        let tree = sample();

        assert_eq!(tree.leaves(), vec![&4, &5, &2]);
        assert_eq!(tree.values(), vec![&0, &1, &4, &5, &2]);
        assert_eq!(Tree::new('x').leaves(), vec![&'x']);
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_child_values() {
        let tree = sample();

        assert_eq!(tree.child_values(&TreeIndex::root()).unwrap(), vec![&1, &2]);
        assert_eq!(tree.child_values(&TreeIndex::new([1])).unwrap(), vec![&4, &5]);
        assert!(tree.child_values(&TreeIndex::new([2])).unwrap().is_empty());
        assert!(tree.child_values(&TreeIndex::new([9])).is_err());
    }

    #[test]
    fn test_for_each_child_does_not_recurse() {
        let tree = sample();
        let mut seen = Vec::new();
        tree.for_each_child(|child| seen.push(*child.value()));

        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_outline() {
        let rendered = sample().to_string();
        let expected = "0 0\n  1 1\n    1.1 4\n    1.2 5\n  2 2\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_deep_chain_drops_without_recursion() {
        let mut tree = Tree::new(0usize);
        for value in 1..200_000 {
            tree = Tree::new(value).with_subtree(tree);
        }
        assert_eq!(tree.height(), 199_999);
        drop(tree);
    }
}
