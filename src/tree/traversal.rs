//! Stack-based depth-first traversal
//!
//! Visiting order is pre-order, left to right:
//!   node, then each child subtree in insertion order.
//! An explicit work stack replaces native recursion, so traversal depth
//! is bounded by heap, not by the call stack.

use super::{Tree, TreeIndex};

/// Pre-order traversal yielding `(index, node)` pairs
///
/// Indices are relative to the node the traversal started from.
/// Children of a yielded node are only expanded on the following call to
/// `next`, which lets [`PreOrder::skip_subtree`] prune them.
#[derive(Debug)]
pub struct PreOrder<'a, T> {
    /// Pending nodes; top of stack is visited next
    stack: Vec<(TreeIndex, &'a Tree<T>)>,

    /// Most recently yielded node whose children are not yet on the stack
    expand: Option<(TreeIndex, &'a Tree<T>)>,
}

impl<'a, T> PreOrder<'a, T> {
    /// Start a traversal at `root`
    pub fn new(root: &'a Tree<T>) -> Self {
        Self {
            stack: vec![(TreeIndex::root(), root)],
            expand: None,
        }
    }

    /// Do not descend into the node returned by the last call to `next`
    pub fn skip_subtree(&mut self) {
        self.expand = None;
    }

    /// Number of nodes waiting on the work stack
    pub fn pending(&self) -> usize {
        self.stack.len()
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = (TreeIndex, &'a Tree<T>);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((index, node)) = self.expand.take() {
            // Push right to left so the leftmost child is popped first
            for (position, child) in node.children().iter().enumerate().rev() {
                self.stack.push((index.child(position + 1), child));
            }
        }

        let (index, node) = self.stack.pop()?;
        self.expand = Some((index.clone(), node));
        Some((index, node))
    }
}

/// Pre-order walk yielding `(depth, node)` pairs
#[derive(Debug)]
pub struct Nodes<'a, T> {
    stack: Vec<(usize, &'a Tree<T>)>,
}

impl<'a, T> Nodes<'a, T> {
    /// Start a walk at `root` (depth 0)
    pub fn new(root: &'a Tree<T>) -> Self {
        Self {
            stack: vec![(0, root)],
        }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = (usize, &'a Tree<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children().iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

/// Pre-order iterator over values
#[derive(Debug)]
pub struct Values<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<'a, T> Values<'a, T> {
    /// Iterate the values of `root` and all its descendants
    pub fn new(root: &'a Tree<T>) -> Self {
        Self {
            nodes: Nodes::new(root),
        }
    }
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|(_, node)| node.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree<char> {
        Tree::new('r')
            .with_subtree(Tree::new('a').with_child('c').with_child('d'))
            .with_subtree(Tree::new('b').with_child('e'))
    }

    #[test]
    fn test_pre_order_indices() {
        let tree = sample();
        let visited: Vec<(String, char)> = tree
            .pre_order()
            .map(|(index, node)| (index.to_string(), *node.value()))
            .collect();

        assert_eq!(
            visited,
            vec![
                ("0".to_string(), 'r'),
                ("1".to_string(), 'a'),
                ("1.1".to_string(), 'c'),
                ("1.2".to_string(), 'd'),
                ("2".to_string(), 'b'),
                ("2.1".to_string(), 'e'),
            ]
        );
    }

    #[test]
    fn test_skip_subtree_prunes_descendants() {
        let tree = sample();
        let mut traversal = tree.pre_order();
        let mut visited = Vec::new();

        while let Some((_, node)) = traversal.next() {
            visited.push(*node.value());
            if *node.value() == 'a' {
                traversal.skip_subtree();
            }
        }

        assert_eq!(visited, vec!['r', 'a', 'b', 'e']);
    }

    #[test]
    fn test_nodes_depths() {
        let tree = sample();
        let depths: Vec<usize> = tree.nodes().map(|(depth, _)| depth).collect();

        assert_eq!(depths, vec![0, 1, 2, 2, 1, 2]);
    }

    #[test]
    fn test_values_match_pre_order() {
        let tree = sample();
        let from_pre_order: Vec<&char> = tree.pre_order().map(|(_, node)| node.value()).collect();

        assert_eq!(tree.iter().collect::<Vec<_>>(), from_pre_order);
    }

    #[test]
    fn test_work_stack_stays_small_on_wide_tree() {
        let mut tree = Tree::new(0);
        for value in 1..=100 {
            tree.add_child(value);
        }

        let mut traversal = tree.pre_order();
        traversal.next();
        traversal.next();
        // 99 unvisited siblings, nothing deeper
        assert_eq!(traversal.pending(), 99);
    }
}
