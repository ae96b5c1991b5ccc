//! Shared fixtures for integration tests

#![allow(dead_code)]

use treepath::Tree;

/// `0 → [1 → [4, 5], 2]`
pub fn small_tree() -> Tree<i32> {
    Tree::new(0)
        .with_subtree(Tree::new(1).with_child(4).with_child(5))
        .with_child(2)
}

/// Binary fan-out of depth three, numbered depth-first by subtree
///
/// `0 → [1 → [2 → [4, 5], 3 → [6, 7]], 8 → [9 → [11, 12], 10 → [13, 14]]]`
pub fn numbered_tree() -> Tree<i32> {
    Tree::new(0)
        .with_subtree(
            Tree::new(1)
                .with_subtree(Tree::new(2).with_child(4).with_child(5))
                .with_subtree(Tree::new(3).with_child(6).with_child(7)),
        )
        .with_subtree(
            Tree::new(8)
                .with_subtree(Tree::new(9).with_child(11).with_child(12))
                .with_subtree(Tree::new(10).with_child(13).with_child(14)),
        )
}

/// Root `0` with children `1 → [a]` and `2 → [b]`
pub fn split_letters() -> Tree<&'static str> {
    Tree::new("0")
        .with_subtree(Tree::new("1").with_child("a"))
        .with_subtree(Tree::new("2").with_child("b"))
}

/// Root `0` with children `1 → [a, b]` and `2 → [c]`
pub fn grouped_letters() -> Tree<&'static str> {
    Tree::new("0")
        .with_subtree(Tree::new("1").with_child("a").with_child("b"))
        .with_subtree(Tree::new("2").with_child("c"))
}

/// Straight chain `0 → 1 → ... → depth`
pub fn chain(depth: usize) -> Tree<usize> {
    let mut tree = Tree::new(depth);
    for value in (0..depth).rev() {
        tree = Tree::new(value).with_subtree(tree);
    }
    tree
}
