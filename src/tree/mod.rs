//! Owned n-ary trees with path addressing
//!
//! Every node exclusively owns its children, so a tree is a plain value:
//! no arena, no reference counting, no parent pointers.
//!
//! Nodes are addressed from any traversal root by a [`TreeIndex`]:
//! a sequence of 1-based child positions, one per level.

mod binary;
mod index;
mod node;
mod traversal;

pub use binary::BinaryTree;
pub use index::TreeIndex;
pub use node::Tree;
pub use traversal::{Nodes, PreOrder, Values};
