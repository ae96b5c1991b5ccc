//! Predicate search and set containment

use tracing::trace;

use super::ElementMatch;
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Every value satisfying `predicate`, with its index, in pre-order
    pub fn find_matches<P>(&self, mut predicate: P) -> Vec<ElementMatch<'_, T>>
    where
        P: FnMut(&T) -> bool,
    {
        let matches: Vec<_> = self
            .pre_order()
            .filter(|(_, node)| predicate(node.value()))
            .map(|(index, node)| ElementMatch {
                value: node.value(),
                index,
            })
            .collect();
        trace!(found = matches.len(), "predicate search finished");
        matches
    }
}

impl<T: PartialEq> Tree<T> {
    /// Every occurrence of `target`, with its index, in pre-order
    pub fn find(&self, target: &T) -> Vec<ElementMatch<'_, T>> {
        self.find_matches(|value| value == target)
    }

    /// True if some node in this subtree holds `target`
    pub fn contains(&self, target: &T) -> bool {
        self.iter().any(|value| value == target)
    }

    /// True if every value in `targets` occurs somewhere in this subtree
    ///
    /// Order and duplicates in `targets` do not matter; an empty set is
    /// trivially contained.
    pub fn contains_all(&self, targets: &[T]) -> bool {
        let mut missing: Vec<&T> = targets.iter().collect();
        for value in self.iter() {
            if missing.is_empty() {
                break;
            }
            missing.retain(|target| *target != value);
        }
        missing.is_empty()
    }
}
