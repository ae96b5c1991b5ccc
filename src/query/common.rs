//! Common-subtree queries
//!
//! Containment is monotonic towards the root: if a subtree holds every
//! target, so does each of its ancestors. The qualifying nodes therefore
//! form a connected chain hanging from the traversal root, and a pruned
//! pre-order walk that stops descending at the first failing node finds
//! all of them.
//!
//! Walk down:  smallest_common_subtrees → deepest members of the chain
//! Walk up:    first_common_ancestor    → shorten the index until it holds

use tracing::{debug, trace};

use super::SubtreeMatch;
use crate::tree::{Tree, TreeIndex};
use crate::TreeError;

impl<T: PartialEq> Tree<T> {
    /// Every subtree (including `self`) holding all of `targets`, in pre-order
    pub fn subtrees_containing_all(&self, targets: &[T]) -> Vec<SubtreeMatch<'_, T>> {
        let mut found = Vec::new();
        let mut traversal = self.pre_order();

        while let Some((index, node)) = traversal.next() {
            if node.contains_all(targets) {
                found.push(SubtreeMatch { tree: node, index });
            } else {
                traversal.skip_subtree();
            }
        }
        found
    }

    /// Deepest subtrees holding all of `targets`
    ///
    /// Several results at the same depth are all returned, in pre-order:
    /// disjoint subtrees can each hold the full set when values repeat.
    /// An empty `targets` set yields no results.
    pub fn smallest_common_subtrees(&self, targets: &[T]) -> Vec<SubtreeMatch<'_, T>> {
        if targets.is_empty() {
            return Vec::new();
        }

        let candidates = self.subtrees_containing_all(targets);
        let Some(depth) = candidates.iter().map(SubtreeMatch::depth).max() else {
            debug!("no subtree contains every target");
            return Vec::new();
        };

        let deepest: Vec<_> = candidates
            .into_iter()
            .filter(|candidate| candidate.depth() == depth)
            .collect();
        debug!(depth, found = deepest.len(), "smallest common subtrees");
        deepest
    }

    /// Nearest subtree at or above `from` that holds `target`
    ///
    /// Walks from the node at `from` towards the traversal root, one level
    /// at a time. `Ok(None)` means not even the root holds `target`; an error
    /// is only returned when `from` itself does not resolve.
    pub fn first_common_ancestor(
        &self,
        from: &TreeIndex,
        target: &T,
    ) -> Result<Option<SubtreeMatch<'_, T>>, TreeError> {
        let mut index = from.clone();
        loop {
            let tree = self.subtree(&index)?;
            if tree.contains(target) {
                debug!(%from, found = %index, "common ancestor found");
                return Ok(Some(SubtreeMatch { tree, index }));
            }
            if index.is_empty() {
                debug!(%from, "no ancestor contains target");
                return Ok(None);
            }
            trace!(%index, "ascending");
            index = index.parent();
        }
    }
}
