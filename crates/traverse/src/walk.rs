//! Directional walks over same-level nodes.

use crate::matcher::Predicate;
use dom::{DomTree, NodeId};

/// Walk direction along a sibling list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards later siblings.
    Forward,
    /// Towards earlier siblings.
    Backward,
}

/// First element sibling of `start` in `direction` for which `pred` holds.
///
/// The walk starts strictly beyond `start`, so the start element itself can
/// never be returned, and ends when the sibling list is exhausted. Sibling
/// lists are finite and acyclic, so the walk always terminates.
pub(crate) fn first_sibling_match(
    tree: &DomTree,
    start: NodeId,
    direction: Direction,
    pred: &Predicate<'_>,
) -> Option<NodeId> {
    let mut current = start;
    loop {
        current = match direction {
            Direction::Forward => tree.next_sibling(current)?,
            Direction::Backward => tree.prev_sibling(current)?,
        };
        if tree.is_element(current) && pred(tree, current) {
            return Some(current);
        }
    }
}
