//! Ordered element selections over a [`DomTree`].

use crate::matching::{Selector, select_all};
use crate::tree::{DomTree, NodeId};
use log::warn;
use std::collections::HashSet;

/// An ordered sequence of node keys into a [`DomTree`].
///
/// Selections never own nodes and never mutate the tree; every operation
/// that changes membership produces a new selection. Plain construction
/// keeps the caller's order and multiplicity; [`Selection::unique_sorted`]
/// is the canonical way to restore set semantics and document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    nodes: Vec<NodeId>,
}

impl Selection {
    /// The empty selection.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Wrap a node list as-is, without deduplication or reordering.
    pub fn from_nodes(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    /// Build a selection of every element matching `selector_text`, in
    /// document order. Unparseable selector text yields the empty
    /// selection rather than an error.
    pub fn select(tree: &DomTree, selector_text: &str) -> Self {
        match Selector::parse(selector_text) {
            Ok(selector) => Self {
                nodes: select_all(tree, &selector),
            },
            Err(err) => {
                warn!("selection from selector failed: {err}");
                Self::new()
            }
        }
    }

    /// Collapse an arbitrary node sequence into a duplicate-free selection
    /// ordered by document position. Keys not attached to the tree are
    /// dropped.
    pub fn unique_sorted(tree: &DomTree, nodes: impl IntoIterator<Item = NodeId>) -> Self {
        let wanted: HashSet<NodeId> = nodes.into_iter().collect();
        fn walk(tree: &DomTree, node: NodeId, wanted: &HashSet<NodeId>, out: &mut Vec<NodeId>) {
            if wanted.contains(&node) {
                out.push(node);
            }
            for &child in tree.children(node) {
                walk(tree, child, wanted, out);
            }
        }
        let mut out = Vec::with_capacity(wanted.len());
        walk(tree, tree.root(), &wanted, &mut out);
        Self { nodes: out }
    }

    /// Keep the nodes for which `keep` holds, preserving order and
    /// multiplicity.
    pub fn filter(&self, tree: &DomTree, keep: impl Fn(&DomTree, NodeId) -> bool) -> Self {
        Self {
            nodes: self
                .nodes
                .iter()
                .copied()
                .filter(|&node| keep(tree, node))
                .collect(),
        }
    }

    /// Apply `transform` to every node, collecting the results in selection
    /// order.
    pub fn map<T>(&self, transform: impl FnMut(NodeId) -> T) -> Vec<T> {
        self.nodes.iter().copied().map(transform).collect()
    }

    /// The underlying node keys, in selection order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// The node at `index`, if the selection is that long.
    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).copied()
    }

    /// The first node of the selection, if any.
    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the node keys in selection order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }
}

impl From<NodeId> for Selection {
    fn from(node: NodeId) -> Self {
        Self { nodes: vec![node] }
    }
}

impl From<Option<NodeId>> for Selection {
    fn from(node: Option<NodeId>) -> Self {
        Self {
            nodes: node.into_iter().collect(),
        }
    }
}

impl From<Vec<NodeId>> for Selection {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter().copied()
    }
}
