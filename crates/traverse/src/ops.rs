//! The chainable operator surface over selections.

use crate::geometry::GeometrySource;
use crate::matcher::Matcher;
use crate::walk::{Direction, first_sibling_match};
use dom::{DomTree, NodeId, Selection, Selector};
use log::warn;
use regex::Regex;

/// Text filter argument: a plain substring or a compiled pattern.
#[derive(Debug, Clone)]
pub enum TextQuery {
    Substring(String),
    Pattern(Regex),
}

impl TextQuery {
    fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Substring(needle) => text.contains(needle.as_str()),
            Self::Pattern(pattern) => pattern.is_match(text),
        }
    }
}

impl From<&str> for TextQuery {
    fn from(needle: &str) -> Self {
        Self::Substring(needle.to_string())
    }
}

impl From<String> for TextQuery {
    fn from(needle: String) -> Self {
        Self::Substring(needle)
    }
}

impl From<Regex> for TextQuery {
    fn from(pattern: Regex) -> Self {
        Self::Pattern(pattern)
    }
}

/// Traversal and filtering operators over a selection.
///
/// Operators never mutate their input; results that can converge from
/// several starting elements come back duplicate-free and in document
/// order, while the pure filters keep input order and multiplicity.
pub trait Traverse {
    /// For each element, the first later sibling satisfying `test`,
    /// assembled into one duplicate-free document-ordered selection.
    fn next_match<'a>(&self, tree: &DomTree, test: impl Into<Matcher<'a>>) -> Selection;

    /// [`Traverse::next_match`] towards earlier siblings.
    fn prev_match<'a>(&self, tree: &DomTree, test: impl Into<Matcher<'a>>) -> Selection;

    /// For each element, its first descendant matching `selector`. Blank or
    /// unparseable selector text yields the empty selection without any
    /// traversal.
    fn find_first(&self, tree: &DomTree, selector: &str) -> Selection;

    /// Keep elements whose trimmed text content matches `query`; `None`
    /// yields the empty selection. Survivors keep input order and
    /// multiplicity.
    fn contains_text(&self, tree: &DomTree, query: Option<TextQuery>) -> Selection;

    /// Keep elements whose bounding rectangle intersects the viewport
    /// expanded by `margin` (non-finite margins count as zero). Nodes the
    /// geometry source has no rectangle for are excluded.
    fn in_viewport(&self, tree: &DomTree, geometry: &dyn GeometrySource, margin: f64) -> Selection;

    /// Run `effect` on the selection and hand the selection back unchanged.
    fn tap(self, effect: impl FnOnce(&Self)) -> Self
    where
        Self: Sized;

    /// Whether the selection holds at least one node, computed fresh on
    /// every call.
    fn exists(&self) -> bool;
}

impl Traverse for Selection {
    fn next_match<'a>(&self, tree: &DomTree, test: impl Into<Matcher<'a>>) -> Selection {
        sibling_match(self, tree, Direction::Forward, test.into())
    }

    fn prev_match<'a>(&self, tree: &DomTree, test: impl Into<Matcher<'a>>) -> Selection {
        sibling_match(self, tree, Direction::Backward, test.into())
    }

    fn find_first(&self, tree: &DomTree, selector: &str) -> Selection {
        if selector.trim().is_empty() {
            return Selection::new();
        }
        let selector = match Selector::parse(selector) {
            Ok(selector) => selector,
            Err(err) => {
                warn!("find_first skipped: {err}");
                return Selection::new();
            }
        };
        let slots = self
            .iter()
            .map(|scope| dom::matching::first_descendant_match(tree, scope, &selector));
        assemble(tree, slots)
    }

    fn contains_text(&self, tree: &DomTree, query: Option<TextQuery>) -> Selection {
        let Some(query) = query else {
            return Selection::new();
        };
        self.filter(tree, |tree, node| {
            query.is_match(tree.text_content(node).trim())
        })
    }

    fn in_viewport(&self, tree: &DomTree, geometry: &dyn GeometrySource, margin: f64) -> Selection {
        let margin = if margin.is_finite() { margin } else { 0.0 };
        let viewport = geometry.viewport();
        self.filter(tree, |tree, node| {
            tree.is_element(node)
                && geometry
                    .bounding_rect(node)
                    .is_some_and(|rect| rect.intersects_viewport(viewport, margin))
        })
    }

    fn tap(self, effect: impl FnOnce(&Self)) -> Self {
        effect(&self);
        self
    }

    fn exists(&self) -> bool {
        !self.is_empty()
    }
}

/// Run the directional walk once per start element, then assemble.
fn sibling_match(
    selection: &Selection,
    tree: &DomTree,
    direction: Direction,
    test: Matcher<'_>,
) -> Selection {
    let pred = test.into_predicate();
    let slots = selection
        .iter()
        .map(|start| first_sibling_match(tree, start, direction, &pred));
    assemble(tree, slots)
}

/// Collapse per-element result slots into one selection: absent slots drop
/// out, converging results dedupe, and the remainder comes back in document
/// order rather than visit order.
fn assemble(tree: &DomTree, slots: impl Iterator<Item = Option<NodeId>>) -> Selection {
    Selection::unique_sorted(tree, slots.flatten())
}
