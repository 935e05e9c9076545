//! Compiled selectors and the matching entry points built on them.

use super::element_wrapper::{ElementWrapper, SelectorImpl};
use crate::tree::{DomTree, NodeId};
use anyhow::{Error, anyhow};
use cssparser::{Parser, ParserInput};
use selectors::NthIndexCache;
use selectors::matching::{
    IgnoreNthChildForInvalidation, MatchingContext, MatchingMode, NeedsSelectorFlags, QuirksMode,
    matches_selector,
};
use selectors::parser::SelectorList;

/// A selector list parsed once and matched against many elements.
pub struct Selector {
    list: SelectorList<SelectorImpl>,
    source: String,
}

impl Selector {
    /// Parse selector source text.
    ///
    /// # Errors
    /// Returns an error when the text is not a valid selector list or uses
    /// pseudo-classes the matcher does not support.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);

        let list = SelectorList::<SelectorImpl>::parse(
            &super::SelectorParser,
            &mut parser,
            selectors::parser::ParseRelative::No,
        )
        .map_err(|err| anyhow!("invalid selector {text:?}: {err:?}"))?;

        Ok(Self {
            list,
            source: text.to_string(),
        })
    }

    /// The source text this selector was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the given element matches any selector in the list.
    /// Non-element nodes never match.
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        if !tree.is_element(node) {
            return false;
        }

        let element = ElementWrapper::new(node, tree);
        let mut nth_index_cache = NthIndexCache::default();
        let mut context = MatchingContext::new(
            MatchingMode::Normal,
            None,
            &mut nth_index_cache,
            QuirksMode::NoQuirks,
            NeedsSelectorFlags::No,
            IgnoreNthChildForInvalidation::No,
        );

        self.list
            .0
            .iter()
            .any(|selector| matches_selector(selector, 0, None, &element, &mut context))
    }
}

impl std::fmt::Debug for Selector {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Selector")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// First descendant of `scope` matching `selector`, in document order.
/// `scope` itself is never considered.
pub fn first_descendant_match(tree: &DomTree, scope: NodeId, selector: &Selector) -> Option<NodeId> {
    fn walk(tree: &DomTree, node: NodeId, selector: &Selector) -> Option<NodeId> {
        for &child in tree.children(node) {
            if selector.matches(tree, child) {
                return Some(child);
            }
            if let Some(found) = walk(tree, child, selector) {
                return Some(found);
            }
        }
        None
    }
    walk(tree, scope, selector)
}

/// All elements in the tree matching `selector`, in document order.
pub fn select_all(tree: &DomTree, selector: &Selector) -> Vec<NodeId> {
    fn walk(tree: &DomTree, node: NodeId, selector: &Selector, out: &mut Vec<NodeId>) {
        for &child in tree.children(node) {
            if selector.matches(tree, child) {
                out.push(child);
            }
            walk(tree, child, selector, out);
        }
    }
    let mut out = Vec::new();
    walk(tree, tree.root(), selector, &mut out);
    out
}
