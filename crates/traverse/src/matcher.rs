//! Normalization of the polymorphic predicate-or-selector argument.

use dom::{DomTree, NodeId, Selector};
use log::warn;

/// Canonical per-element predicate, produced by [`Matcher::into_predicate`].
pub type Predicate<'a> = Box<dyn Fn(&DomTree, NodeId) -> bool + 'a>;

/// Argument accepted by the predicate-driven operators.
///
/// Callers hand over a closure, selector text, or nothing; the operators
/// resolve it to one predicate exactly once per call.
pub enum Matcher<'a> {
    /// Caller-supplied test, passed through unchanged.
    Func(Predicate<'a>),
    /// CSS selector source text, matched with the platform matcher.
    Selector(&'a str),
    /// Matches every element.
    Any,
}

impl<'a> Matcher<'a> {
    /// Wrap a closure as a matcher.
    pub fn func(test: impl Fn(&DomTree, NodeId) -> bool + 'a) -> Self {
        Self::Func(Box::new(test))
    }

    /// Collapse to one canonical predicate.
    ///
    /// Blank or unparseable selector text degrades to match-all rather than
    /// raising; the degraded case is logged once per call site.
    pub fn into_predicate(self) -> Predicate<'a> {
        match self {
            Self::Func(test) => test,
            Self::Selector(text) if !text.trim().is_empty() => match Selector::parse(text) {
                Ok(selector) => Box::new(move |tree, node| selector.matches(tree, node)),
                Err(err) => {
                    warn!("treating unparseable selector as match-all: {err}");
                    Box::new(|_, _| true)
                }
            },
            Self::Selector(_) | Self::Any => Box::new(|_, _| true),
        }
    }
}

impl<'a> From<&'a str> for Matcher<'a> {
    fn from(text: &'a str) -> Self {
        Self::Selector(text)
    }
}

impl<'a> From<&'a String> for Matcher<'a> {
    fn from(text: &'a String) -> Self {
        Self::Selector(text)
    }
}
