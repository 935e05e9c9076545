//! DOM tree storage, HTML parsing, selector matching, and ordered
//! element selections.
//!
//! This crate is the host platform the traversal operators build on: it owns
//! the node arena, knows how to grow one from HTML text, and delegates CSS
//! selector matching to the `selectors` crate rather than implementing a
//! matcher of its own.

mod parser;
mod selection;
mod tree;

pub mod matching;

pub use matching::Selector;
pub use parser::parse_html;
pub use selection::Selection;
pub use tree::{DomTree, ElementData, NodeData, NodeId};
