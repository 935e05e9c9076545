//! Chainable traversal and filtering operators over [`dom::Selection`].
//!
//! Every operator reads its input selection and produces a new selection or
//! a scalar; inputs are never mutated. Operators whose results can converge
//! from several starting elements (sibling search, descendant lookup)
//! collapse duplicates and restore document order before returning, so the
//! output chains like any other selection.

mod geometry;
mod matcher;
mod ops;
mod walk;

pub use geometry::{GeometrySource, Rect, RectMap, Viewport};
pub use matcher::{Matcher, Predicate};
pub use ops::{TextQuery, Traverse};
pub use walk::Direction;

/// The operator surface version, as published in the package manifest.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
