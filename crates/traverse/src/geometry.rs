//! Geometry seam backing the viewport intersection filter.
//!
//! The filter never computes layout itself; it asks a [`GeometrySource`] for
//! per-element rectangles and the current viewport. Embedders with a layout
//! engine implement the trait over live geometry; tests use [`RectMap`].

use dom::NodeId;
use std::collections::HashMap;

/// A viewport-relative rectangle, edges in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    /// Build from an origin and size, the shape layout engines usually hand
    /// out.
    pub fn from_origin(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            top: y,
            left: x,
            right: x + width,
            bottom: y + height,
        }
    }

    /// Axis-aligned overlap test against a viewport expanded by `margin` on
    /// every edge. Partial overlap counts; containment is not required.
    pub fn intersects_viewport(&self, viewport: Viewport, margin: f64) -> bool {
        self.bottom >= -margin
            && self.right >= -margin
            && self.top <= viewport.height + margin
            && self.left <= viewport.width + margin
    }
}

/// Current visible viewport size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Live layout reads for the viewport filter.
///
/// Both reads happen at call time, never ahead of it; a filter pass performs
/// one rectangle read per candidate element and one viewport read per call.
pub trait GeometrySource {
    /// Bounding rectangle of a rendered element, or `None` when the node has
    /// no box.
    fn bounding_rect(&self, node: NodeId) -> Option<Rect>;

    /// The current viewport dimensions.
    fn viewport(&self) -> Viewport;
}

/// Map-backed geometry for embedders and tests without a layout engine.
pub struct RectMap {
    rects: HashMap<NodeId, Rect>,
    viewport: Viewport,
}

impl RectMap {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            rects: HashMap::new(),
            viewport,
        }
    }

    /// Record the rectangle for a node, replacing any previous one.
    pub fn insert(&mut self, node: NodeId, rect: Rect) {
        self.rects.insert(node, rect);
    }

    /// Change the viewport for subsequent reads.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

impl GeometrySource for RectMap {
    fn bounding_rect(&self, node: NodeId) -> Option<Rect> {
        self.rects.get(&node).copied()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}
