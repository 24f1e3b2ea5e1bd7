use std::sync::Arc;

/// A fresh snapshot of element + viewport geometry.
///
/// Snapshots are produced by a [`GeometryProvider`] on every probe and never
/// cached across frames: the element and the document can both mutate
/// between checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    /// Element height in the scroll axis.
    pub height: u32,
    /// Absolute document offset of the element's top edge.
    pub top: i64,
    /// Current vertical scroll offset of the document.
    pub scroll_y: i64,
    /// Height of the visible viewport.
    pub viewport_height: u32,
    /// Whether the document is currently not visible (backgrounded tab).
    pub document_hidden: bool,
}

/// Produces a [`Geometry`] snapshot for the bound element, or `None` while
/// the element is unbound (before mount / after teardown in the host).
pub type GeometryProvider = Arc<dyn Fn() -> Option<Geometry> + Send + Sync>;

/// A minimal view of the host's layout tree, enough to resolve an element's
/// absolute document offset.
///
/// `offset_top` returns `None` for nodes that expose no offset of their own
/// (text/inline nodes); `offset_parent` is the positioned-ancestor chain.
pub trait OffsetTree {
    type Node: Copy;

    fn offset_top(&self, node: Self::Node) -> Option<i64>;
    fn offset_parent(&self, node: Self::Node) -> Option<Self::Node>;
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;
}

/// Sums `offset_top` through the offset-parent chain up to the document
/// root, first walking up plain parents until a node exposes an offset.
pub fn absolute_top<T: OffsetTree>(tree: &T, mut node: T::Node) -> i64 {
    let mut top = loop {
        match tree.offset_top(node) {
            Some(t) => break t,
            None => match tree.parent(node) {
                Some(parent) => node = parent,
                None => return 0,
            },
        }
    };
    while let Some(parent) = tree.offset_parent(node) {
        node = parent;
        top += tree.offset_top(node).unwrap_or(0);
    }
    top
}

/// Whether the element's fraction-adjusted band overlaps the viewport band.
///
/// Fails closed while the document is hidden. With `h` the element height,
/// `delta` the scroll offset relative to the element top, and `tail` the
/// fraction of the lesser of element/viewport height that must clear the
/// edge, the element intersects iff
/// `delta > tail - viewport_height && delta < h - tail`. The check is
/// symmetric for the top and bottom viewport edges.
pub fn in_viewport(geometry: &Geometry, fraction: f32, respect_fraction: bool) -> bool {
    if geometry.document_hidden {
        return false;
    }
    let h = geometry.height as f64;
    let view = geometry.viewport_height as f64;
    let delta = (geometry.scroll_y - geometry.top) as f64;
    let tail = h.min(view) * if respect_fraction { fraction as f64 } else { 0.0 };
    delta > tail - view && delta < h - tail
}
