//! Pixel bounds derivation.
//!
//! Rectangles are derived top-down. A chain with frame `[s, e]` of extent `L`
//! along its axis places child `i` at `[s + lo·L, s + hi·L]`, where `lo` and
//! `hi` are the child's leading and trailing offsets. When the chain mirrors
//! that axis the span becomes `[e - hi·L, e - lo·L]`.
//!
//! Every edge also carries a *linked* flag. Container sides are unlinked,
//! every divider is linked, and inherited sides keep their flag. Leaves are
//! shrunk by half the spacing on each linked side so neighbours end up exactly
//! `spacing` apart while the outer border stays flush.

use tiles_core::{FlipAxes, Orientation, Point, Rect, Size};

use crate::tree::{MutableTileGridLayoutTree, NodeId};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Span {
    start: f32,
    end: f32,
    start_linked: bool,
    end_linked: bool,
}

impl Span {
    fn unlinked(start: f32, end: f32) -> Self {
        Self {
            start,
            end,
            start_linked: false,
            end_linked: false,
        }
    }

    fn extent(&self) -> f32 {
        self.end - self.start
    }
}

/// Frame of one node during the walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Frame {
    vertical: Span,
    horizontal: Span,
    /// The node's leading edge sits on the trailing side of its span.
    mirrored: bool,
}

impl Frame {
    fn span(&self, axis: Orientation) -> Span {
        match axis {
            Orientation::Vertical => self.vertical,
            Orientation::Horizontal => self.horizontal,
        }
    }

    fn with_span(mut self, axis: Orientation, span: Span) -> Self {
        match axis {
            Orientation::Vertical => self.vertical = span,
            Orientation::Horizontal => self.horizontal = span,
        }
        self
    }

    fn rect(&self) -> Rect {
        Rect::new(
            self.horizontal.start,
            self.vertical.start,
            self.horizontal.end,
            self.vertical.end,
        )
    }

    fn shrunk(&self, margin: f32) -> Rect {
        let side = |linked: bool| if linked { margin } else { 0.0 };
        self.rect().inset(
            side(self.horizontal.start_linked),
            side(self.vertical.start_linked),
            side(self.horizontal.end_linked),
            side(self.vertical.end_linked),
        )
    }
}

impl MutableTileGridLayoutTree {
    /// Visit every node in pre-order with its unshrunk pixel frame.
    pub(crate) fn walk_frames<F>(&self, size: Size, flips: FlipAxes, visit: &mut F)
    where
        F: FnMut(NodeId, &Frame),
    {
        let frame = Frame {
            vertical: Span::unlinked(0.0, size.height),
            horizontal: Span::unlinked(0.0, size.width),
            mirrored: false,
        };
        self.walk_node(self.root(), frame, flips, visit);
    }

    fn walk_node<F>(&self, id: NodeId, frame: Frame, flips: FlipAxes, visit: &mut F)
    where
        F: FnMut(NodeId, &Frame),
    {
        let Some(node) = self.node(id) else {
            return;
        };
        visit(id, &frame);

        let axis = node.orientation();
        let flipped = node.is_flipped(axis, flips);
        let outer = frame.span(axis);
        let length = outer.extent();
        let children = node.children();
        let last = children.len().saturating_sub(1);

        for (i, &child) in children.iter().enumerate() {
            let lo = self.leading_offset(child);
            let hi = self.trailing_offset(child);
            let span = if flipped {
                Span {
                    start: outer.end - hi * length,
                    end: outer.end - lo * length,
                    start_linked: i < last || outer.start_linked,
                    end_linked: i > 0 || outer.end_linked,
                }
            } else {
                Span {
                    start: outer.start + lo * length,
                    end: outer.start + hi * length,
                    start_linked: i > 0 || outer.start_linked,
                    end_linked: i < last || outer.end_linked,
                }
            };
            let mut child_frame = frame.with_span(axis, span);
            child_frame.mirrored = flipped;
            self.walk_node(child, child_frame, flips, visit);
        }
    }

    /// Derive one rectangle per tile for a container of `size`.
    ///
    /// `spacing` is the gap left between adjacent tiles; the outer border is
    /// not padded.
    #[must_use]
    pub fn to_bitmap_bounds(&self, size: Size, flips: FlipAxes, spacing: f32) -> TileGridBounds {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "tile_bounds",
            layout = %self.layout(),
            w = size.width,
            h = size.height,
            spacing
        )
        .entered();

        let margin = spacing / 2.0;
        let mut rects = vec![Rect::default(); self.leaf_count()];
        self.walk_frames(size, flips, &mut |id, frame| {
            if let Some(index) = self.node(id).and_then(|node| node.leaf_index())
                && let Some(slot) = rects.get_mut(index)
            {
                *slot = frame.shrunk(margin);
            }
        });
        TileGridBounds { size, rects }
    }

    /// Unshrunk pixel frame of any node.
    #[must_use]
    pub fn node_rect(&self, id: NodeId, size: Size, flips: FlipAxes) -> Option<Rect> {
        let mut found = None;
        self.walk_frames(size, flips, &mut |visited, frame| {
            if visited == id {
                found = Some(frame.rect());
            }
        });
        found
    }

    /// Hit areas of every draggable divider.
    ///
    /// Each line is `touch_size` thick, centred on the divider, and spans the
    /// cross extent of the node that owns it.
    #[must_use]
    pub fn divider_lines(&self, size: Size, flips: FlipAxes, touch_size: f32) -> Vec<DividerLine> {
        let half = touch_size / 2.0;
        let mut lines = Vec::new();
        self.walk_frames(size, flips, &mut |id, frame| {
            let Some(node) = self.node(id) else {
                return;
            };
            if !node.has_line() {
                return;
            }
            let Some(axis) = self.resize_axis(id) else {
                return;
            };
            let span = frame.span(axis);
            let at = if frame.mirrored { span.end } else { span.start };
            let cross = frame.span(axis.cross());
            let hit = match axis {
                Orientation::Vertical => Rect::new(cross.start, at - half, cross.end, at + half),
                Orientation::Horizontal => Rect::new(at - half, cross.start, at + half, cross.end),
            };
            lines.push(DividerLine {
                node: id,
                axis,
                at,
                hit,
            });
        });
        lines
    }
}

/// A draggable divider in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerLine {
    /// Node whose leading edge this divider is.
    pub node: NodeId,
    /// Axis the divider moves along.
    pub axis: Orientation,
    /// Pixel coordinate of the divider along `axis`.
    pub at: f32,
    /// Touch target.
    pub hit: Rect,
}

/// Pixel rectangles of every tile, indexed by leaf index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TileGridBounds {
    size: Size,
    rects: Vec<Rect>,
}

impl TileGridBounds {
    /// Container size these bounds were derived for.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    #[must_use]
    pub fn rect(&self, index: usize) -> Option<Rect> {
        self.rects.get(index).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Rect] {
        &self.rects
    }

    /// `(leaf index, rect)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Rect)> + '_ {
        self.rects.iter().copied().enumerate()
    }

    /// Tile containing `point`. Points inside the spacing gap hit nothing.
    #[must_use]
    pub fn leaf_at(&self, point: Point) -> Option<usize> {
        self.rects.iter().position(|rect| rect.contains(point))
    }

    /// Smallest rectangle enclosing every tile.
    #[must_use]
    pub fn union(&self) -> Option<Rect> {
        self.rects
            .iter()
            .copied()
            .reduce(|acc, rect| acc.union(&rect))
    }
}
