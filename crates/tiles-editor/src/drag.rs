//! Long-press drag of a tile's content onto another tile.

use tiles_core::{Point, Rect};
use tiles_layout::{NodeId, TileGridBounds};

use crate::order::ThumbnailId;

/// An in-flight content drag.
///
/// `pointer` follows the finger without clamping so the floating tile can
/// leave the grid; the swap candidate is resolved from a copy clamped into
/// the container.
#[derive(Debug, Clone, PartialEq)]
pub struct TileDrag {
    id: ThumbnailId,
    index: usize,
    source: NodeId,
    pointer: Point,
    candidate: Option<usize>,
}

impl TileDrag {
    /// Start dragging tile `index` from `offset` inside its `tile` rect.
    #[must_use]
    pub fn start(id: ThumbnailId, index: usize, source: NodeId, tile: Rect, offset: Point) -> Self {
        Self {
            id,
            index,
            source,
            pointer: tile.top_left() + offset,
            candidate: Some(index),
        }
    }

    /// Content being dragged.
    #[must_use]
    pub fn id(&self) -> &ThumbnailId {
        &self.id
    }

    /// Leaf index the drag started from.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Leaf node the drag started from.
    #[must_use]
    pub const fn source(&self) -> NodeId {
        self.source
    }

    /// Pointer in container coordinates.
    #[must_use]
    pub const fn pointer(&self) -> Point {
        self.pointer
    }

    /// Leaf index currently under the pointer, if any.
    #[must_use]
    pub const fn candidate(&self) -> Option<usize> {
        self.candidate
    }

    /// Candidate that would actually change the order on release.
    #[must_use]
    pub fn swap_target(&self) -> Option<usize> {
        self.candidate.filter(|&candidate| candidate != self.index)
    }

    /// Advance the pointer and re-resolve the candidate against `bounds`.
    pub fn move_by(&mut self, delta: Point, container: Rect, bounds: &TileGridBounds) {
        self.pointer += delta;
        let clamped = container.clamp(self.pointer);
        self.candidate = bounds.leaf_at(clamped);
    }

    /// Displacement of the floating tile from its resting place.
    #[must_use]
    pub fn offset_from(&self, tile: Rect) -> Point {
        self.pointer - tile.center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiles_core::{FlipAxes, Size};
    use tiles_layout::{GridThree, layout_tree};

    fn bounds() -> TileGridBounds {
        layout_tree(GridThree::One.into(), None)
            .expect("builds")
            .to_bitmap_bounds(Size::new(300.0, 300.0), FlipAxes::NONE, 0.0)
    }

    fn leaf(index: usize) -> NodeId {
        layout_tree(GridThree::One.into(), None)
            .expect("builds")
            .leaf(index)
            .expect("leaf")
    }

    fn near(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn pointer_starts_at_press_location() {
        let bounds = bounds();
        let tile = bounds.rect(1).expect("rect");
        let drag = TileDrag::start("b".into(), 1, leaf(1), tile, Point::new(5.0, 6.0));
        assert!(near(drag.pointer(), Point::new(5.0, 106.0)));
        assert_eq!(drag.candidate(), Some(1));
        assert_eq!(drag.swap_target(), None);
    }

    #[test]
    fn candidate_uses_clamped_pointer() {
        let bounds = bounds();
        let container = Rect::from_size(bounds.size());
        let tile = bounds.rect(0).expect("rect");
        let mut drag =
            TileDrag::start("a".into(), 0, leaf(0), tile, Point::new(10.0, 10.0));
        drag.move_by(Point::new(0.0, 150.0), container, &bounds);
        assert_eq!(drag.swap_target(), Some(1));

        // Far left of the grid still resolves to the tile under the clamp.
        drag.move_by(Point::new(-500.0, 100.0), container, &bounds);
        assert!(near(drag.pointer(), Point::new(-490.0, 260.0)));
        assert_eq!(drag.swap_target(), Some(2));
    }

    #[test]
    fn pointer_past_trailing_edges_keeps_a_candidate() {
        let bounds = bounds();
        let container = Rect::from_size(bounds.size());
        let tile = bounds.rect(0).expect("rect");
        let mut drag =
            TileDrag::start("a".into(), 0, leaf(0), tile, Point::new(10.0, 10.0));
        drag.move_by(Point::new(0.0, 1000.0), container, &bounds);
        assert_eq!(drag.candidate(), Some(2));

        let tile = bounds.rect(1).expect("rect");
        let mut drag =
            TileDrag::start("b".into(), 1, leaf(1), tile, Point::new(10.0, 10.0));
        drag.move_by(Point::new(1000.0, 0.0), container, &bounds);
        assert_eq!(drag.candidate(), Some(1));
        assert_eq!(drag.swap_target(), None);
    }

    #[test]
    fn offset_is_relative_to_tile_center() {
        let bounds = bounds();
        let tile = bounds.rect(0).expect("rect");
        let drag = TileDrag::start("a".into(), 0, leaf(0), tile, Point::new(150.0, 50.0));
        assert!(near(drag.offset_from(tile), Point::ZERO));
    }
}
