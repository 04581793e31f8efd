//! Divider movement with minimum tile size clamping.
//!
//! A node's position moves inside the window left by its siblings:
//!
//! ```text
//! lower = offset(previous sibling) + MIN_TILE_SIZE
//! upper = offset(next sibling)     - MIN_TILE_SIZE
//! ```
//!
//! A missing previous sibling counts as `0` and a missing next sibling as `1`.
//! Out of range requests are clamped, never rejected, so a resize gesture
//! cannot fail.

use tiles_core::{FlipAxes, Orientation, Point, Size};

use crate::tree::{MutableTileGridLayoutTree, NodeId};

/// Smallest extent a tile may shrink to, as a fraction of its parent.
pub const MIN_TILE_SIZE: f32 = 0.15;

impl MutableTileGridLayoutTree {
    /// Axis along which `id`'s position moves, i.e. its parent's stacking axis.
    #[must_use]
    pub fn resize_axis(&self, id: NodeId) -> Option<Orientation> {
        let node = self.node(id)?;
        let parent = self.node(node.parent()?)?;
        Some(parent.orientation())
    }

    /// Allowed `[lower, upper]` window for `id`'s position.
    ///
    /// `None` for the root, unknown ids, and first children, whose leading
    /// edge is pinned to the frame start.
    #[must_use]
    pub fn position_range(&self, id: NodeId) -> Option<(f32, f32)> {
        let node = self.node(id)?;
        if !node.has_line() {
            return None;
        }
        let axis = self.resize_axis(id)?;
        let bounds = node.bounds();
        let lower = self
            .edge(bounds.start(axis))
            .and_then(|edge| edge.prev())
            .map_or(0.0, |prev| self.leading_offset(prev))
            + MIN_TILE_SIZE;
        let upper = self
            .edge(bounds.end(axis))
            .and_then(|edge| edge.next())
            .map_or(1.0, |next| self.leading_offset(next))
            - MIN_TILE_SIZE;
        Some((lower, upper))
    }

    /// Move `id`'s leading divider by `percent` of its parent's extent.
    ///
    /// When the node can mirror the resize axis and the caller mirrors it,
    /// the delta is inverted so the divider follows the pointer on screen.
    /// Returns the resulting position, or `None` when `id` has no movable
    /// divider.
    pub fn update_position_by(
        &mut self,
        id: NodeId,
        percent: f32,
        flip_vertical: bool,
        flip_horizontal: bool,
    ) -> Option<f32> {
        let (lower, upper) = self.position_range(id)?;
        let axis = self.resize_axis(id)?;
        let node = self.node(id)?;
        let current = node.position();

        let requested = FlipAxes::from_bools(flip_vertical, flip_horizontal);
        let delta = if node.is_flipped(axis, requested) {
            -percent
        } else {
            percent
        };
        if !delta.is_finite() {
            return Some(current);
        }

        let target = current + delta;
        let next = if lower > upper {
            (lower + upper) / 2.0
        } else {
            target.clamp(lower, upper)
        };

        #[cfg(feature = "tracing")]
        if next != target {
            tracing::debug!(
                node = id.get(),
                requested = target,
                clamped = next,
                lower,
                upper,
                "tile resize clamped"
            );
        }

        self.set_position(id, next);
        Some(next)
    }

    /// Move `id`'s divider by a pixel drag inside a container of `container`.
    ///
    /// The drag component along the resize axis is converted to a fraction of
    /// the parent's pixel extent before clamping.
    pub fn drag_divider(
        &mut self,
        id: NodeId,
        delta: Point,
        container: Size,
        flips: FlipAxes,
    ) -> Option<f32> {
        let axis = self.resize_axis(id)?;
        let parent = self.node(id)?.parent()?;
        let frame = self.unit_rect(parent)?;
        let extent = axis.extent(frame.size()) * axis.extent(container);
        if extent <= 0.0 {
            return None;
        }
        let percent = axis.component(delta) / extent;
        self.update_position_by(
            id,
            percent,
            flips.contains(FlipAxes::VERTICAL),
            flips.contains(FlipAxes::HORIZONTAL),
        )
    }
}
