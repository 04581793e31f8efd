//! Interactive tile grid: layout, content order and gesture routing.
//!
//! [`TileGridEditor`] keeps the pixel bounds it last derived so hit testing
//! and drag-reorder always see the rectangles that are on screen. Bounds are
//! re-derived whenever the container, the style or a divider changes.

use tiles_core::{Point, Rect, Size, TileGridGesture};
use tiles_layout::{DividerLine, MutableTileGridLayoutTree, NodeId, TileGridBounds};

use crate::config::TileGridStyle;
use crate::drag::TileDrag;
use crate::error::{EditorError, OrderError, StyleError};
use crate::order::{MutableTileGridOrder, ThumbnailId, TileGridOrder};

/// What a gesture was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureTarget {
    /// The divider on the leading edge of a node.
    Divider(NodeId),
    /// The tile with this leaf index.
    Tile(usize),
}

/// Effect of one handled gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// The gesture did not apply to its target.
    Ignored,
    Resized { node: NodeId, position: f32 },
    Panned { index: usize },
    Zoomed { index: usize },
    DragStarted { index: usize },
    DragMoved { candidate: Option<usize> },
    Swapped { from: usize, to: usize },
    /// Released without a different tile under the pointer.
    DragEnded,
    DragCanceled,
}

/// Editing state for one tile grid.
#[derive(Debug, Clone)]
pub struct TileGridEditor {
    tree: MutableTileGridLayoutTree,
    order: MutableTileGridOrder,
    container: Size,
    style: TileGridStyle,
    bounds: TileGridBounds,
    drag: Option<TileDrag>,
}

impl TileGridEditor {
    /// Pair a layout with its content.
    ///
    /// Fails when the order does not hold exactly one entry per tile or the
    /// style is invalid.
    pub fn new(
        tree: MutableTileGridLayoutTree,
        order: TileGridOrder,
        container: Size,
        style: TileGridStyle,
    ) -> Result<Self, EditorError> {
        order.check_len(tree.leaf_count())?;
        style.validate()?;
        let bounds = tree.to_bitmap_bounds(container, style.flips(), style.spacing);
        Ok(Self {
            tree,
            order: order.into(),
            container,
            style,
            bounds,
            drag: None,
        })
    }

    #[must_use]
    pub fn tree(&self) -> &MutableTileGridLayoutTree {
        &self.tree
    }

    #[must_use]
    pub fn order(&self) -> &MutableTileGridOrder {
        &self.order
    }

    #[must_use]
    pub const fn style(&self) -> &TileGridStyle {
        &self.style
    }

    #[must_use]
    pub const fn container(&self) -> Size {
        self.container
    }

    /// Bounds last derived for the current container.
    #[must_use]
    pub fn bounds(&self) -> &TileGridBounds {
        &self.bounds
    }

    /// The drag in progress, if any.
    #[must_use]
    pub fn drag(&self) -> Option<&TileDrag> {
        self.drag.as_ref()
    }

    pub fn set_container(&mut self, container: Size) {
        if self.container != container {
            self.container = container;
            self.refresh_bounds();
        }
    }

    pub fn set_style(&mut self, style: TileGridStyle) -> Result<(), StyleError> {
        style.validate()?;
        self.style = style;
        self.refresh_bounds();
        Ok(())
    }

    /// Swap in another layout for the same content.
    ///
    /// Any drag in progress is dropped.
    pub fn replace_tree(&mut self, tree: MutableTileGridLayoutTree) -> Result<(), OrderError> {
        self.order.to_read_only().check_len(tree.leaf_count())?;
        self.tree = tree;
        self.drag = None;
        self.refresh_bounds();
        Ok(())
    }

    /// Clear user pan and zoom on every tile.
    pub fn reset(&mut self) {
        self.order.reset();
    }

    /// Draggable dividers with touch areas sized by the style.
    #[must_use]
    pub fn divider_lines(&self) -> Vec<DividerLine> {
        self.tree
            .divider_lines(self.container, self.style.flips(), self.style.line_touch_size)
    }

    /// Divider whose touch area contains `point`.
    #[must_use]
    pub fn divider_at(&self, point: Point) -> Option<NodeId> {
        self.divider_lines()
            .into_iter()
            .find(|line| line.hit.contains(point))
            .map(|line| line.node)
    }

    /// Tile under `point`.
    #[must_use]
    pub fn tile_at(&self, point: Point) -> Option<usize> {
        self.bounds.leaf_at(point)
    }

    /// Id to draw in tile `index`, previewing a pending swap.
    #[must_use]
    pub fn display_id(&self, index: usize) -> Option<&ThumbnailId> {
        if let Some(drag) = &self.drag
            && let Some(target) = drag.swap_target()
        {
            if index == target {
                return Some(drag.id());
            }
            if index == drag.index() {
                return self.order.get(target).map(|entry| &entry.id);
            }
        }
        self.order.get(index).map(|entry| &entry.id)
    }

    /// How far the dragged tile floats from its resting place.
    #[must_use]
    pub fn drag_offset(&self) -> Option<Point> {
        let drag = self.drag.as_ref()?;
        let tile = self.bounds.rect(drag.index())?;
        Some(drag.offset_from(tile))
    }

    /// Route a gesture to the resize engine, the content order or the drag.
    pub fn handle(&mut self, target: GestureTarget, gesture: TileGridGesture) -> GestureOutcome {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("tile_gesture", target = ?target, gesture = ?gesture)
            .entered();

        match (target, gesture) {
            (GestureTarget::Divider(node), TileGridGesture::DividerDrag { delta }) => {
                self.drag_divider(node, delta)
            }
            (GestureTarget::Tile(index), TileGridGesture::Pan { delta }) => {
                let Some(tile) = self.bounds.rect(index) else {
                    return GestureOutcome::Ignored;
                };
                if self.order.pan(index, delta, tile.size()) {
                    GestureOutcome::Panned { index }
                } else {
                    GestureOutcome::Ignored
                }
            }
            (GestureTarget::Tile(index), TileGridGesture::Zoom { factor }) => {
                if self.order.zoom(index, factor) {
                    GestureOutcome::Zoomed { index }
                } else {
                    GestureOutcome::Ignored
                }
            }
            (GestureTarget::Tile(index), TileGridGesture::LongPressStart { offset }) => {
                self.start_drag(index, offset)
            }
            (GestureTarget::Tile(_), TileGridGesture::LongPressMove { delta }) => {
                let container = Rect::from_size(self.container);
                match self.drag.as_mut() {
                    Some(drag) => {
                        drag.move_by(delta, container, &self.bounds);
                        GestureOutcome::DragMoved {
                            candidate: drag.candidate(),
                        }
                    }
                    None => GestureOutcome::Ignored,
                }
            }
            (GestureTarget::Tile(_), TileGridGesture::LongPressEnd) => self.end_drag(),
            (GestureTarget::Tile(_), TileGridGesture::LongPressCancel) => {
                if self.drag.take().is_some() {
                    GestureOutcome::DragCanceled
                } else {
                    GestureOutcome::Ignored
                }
            }
            _ => GestureOutcome::Ignored,
        }
    }

    fn drag_divider(&mut self, node: NodeId, delta: Point) -> GestureOutcome {
        let before = self.tree.version();
        let Some(position) =
            self.tree
                .drag_divider(node, delta, self.container, self.style.flips())
        else {
            return GestureOutcome::Ignored;
        };
        if self.tree.version() != before {
            self.refresh_bounds();
        }
        GestureOutcome::Resized { node, position }
    }

    fn start_drag(&mut self, index: usize, offset: Point) -> GestureOutcome {
        if self.drag.is_some() {
            return GestureOutcome::Ignored;
        }
        let (Some(entry), Some(tile), Some(source)) = (
            self.order.get(index),
            self.bounds.rect(index),
            self.tree.leaf(index),
        ) else {
            return GestureOutcome::Ignored;
        };
        self.drag = Some(TileDrag::start(
            entry.id.clone(),
            index,
            source,
            tile,
            offset,
        ));
        GestureOutcome::DragStarted { index }
    }

    fn end_drag(&mut self) -> GestureOutcome {
        let Some(drag) = self.drag.take() else {
            return GestureOutcome::Ignored;
        };
        match drag.swap_target() {
            Some(to) if self.order.swap(drag.index(), to) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    from = drag.index(),
                    to,
                    id = %drag.id(),
                    "tiles swapped"
                );
                GestureOutcome::Swapped {
                    from: drag.index(),
                    to,
                }
            }
            _ => GestureOutcome::DragEnded,
        }
    }

    fn refresh_bounds(&mut self) {
        self.bounds =
            self.tree
                .to_bitmap_bounds(self.container, self.style.flips(), self.style.spacing);
    }
}
