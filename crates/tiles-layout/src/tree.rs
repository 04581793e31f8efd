//! Arena-backed layout tree.
//!
//! A tile grid is a recursive partition of a container. Internal nodes are
//! *chains* that stack their children along one axis; leaves are tiles. Every
//! node stores the offset of its leading edge as a fraction of its parent's
//! extent along the parent's stacking axis.
//!
//! # Invariants
//!
//! 1. Node ids are assigned in pre-order. The root is always [`NodeId::ROOT`]
//!    and is always internal.
//! 2. The shape (node count, nesting, orientation) never changes after
//!    construction. Only positions move.
//! 3. Leaf indices form the contiguous permutation `0..leaf_count()` in
//!    declaration order, which is also pre-order.
//! 4. `has_line` is true exactly when a node is not the first child of its
//!    chain.
//! 5. Edge back-references are fixed by the builder and never rewritten.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tiles_core::{FlipAxes, Orientation, Rect};

use crate::TileGridLayout;

/// Stable identifier of a node inside one tree.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// The root chain.
    pub const ROOT: Self = Self(0);

    /// Get the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identifier of an edge in the tree's edge arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(u32);

impl EdgeId {
    /// Get the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Role of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Leading side of the whole container.
    ContainerStart,
    /// Trailing side of the whole container.
    ContainerEnd,
    /// Leading side of one chain's frame.
    FrameStart,
    /// Trailing side of one chain's frame.
    FrameEnd,
    /// Boundary between two siblings of a chain.
    Divider,
}

impl EdgeKind {
    /// Whether this edge separates two siblings.
    #[must_use]
    pub const fn is_divider(self) -> bool {
        matches!(self, Self::Divider)
    }
}

/// One side shared by adjacent nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub(crate) axis: Orientation,
    pub(crate) kind: EdgeKind,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

impl Edge {
    /// Axis the edge is measured along.
    #[must_use]
    pub const fn axis(&self) -> Orientation {
        self.axis
    }

    #[must_use]
    pub const fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// The node that ends at this edge.
    #[must_use]
    pub const fn prev(&self) -> Option<NodeId> {
        self.prev
    }

    /// The node that starts at this edge.
    #[must_use]
    pub const fn next(&self) -> Option<NodeId> {
        self.next
    }
}

/// The four edges enclosing a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub vertical_start: EdgeId,
    pub vertical_end: EdgeId,
    pub horizontal_start: EdgeId,
    pub horizontal_end: EdgeId,
    /// A draggable divider runs along this node's leading edge.
    pub has_line: bool,
}

impl Bounds {
    /// Leading edge along `axis`.
    #[must_use]
    pub const fn start(&self, axis: Orientation) -> EdgeId {
        match axis {
            Orientation::Vertical => self.vertical_start,
            Orientation::Horizontal => self.horizontal_start,
        }
    }

    /// Trailing edge along `axis`.
    #[must_use]
    pub const fn end(&self, axis: Orientation) -> EdgeId {
        match axis {
            Orientation::Vertical => self.vertical_end,
            Orientation::Horizontal => self.horizontal_end,
        }
    }

    pub(crate) fn with_axis(mut self, axis: Orientation, start: EdgeId, end: EdgeId) -> Self {
        match axis {
            Orientation::Vertical => {
                self.vertical_start = start;
                self.vertical_end = end;
            }
            Orientation::Horizontal => {
                self.horizontal_start = start;
                self.horizontal_end = end;
            }
        }
        self
    }
}

/// Internal or leaf payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A chain with its children in stacking order.
    Internal { children: Vec<NodeId> },
    /// A tile, addressed by its index in the content order.
    Leaf { index: usize },
}

/// One node of the layout tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) key: String,
    pub(crate) orientation: Orientation,
    pub(crate) bounds: Bounds,
    pub(crate) position: f32,
    pub(crate) parent: Option<NodeId>,
    pub(crate) flips: FlipAxes,
    pub(crate) kind: NodeKind,
}

impl Node {
    /// Structural key such as `"root:1:0"`.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stacking axis for chains; the owning chain's axis for leaves.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub const fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Leading-edge offset as a fraction of the parent's extent.
    #[must_use]
    pub const fn position(&self) -> f32 {
        self.position
    }

    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Axes this node is able to mirror.
    #[must_use]
    pub const fn flips(&self) -> FlipAxes {
        self.flips
    }

    #[must_use]
    pub const fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Content index for leaves.
    #[must_use]
    pub const fn leaf_index(&self) -> Option<usize> {
        match self.kind {
            NodeKind::Leaf { index } => Some(index),
            NodeKind::Internal { .. } => None,
        }
    }

    /// Children in stacking order (empty for leaves).
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Internal { children } => children,
            NodeKind::Leaf { .. } => &[],
        }
    }

    #[must_use]
    pub const fn has_line(&self) -> bool {
        self.bounds.has_line
    }

    /// Whether this node mirrors `axis` when the caller asks for it.
    #[must_use]
    pub fn can_flip(&self, axis: Orientation) -> bool {
        self.flips.flips(axis)
    }

    /// Whether `axis` is mirrored for this node under the requested flips.
    #[must_use]
    pub fn is_flipped(&self, axis: Orientation, requested: FlipAxes) -> bool {
        self.can_flip(axis) && requested.flips(axis)
    }

    /// Name of the divider handle along the leading edge.
    #[must_use]
    pub fn line_reference(&self) -> Option<String> {
        self.bounds.has_line.then(|| format!("{}[line]", self.key))
    }

    /// Name of the gesture surface covering a leaf.
    #[must_use]
    pub fn gesture_reference(&self) -> Option<String> {
        self.is_leaf().then(|| format!("{}[gesture]", self.key))
    }
}

/// A layout tree whose positions can be changed by resize gestures.
#[derive(Debug, Clone)]
pub struct MutableTileGridLayoutTree {
    layout: TileGridLayout,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    leaves: Vec<NodeId>,
    keys: FxHashMap<String, NodeId>,
    version: u64,
}

impl MutableTileGridLayoutTree {
    pub(crate) fn from_parts(layout: TileGridLayout, nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut leaves = Vec::new();
        let mut keys = FxHashMap::default();
        for (i, node) in nodes.iter().enumerate() {
            let id = NodeId::from_index(i);
            keys.insert(node.key.clone(), id);
            if let NodeKind::Leaf { index } = node.kind {
                if leaves.len() <= index {
                    leaves.resize(index + 1, NodeId::ROOT);
                }
                leaves[index] = id;
            }
        }
        Self {
            layout,
            nodes,
            edges,
            leaves,
            keys,
            version: 0,
        }
    }

    /// The catalog entry this tree was built for.
    #[must_use]
    pub const fn layout(&self) -> TileGridLayout {
        self.layout
    }

    /// Counter bumped by every mutation that changed a position.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// All nodes in pre-order with their ids.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::from_index(i), node))
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of tiles.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Leaf node ids ordered by content index.
    #[must_use]
    pub fn leaves(&self) -> &[NodeId] {
        &self.leaves
    }

    /// Node holding content index `index`.
    #[must_use]
    pub fn leaf(&self, index: usize) -> Option<NodeId> {
        self.leaves.get(index).copied()
    }

    /// Look a node up by its structural key.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<NodeId> {
        self.keys.get(key).copied()
    }

    /// Pre-order list of every non-root position.
    ///
    /// This is the persisted form: feeding it back to the catalog rebuilds an
    /// identical tree.
    #[must_use]
    pub fn to_list(&self) -> Vec<f32> {
        self.nodes.iter().skip(1).map(|node| node.position).collect()
    }

    /// Offset of a node's leading edge within its parent.
    ///
    /// First children always start at the frame start regardless of the
    /// stored value.
    pub(crate) fn leading_offset(&self, id: NodeId) -> f32 {
        match self.node(id) {
            Some(node) if node.bounds.has_line => node.position,
            _ => 0.0,
        }
    }

    /// Offset of a node's trailing edge within its parent.
    pub(crate) fn trailing_offset(&self, id: NodeId) -> f32 {
        let Some(node) = self.node(id) else {
            return 1.0;
        };
        let Some(parent) = node.parent.and_then(|p| self.node(p)) else {
            return 1.0;
        };
        self.edge(node.bounds.end(parent.orientation))
            .and_then(|edge| edge.next)
            .map_or(1.0, |next| self.leading_offset(next))
    }

    /// Fractional offset of an edge inside the frame it belongs to.
    #[must_use]
    pub fn edge_offset(&self, id: EdgeId) -> Option<f32> {
        let edge = self.edge(id)?;
        Some(match edge.kind {
            EdgeKind::ContainerStart | EdgeKind::FrameStart => 0.0,
            EdgeKind::ContainerEnd | EdgeKind::FrameEnd => 1.0,
            EdgeKind::Divider => edge.next.map_or(1.0, |next| self.leading_offset(next)),
        })
    }

    /// Frame of a node inside the unit square, ignoring flips.
    #[must_use]
    pub fn unit_rect(&self, id: NodeId) -> Option<Rect> {
        let mut path = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.node(current)?;
            path.push(current);
            cursor = node.parent;
        }

        let mut rect = Rect::new(0.0, 0.0, 1.0, 1.0);
        for &child in path.iter().rev().skip(1) {
            let parent = self.node(child)?.parent.and_then(|p| self.node(p))?;
            let lo = self.leading_offset(child);
            let hi = self.trailing_offset(child);
            rect = match parent.orientation {
                Orientation::Vertical => {
                    let extent = rect.height();
                    Rect::new(
                        rect.left,
                        rect.top + lo * extent,
                        rect.right,
                        rect.top + hi * extent,
                    )
                }
                Orientation::Horizontal => {
                    let extent = rect.width();
                    Rect::new(
                        rect.left + lo * extent,
                        rect.top,
                        rect.left + hi * extent,
                        rect.bottom,
                    )
                }
            };
        }
        Some(rect)
    }

    /// Overwrite a position, bumping the version when it changed.
    pub(crate) fn set_position(&mut self, id: NodeId, value: f32) -> bool {
        let Some(node) = self.nodes.get_mut(id.index()) else {
            return false;
        };
        if node.position == value {
            return false;
        }
        node.position = value;
        self.version = self.version.wrapping_add(1);
        true
    }
}
