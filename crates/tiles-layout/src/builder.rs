//! Declarative construction of layout trees.
//!
//! A topology is written as nested closures:
//!
//! ```
//! use tiles_core::Orientation;
//! use tiles_layout::{GridThree, TileGridLayoutTreeBuilder};
//!
//! let tree = TileGridLayoutTreeBuilder::new(GridThree::Three.into(), Orientation::Horizontal)
//!     .build(|root| {
//!         root.leaf(0.0).chain(0.5, |column| {
//!             column.leaf(0.0).leaf(0.5);
//!         });
//!     })
//!     .expect("valid topology");
//! assert_eq!(tree.leaf_count(), 3);
//! ```
//!
//! Building runs in two phases. Declaration collects drafts while a single
//! builder context hands out leaf indices and override positions in
//! pre-order. Materialisation then lays the drafts into the node and edge
//! arenas, wiring every divider to the siblings on either side.

use tiles_core::{FlipAxes, Orientation};

use crate::error::TreeBuildError;
use crate::tree::{Bounds, Edge, EdgeId, EdgeKind, MutableTileGridLayoutTree, Node, NodeId, NodeKind};
use crate::TileGridLayout;

/// Entry point for building one tree.
#[derive(Debug, Clone)]
pub struct TileGridLayoutTreeBuilder<'p> {
    layout: TileGridLayout,
    orientation: Orientation,
    flips: FlipAxes,
    positions: Option<&'p [f32]>,
}

impl<'p> TileGridLayoutTreeBuilder<'p> {
    /// Start a tree whose root chain stacks along `orientation`.
    #[must_use]
    pub fn new(layout: TileGridLayout, orientation: Orientation) -> Self {
        Self {
            layout,
            orientation,
            flips: FlipAxes::NONE,
            positions: None,
        }
    }

    /// Axes every node of the tree is able to mirror.
    #[must_use]
    pub fn flips(mut self, flips: FlipAxes) -> Self {
        self.flips = flips;
        self
    }

    /// Saved positions replacing the declared defaults, one per non-root node
    /// in pre-order.
    #[must_use]
    pub fn positions(mut self, positions: Option<&'p [f32]>) -> Self {
        self.positions = positions;
        self
    }

    /// Declare the root chain's children and materialise the tree.
    pub fn build<F>(self, declare: F) -> Result<MutableTileGridLayoutTree, TreeBuildError>
    where
        F: FnOnce(&mut ChainScope<'_>),
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "tile_tree_build",
            layout = %self.layout,
            orientation = ?self.orientation,
            overrides = self.positions.map_or(0, <[f32]>::len)
        )
        .entered();

        let result = self.build_inner(declare);

        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::warn!(layout = %self.layout, error = %err, "tile tree build failed");
        }

        result
    }

    fn build_inner<F>(&self, declare: F) -> Result<MutableTileGridLayoutTree, TreeBuildError>
    where
        F: FnOnce(&mut ChainScope<'_>),
    {
        let mut ctx = BuilderContext::new(self.positions);
        let mut root = ChainScope {
            ctx: &mut ctx,
            key: String::from("root"),
            orientation: self.orientation,
            children: Vec::new(),
        };
        declare(&mut root);
        let children = root.children;

        if children.is_empty() {
            ctx.fail(TreeBuildError::EmptyChain {
                key: String::from("root"),
            });
        }
        ctx.check_order(&children);
        ctx.finish()?;

        let mut out = Materializer::new(self.flips);
        out.root(self.orientation, children);
        Ok(MutableTileGridLayoutTree::from_parts(
            self.layout,
            out.nodes,
            out.edges,
        ))
    }
}

/// State shared by every nested scope of one build.
#[derive(Debug)]
pub(crate) struct BuilderContext {
    leaf_counter: usize,
    overrides: Option<Vec<f32>>,
    cursor: usize,
    error: Option<TreeBuildError>,
}

impl BuilderContext {
    fn new(overrides: Option<&[f32]>) -> Self {
        Self {
            leaf_counter: 0,
            overrides: overrides.map(<[f32]>::to_vec),
            cursor: 0,
            error: None,
        }
    }

    /// Consume the next pre-order slot, preferring the saved value.
    fn take_position(&mut self, default: f32) -> f32 {
        let slot = self.cursor;
        self.cursor += 1;
        let Some(overrides) = &self.overrides else {
            return default;
        };
        let Some(&value) = overrides.get(slot) else {
            return default;
        };
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            self.fail(TreeBuildError::InvalidPosition { slot, value });
            return default;
        }
        value
    }

    fn next_leaf_index(&mut self) -> usize {
        let index = self.leaf_counter;
        self.leaf_counter += 1;
        index
    }

    /// Every non-first child must start after the previous sibling's offset
    /// (`0` for the first child) and before the end of the frame.
    fn check_order(&mut self, children: &[Draft]) {
        let mut previous = 0.0;
        for child in children.iter().skip(1) {
            let position = child.position();
            if !(position > previous && position < 1.0) {
                self.fail(TreeBuildError::UnorderedPositions {
                    key: child.key().to_owned(),
                });
                return;
            }
            previous = position;
        }
    }

    /// Remember the first failure; later ones are consequences.
    fn fail(&mut self, error: TreeBuildError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    fn finish(&mut self) -> Result<(), TreeBuildError> {
        if let Some(overrides) = &self.overrides
            && overrides.len() != self.cursor
        {
            return Err(TreeBuildError::PositionCountMismatch {
                expected: self.cursor,
                actual: overrides.len(),
            });
        }
        match self.error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Declaration scope for the children of one chain.
#[derive(Debug)]
pub struct ChainScope<'a> {
    ctx: &'a mut BuilderContext,
    key: String,
    orientation: Orientation,
    children: Vec<Draft>,
}

impl ChainScope<'_> {
    /// Axis this chain stacks its children along.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Append a tile starting at `default` of the chain's extent.
    pub fn leaf(&mut self, default: f32) -> &mut Self {
        let key = self.child_key();
        let position = self.ctx.take_position(default);
        let index = self.ctx.next_leaf_index();
        self.children.push(Draft::Leaf {
            key,
            position,
            index,
        });
        self
    }

    /// Append a nested chain stacking along the cross axis.
    pub fn chain<F>(&mut self, default: f32, declare: F) -> &mut Self
    where
        F: FnOnce(&mut ChainScope<'_>),
    {
        let key = self.child_key();
        let position = self.ctx.take_position(default);
        let orientation = self.orientation.cross();
        let mut scope = ChainScope {
            ctx: &mut *self.ctx,
            key: key.clone(),
            orientation,
            children: Vec::new(),
        };
        declare(&mut scope);
        let children = scope.children;

        if children.is_empty() {
            self.ctx.fail(TreeBuildError::EmptyChain { key: key.clone() });
        }
        self.ctx.check_order(&children);
        self.children.push(Draft::Chain {
            key,
            orientation,
            position,
            children,
        });
        self
    }

    fn child_key(&self) -> String {
        format!("{}:{}", self.key, self.children.len())
    }
}

#[derive(Debug)]
enum Draft {
    Leaf {
        key: String,
        position: f32,
        index: usize,
    },
    Chain {
        key: String,
        orientation: Orientation,
        position: f32,
        children: Vec<Draft>,
    },
}

impl Draft {
    fn key(&self) -> &str {
        match self {
            Self::Leaf { key, .. } | Self::Chain { key, .. } => key,
        }
    }

    fn position(&self) -> f32 {
        match self {
            Self::Leaf { position, .. } | Self::Chain { position, .. } => *position,
        }
    }

    fn node_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Chain { children, .. } => 1 + children.iter().map(Self::node_count).sum::<usize>(),
        }
    }
}

struct Materializer {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    flips: FlipAxes,
}

impl Materializer {
    fn new(flips: FlipAxes) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            flips,
        }
    }

    fn edge(
        &mut self,
        axis: Orientation,
        kind: EdgeKind,
        prev: Option<NodeId>,
        next: Option<NodeId>,
    ) -> EdgeId {
        let id = EdgeId::from_index(self.edges.len());
        self.edges.push(Edge {
            axis,
            kind,
            prev,
            next,
        });
        id
    }

    fn root(&mut self, orientation: Orientation, children: Vec<Draft>) {
        let root = NodeId::ROOT;
        let bounds = Bounds {
            vertical_start: self.edge(
                Orientation::Vertical,
                EdgeKind::ContainerStart,
                None,
                Some(root),
            ),
            vertical_end: self.edge(
                Orientation::Vertical,
                EdgeKind::ContainerEnd,
                Some(root),
                None,
            ),
            horizontal_start: self.edge(
                Orientation::Horizontal,
                EdgeKind::ContainerStart,
                None,
                Some(root),
            ),
            horizontal_end: self.edge(
                Orientation::Horizontal,
                EdgeKind::ContainerEnd,
                Some(root),
                None,
            ),
            has_line: false,
        };
        self.chain(
            root,
            None,
            String::from("root"),
            orientation,
            0.0,
            bounds,
            children,
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn chain(
        &mut self,
        id: NodeId,
        parent: Option<NodeId>,
        key: String,
        orientation: Orientation,
        position: f32,
        bounds: Bounds,
        children: Vec<Draft>,
    ) {
        // Sibling ids are known up front because ids follow pre-order.
        let mut ids = Vec::with_capacity(children.len());
        let mut next_id = id.index() + 1;
        for child in &children {
            ids.push(NodeId::from_index(next_id));
            next_id += child.node_count();
        }

        let last = ids.len().saturating_sub(1);
        let mut boundaries = Vec::with_capacity(ids.len() + 1);
        boundaries.push(self.edge(orientation, EdgeKind::FrameStart, None, ids.first().copied()));
        for pair in ids.windows(2) {
            boundaries.push(self.edge(
                orientation,
                EdgeKind::Divider,
                Some(pair[0]),
                Some(pair[1]),
            ));
        }
        boundaries.push(self.edge(orientation, EdgeKind::FrameEnd, ids.get(last).copied(), None));

        debug_assert_eq!(self.nodes.len(), id.index());
        self.nodes.push(Node {
            key,
            orientation,
            bounds,
            position,
            parent,
            flips: self.flips,
            kind: NodeKind::Internal {
                children: ids.clone(),
            },
        });

        for (i, (child, child_id)) in children.into_iter().zip(ids).enumerate() {
            let mut child_bounds = bounds.with_axis(orientation, boundaries[i], boundaries[i + 1]);
            child_bounds.has_line = i != 0;
            match child {
                Draft::Leaf {
                    key,
                    position,
                    index,
                } => {
                    debug_assert_eq!(self.nodes.len(), child_id.index());
                    self.nodes.push(Node {
                        key,
                        orientation,
                        bounds: child_bounds,
                        position,
                        parent: Some(id),
                        flips: self.flips,
                        kind: NodeKind::Leaf { index },
                    });
                }
                Draft::Chain {
                    key,
                    orientation: inner,
                    position,
                    children,
                } => self.chain(child_id, Some(id), key, inner, position, child_bounds, children),
            }
        }
    }
}
