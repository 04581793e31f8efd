#![forbid(unsafe_code)]

//! Layout: split trees, the topology catalog, and bounds derivation.
//!
//! # Role in the workspace
//! `tiles-layout` owns the recursive space-partition model behind a tile grid.
//! It builds trees from the fixed catalog, derives pixel rectangles or
//! symbolic anchors for any container size, and moves dividers under the
//! minimum tile size clamp.
//!
//! # Primary responsibilities
//! - **Tree model**: [`MutableTileGridLayoutTree`] with node and edge arenas.
//! - **Builder**: [`TileGridLayoutTreeBuilder`] for nested chain declarations.
//! - **Catalog**: [`TileGridLayout`] and [`layout_tree`].
//! - **Derivation**: [`TileGridBounds`] (pixels) and [`AnchorSet`] (anchors).
//! - **Resize**: `update_position_by` and `drag_divider` with [`MIN_TILE_SIZE`].
//!
//! # Example
//! ```
//! use tiles_core::{FlipAxes, Size};
//! use tiles_layout::{GridThree, layout_tree};
//!
//! let tree = layout_tree(GridThree::One.into(), None).expect("catalog entry");
//! let bounds = tree.to_bitmap_bounds(Size::new(300.0, 300.0), FlipAxes::NONE, 0.0);
//! assert_eq!(bounds.len(), 3);
//! ```

pub mod anchor;
pub mod bounds;
pub mod builder;
pub mod catalog;
pub mod error;
pub mod resize;
pub mod snapshot;
pub mod tree;

pub use anchor::{Anchor, AnchorLink, AnchorSet, Guideline, LeafConstraints, Side};
pub use bounds::{DividerLine, TileGridBounds};
pub use builder::{ChainScope, TileGridLayoutTreeBuilder};
pub use catalog::{
    GridEight, GridFive, GridFour, GridNine, GridSeven, GridSix, GridThree, TileGridLayout,
    layout_tree,
};
pub use error::{LayoutParseError, TreeBuildError};
pub use resize::MIN_TILE_SIZE;
pub use snapshot::{TILE_GRID_SNAPSHOT_SCHEMA_VERSION, TileGridLayoutSnapshot};
pub use tree::{Bounds, Edge, EdgeId, EdgeKind, MutableTileGridLayoutTree, Node, NodeId, NodeKind};

pub use tiles_core::{FlipAxes, Orientation, Point, Rect, Size};
