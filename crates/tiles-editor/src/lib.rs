#![forbid(unsafe_code)]

//! Editor: content order, drag-reorder and gesture dispatch for tile grids.
//!
//! # Role in the workspace
//! `tiles-editor` sits on top of `tiles-layout`. It pairs a layout tree with
//! the content shown in each tile and turns classified gestures into divider
//! moves, content swaps, pans and zooms.
//!
//! # Primary responsibilities
//! - **Content order**: [`TileGridOrder`] and [`MutableTileGridOrder`].
//! - **Per-tile placement**: [`TileAlignment`] and [`TileContentScale`].
//! - **Drag-reorder**: [`TileDrag`] sessions driven by long presses.
//! - **Dispatch**: [`TileGridEditor::handle`] with [`GestureTarget`].
//! - **Style**: [`TileGridStyle`] spacing, padding, aspect ratio and flip.
//!
//! # Example
//! ```
//! use tiles_core::{Point, Size, TileGridGesture};
//! use tiles_editor::{
//!     GestureOutcome, GestureTarget, ThumbnailConfiguration, TileGridEditor, TileGridOrder,
//!     TileGridStyle,
//! };
//! use tiles_layout::{GridThree, layout_tree};
//!
//! let tree = layout_tree(GridThree::Two.into(), None).expect("catalog entry");
//! let order: TileGridOrder = ["a", "b", "c"]
//!     .into_iter()
//!     .map(ThumbnailConfiguration::new)
//!     .collect();
//! let mut editor =
//!     TileGridEditor::new(tree, order, Size::new(300.0, 100.0), TileGridStyle::default())
//!         .expect("one entry per tile");
//!
//! let outcome = editor.handle(GestureTarget::Tile(2), TileGridGesture::Zoom { factor: 2.0 });
//! assert_eq!(outcome, GestureOutcome::Zoomed { index: 2 });
//! ```

pub mod alignment;
pub mod config;
pub mod drag;
pub mod editor;
pub mod error;
pub mod order;
pub mod scale;

pub use alignment::TileAlignment;
pub use config::{DEFAULT_GRID_SPACING, DEFAULT_LINE_TOUCH_SIZE, TileGridStyle};
pub use drag::TileDrag;
pub use editor::{GestureOutcome, GestureTarget, TileGridEditor};
pub use error::{EditorError, OrderError, StyleError};
pub use order::{MutableTileGridOrder, ThumbnailConfiguration, ThumbnailId, TileGridOrder};
pub use scale::TileContentScale;
