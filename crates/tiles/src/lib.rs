#![forbid(unsafe_code)]

//! Tile grid public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a lightweight
//! prelude for day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use tiles_core::{FlipAxes, Orientation, Point, Rect, Size, TileGridGesture};

// --- Layout re-exports -----------------------------------------------------

pub use tiles_layout::{
    AnchorSet, DividerLine, GridEight, GridFive, GridFour, GridNine, GridSeven, GridSix, GridThree,
    LayoutParseError, MIN_TILE_SIZE, MutableTileGridLayoutTree, NodeId, TileGridBounds,
    TileGridLayout, TileGridLayoutSnapshot, TreeBuildError, layout_tree,
};

// --- Editor re-exports -----------------------------------------------------

#[cfg(feature = "editor")]
pub use tiles_editor::{
    EditorError, GestureOutcome, GestureTarget, MutableTileGridOrder, OrderError, StyleError,
    ThumbnailConfiguration, ThumbnailId, TileAlignment, TileContentScale, TileGridEditor,
    TileGridOrder, TileGridStyle,
};

#[cfg(feature = "editor")]
pub mod document;

#[cfg(feature = "editor")]
pub use document::TileGridDocument;

// --- Errors ---------------------------------------------------------------

/// Top-level error type for tile grid hosts.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A layout tree could not be built or restored.
    Build(TreeBuildError),
    /// A layout name did not parse.
    Parse(LayoutParseError),
    /// Content or style did not fit the layout.
    #[cfg(feature = "editor")]
    Editor(EditorError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build(err) => write!(f, "{err}"),
            Self::Parse(err) => write!(f, "{err}"),
            #[cfg(feature = "editor")]
            Self::Editor(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Build(err) => Some(err),
            Self::Parse(err) => Some(err),
            #[cfg(feature = "editor")]
            Self::Editor(err) => Some(err),
        }
    }
}

impl From<TreeBuildError> for Error {
    fn from(err: TreeBuildError) -> Self {
        Self::Build(err)
    }
}

impl From<LayoutParseError> for Error {
    fn from(err: LayoutParseError) -> Self {
        Self::Parse(err)
    }
}

#[cfg(feature = "editor")]
impl From<EditorError> for Error {
    fn from(err: EditorError) -> Self {
        Self::Editor(err)
    }
}

/// Standard result type for tile grid APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, FlipAxes, Orientation, Point, Rect, Result, Size, TileGridBounds, TileGridGesture,
        TileGridLayout, layout_tree,
    };

    #[cfg(feature = "editor")]
    pub use crate::{
        GestureTarget, ThumbnailConfiguration, TileGridDocument, TileGridEditor, TileGridOrder,
        TileGridStyle,
    };

    pub use crate::{core, layout};

    #[cfg(feature = "editor")]
    pub use crate::editor;
}

pub use tiles_core as core;
pub use tiles_layout as layout;

#[cfg(feature = "editor")]
pub use tiles_editor as editor;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn layout_errors_convert() {
        let parsed: std::result::Result<TileGridLayout, _> = "GridTen.One".parse();
        let err = Error::from(parsed.expect_err("unknown family"));
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "unknown layout family \"GridTen\"");
    }

    #[test]
    fn build_errors_convert() {
        let err: Error = layout_tree(GridThree::One.into(), Some(&[0.0]))
            .expect_err("wrong count")
            .into();
        assert!(matches!(err, Error::Build(TreeBuildError::PositionCountMismatch { .. })));
    }
}
