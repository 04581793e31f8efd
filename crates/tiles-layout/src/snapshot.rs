//! Serializable form of a layout tree.
//!
//! Only the catalog name and the flat position list are stored; the shape is
//! always rebuilt from the catalog.

use serde::{Deserialize, Serialize};

use crate::catalog::layout_tree;
use crate::error::TreeBuildError;
use crate::tree::MutableTileGridLayoutTree;
use crate::TileGridLayout;

/// Current tile grid snapshot schema version.
pub const TILE_GRID_SNAPSHOT_SCHEMA_VERSION: u16 = 1;

/// Persisted layout: catalog entry plus pre-order positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileGridLayoutSnapshot {
    #[serde(default = "default_schema_version")]
    pub schema_version: u16,
    pub layout: TileGridLayout,
    pub positions: Vec<f32>,
}

fn default_schema_version() -> u16 {
    TILE_GRID_SNAPSHOT_SCHEMA_VERSION
}

impl MutableTileGridLayoutTree {
    /// Export to snapshot form.
    #[must_use]
    pub fn to_snapshot(&self) -> TileGridLayoutSnapshot {
        TileGridLayoutSnapshot {
            schema_version: TILE_GRID_SNAPSHOT_SCHEMA_VERSION,
            layout: self.layout(),
            positions: self.to_list(),
        }
    }

    /// Rebuild a tree from a snapshot, validating schema and positions.
    pub fn from_snapshot(snapshot: &TileGridLayoutSnapshot) -> Result<Self, TreeBuildError> {
        if snapshot.schema_version != TILE_GRID_SNAPSHOT_SCHEMA_VERSION {
            return Err(TreeBuildError::UnsupportedSchemaVersion {
                version: snapshot.schema_version,
            });
        }
        layout_tree(snapshot.layout, Some(&snapshot.positions))
    }
}
