//! Everything needed to reopen a tile grid: layout, content and style.

use serde::{Deserialize, Serialize};
use tiles_core::Size;
use tiles_editor::{TileGridEditor, TileGridOrder, TileGridStyle};
use tiles_layout::{MutableTileGridLayoutTree, TileGridLayoutSnapshot};

use crate::Result;

/// Persisted tile grid.
///
/// ```json
/// {
///   "layout": { "schema_version": 1, "layout": "GridThree.One", "positions": [0.0, 0.4, 0.7] },
///   "tiles": [{ "id": "a" }, { "id": "b", "scale": 2.0 }, { "id": "c" }],
///   "style": { "spacing": 4.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileGridDocument {
    pub layout: TileGridLayoutSnapshot,
    pub tiles: TileGridOrder,
    #[serde(default)]
    pub style: TileGridStyle,
}

impl TileGridDocument {
    /// Capture the current state of an editor.
    #[must_use]
    pub fn from_editor(editor: &TileGridEditor) -> Self {
        Self {
            layout: editor.tree().to_snapshot(),
            tiles: editor.order().to_read_only(),
            style: *editor.style(),
        }
    }

    /// Rebuild the tree and open an editor for a container of `container`.
    pub fn into_editor(self, container: Size) -> Result<TileGridEditor> {
        let tree = MutableTileGridLayoutTree::from_snapshot(&self.layout)?;
        Ok(TileGridEditor::new(tree, self.tiles, container, self.style)?)
    }
}
