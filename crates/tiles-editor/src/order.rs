//! Which content sits in which tile.
//!
//! The order is indexed by leaf index: entry `i` is drawn in the tile whose
//! leaf index is `i`. Reordering never touches the layout tree.

use std::fmt;

use serde::{Deserialize, Serialize};
use tiles_core::{Point, Size};

use crate::alignment::TileAlignment;
use crate::error::OrderError;
use crate::scale::TileContentScale;

/// Opaque identity of a piece of tile content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThumbnailId(String);

impl ThumbnailId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThumbnailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThumbnailId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ThumbnailId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Content shown in one tile, with its user pan and zoom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailConfiguration {
    pub id: ThumbnailId,
    #[serde(default)]
    pub alignment: TileAlignment,
    #[serde(default)]
    pub scale: TileContentScale,
}

impl ThumbnailConfiguration {
    /// Centered, unzoomed content.
    #[must_use]
    pub fn new(id: impl Into<ThumbnailId>) -> Self {
        Self {
            id: id.into(),
            alignment: TileAlignment::default(),
            scale: TileContentScale::default(),
        }
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: TileAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: TileContentScale) -> Self {
        self.scale = scale;
        self
    }

    /// Drop user pan and zoom.
    pub fn reset(&mut self) {
        self.alignment.reset();
        self.scale.reset();
    }
}

/// Immutable content order, as handed to a renderer or persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileGridOrder {
    entries: Vec<ThumbnailConfiguration>,
}

impl TileGridOrder {
    #[must_use]
    pub fn new(entries: Vec<ThumbnailConfiguration>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ThumbnailConfiguration> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ThumbnailConfiguration> {
        self.entries.iter()
    }

    /// Ids in tile order.
    pub fn ids(&self) -> impl Iterator<Item = &ThumbnailId> + '_ {
        self.entries.iter().map(|entry| &entry.id)
    }

    /// Check that the order supplies one entry per tile.
    pub fn check_len(&self, tile_count: usize) -> Result<(), OrderError> {
        if self.entries.len() == tile_count {
            Ok(())
        } else {
            Err(OrderError::LengthMismatch {
                expected: tile_count,
                actual: self.entries.len(),
            })
        }
    }

    #[must_use]
    pub fn to_mutable(&self) -> MutableTileGridOrder {
        MutableTileGridOrder {
            entries: self.entries.clone(),
        }
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<ThumbnailConfiguration> {
        self.entries
    }
}

impl FromIterator<ThumbnailConfiguration> for TileGridOrder {
    fn from_iter<I: IntoIterator<Item = ThumbnailConfiguration>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TileGridOrder {
    type Item = &'a ThumbnailConfiguration;
    type IntoIter = std::slice::Iter<'a, ThumbnailConfiguration>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Content order being edited: swaps, per-tile pan and zoom.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MutableTileGridOrder {
    entries: Vec<ThumbnailConfiguration>,
}

impl MutableTileGridOrder {
    #[must_use]
    pub fn new(entries: Vec<ThumbnailConfiguration>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ThumbnailConfiguration> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ThumbnailConfiguration> {
        self.entries.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ThumbnailConfiguration> {
        self.entries.iter()
    }

    /// Exchange the content of two tiles. Returns whether anything moved.
    ///
    /// Swapping a tile with itself or with an index past the end is a no-op.
    pub fn swap(&mut self, first: usize, second: usize) -> bool {
        if first == second || first >= self.entries.len() || second >= self.entries.len() {
            return false;
        }
        self.entries.swap(first, second);
        true
    }

    /// Pan the content of tile `index` drawn at `size`.
    pub fn pan(&mut self, index: usize, delta: Point, size: Size) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };
        entry.alignment.pan(delta, size);
        true
    }

    /// Zoom the content of tile `index`.
    pub fn zoom(&mut self, index: usize, change: f32) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };
        entry.scale.zoom(change);
        true
    }

    /// Drop pan and zoom on every tile. The order itself is kept.
    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.reset();
        }
    }

    #[must_use]
    pub fn to_read_only(&self) -> TileGridOrder {
        TileGridOrder::new(self.entries.clone())
    }
}

impl From<TileGridOrder> for MutableTileGridOrder {
    fn from(order: TileGridOrder) -> Self {
        Self::new(order.into_inner())
    }
}
