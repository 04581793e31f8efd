//! Where a tile's content sits when it overflows the tile.

use serde::{Deserialize, Serialize};
use tiles_core::{Point, Size};

/// Content offset inside a tile as a fraction of the overflow.
///
/// `(0, 0)` pins the content's top-left corner to the tile, `(1, 1)` its
/// bottom-right corner. Both components stay in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileAlignment {
    pub x: f32,
    pub y: f32,
}

impl Default for TileAlignment {
    fn default() -> Self {
        Self::CENTER
    }
}

impl TileAlignment {
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    /// Build an alignment, clamping both components into `[0, 1]`.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: unit(x, 0.5),
            y: unit(y, 0.5),
        }
    }

    /// Move the content with the finger.
    ///
    /// Dragging right reveals more of the content's left side, so the offset
    /// moves against `delta`. An axis with no extent in `size` is left alone.
    pub fn pan(&mut self, delta: Point, size: Size) {
        if size.width > 0.0 {
            self.x = unit(self.x - delta.x / size.width, self.x);
        }
        if size.height > 0.0 {
            self.y = unit(self.y - delta.y / size.height, self.y);
        }
    }

    /// Top-left of `content` placed inside `space`.
    ///
    /// Content smaller than the space produces a negative overflow and is
    /// positioned proportionally inside it.
    #[must_use]
    pub fn align(&self, content: Size, space: Size) -> Point {
        if content == space {
            return Point::ZERO;
        }
        Point::new(
            self.x * (space.width - content.width),
            self.y * (space.height - content.height),
        )
    }

    pub fn reset(&mut self) {
        *self = Self::CENTER;
    }
}

fn unit(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        fallback
    }
}
