//! Grid presentation settings.

use serde::{Deserialize, Serialize};
use tiles_core::{FlipAxes, Rect, Size};

use crate::error::StyleError;

/// Default gap between tiles and around the grid, in pixels.
pub const DEFAULT_GRID_SPACING: f32 = 8.0;

/// Default width of a divider's touch target, in pixels.
pub const DEFAULT_LINE_TOUCH_SIZE: f32 = 24.0;

/// Spacing, padding and shape of a tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileGridStyle {
    /// Space between the outer area and the grid.
    pub padding: f32,
    /// Gap between neighbouring tiles.
    pub spacing: f32,
    /// Grid width divided by grid height.
    pub aspect_ratio: f32,
    /// Mirror every flippable chain.
    pub flipped: bool,
    /// Thickness of the divider hit area.
    pub line_touch_size: f32,
}

impl Default for TileGridStyle {
    fn default() -> Self {
        Self {
            padding: DEFAULT_GRID_SPACING,
            spacing: DEFAULT_GRID_SPACING,
            aspect_ratio: 1.0,
            flipped: false,
            line_touch_size: DEFAULT_LINE_TOUCH_SIZE,
        }
    }
}

impl TileGridStyle {
    /// Build a validated style.
    pub fn new(
        padding: f32,
        spacing: f32,
        aspect_ratio: f32,
        flipped: bool,
    ) -> Result<Self, StyleError> {
        let style = Self {
            padding,
            spacing,
            aspect_ratio,
            flipped,
            ..Self::default()
        };
        style.validate()?;
        Ok(style)
    }

    #[must_use]
    pub fn with_line_touch_size(mut self, line_touch_size: f32) -> Self {
        self.line_touch_size = line_touch_size;
        self
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(StyleError::NegativePadding {
                value: self.padding,
            });
        }
        if !(self.spacing.is_finite() && self.spacing >= 0.0) {
            return Err(StyleError::NegativeSpacing {
                value: self.spacing,
            });
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(StyleError::InvalidAspectRatio {
                value: self.aspect_ratio,
            });
        }
        if !(self.line_touch_size.is_finite() && self.line_touch_size >= 0.0) {
            return Err(StyleError::NegativeTouchSize {
                value: self.line_touch_size,
            });
        }
        Ok(())
    }

    /// Flip request handed to layout derivation.
    #[must_use]
    pub fn flips(&self) -> FlipAxes {
        if self.flipped {
            FlipAxes::all()
        } else {
            FlipAxes::NONE
        }
    }

    /// Largest rectangle of `aspect_ratio` that fits `outer` once padding is
    /// removed, centered in the padded area.
    #[must_use]
    pub fn content_area(&self, outer: Rect) -> Rect {
        let padded = outer.inset(self.padding, self.padding, self.padding, self.padding);
        let available = Size::new(padded.width().max(0.0), padded.height().max(0.0));
        if available.is_empty() {
            return Rect::from_origin(padded.top_left(), Size::ZERO);
        }
        let mut size = Size::new(available.width, available.width / self.aspect_ratio);
        if size.height > available.height {
            size = Size::new(available.height * self.aspect_ratio, available.height);
        }
        let left = padded.left + (available.width - size.width) / 2.0;
        let top = padded.top + (available.height - size.height) / 2.0;
        Rect::new(left, top, left + size.width, top + size.height)
    }
}
