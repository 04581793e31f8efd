//! User zoom on top of cover scaling.

use serde::{Deserialize, Serialize};
use tiles_core::Size;

/// Zoom factor applied after the content has been scaled to cover its tile.
///
/// Never below `1`, so content always fills the tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileContentScale(f32);

impl Default for TileContentScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TileContentScale {
    pub const IDENTITY: Self = Self(1.0);

    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_finite() {
            Self(scale.max(1.0))
        } else {
            Self::IDENTITY
        }
    }

    #[must_use]
    pub const fn get(self) -> f32 {
        self.0
    }

    /// Multiply by a pinch `change`, flooring at `1`.
    pub fn zoom(&mut self, change: f32) {
        let next = self.0 * change;
        if next.is_finite() {
            self.0 = next.max(1.0);
        }
    }

    /// Uniform factor that maps `src` onto `dst`: cover, then zoom.
    #[must_use]
    pub fn scale_factor(self, src: Size, dst: Size) -> f32 {
        if src.is_empty() {
            return self.0;
        }
        let width = dst.width / src.width;
        let height = dst.height / src.height;
        width.max(height) * self.0
    }

    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_floors_at_one() {
        let mut scale = TileContentScale::default();
        scale.zoom(2.0);
        assert_eq!(scale.get(), 2.0);
        scale.zoom(0.75);
        assert_eq!(scale.get(), 1.5);
        scale.zoom(0.1);
        assert_eq!(scale.get(), 1.0);
        scale.zoom(f32::INFINITY);
        assert_eq!(scale.get(), 1.0);
    }

    #[test]
    fn scale_factor_covers_then_zooms() {
        let scale = TileContentScale::new(2.0);
        let factor = scale.scale_factor(Size::new(400.0, 200.0), Size::new(100.0, 100.0));
        // Cover needs 0.5 on the height; zoom doubles it.
        assert_eq!(factor, 1.0);
        assert_eq!(
            TileContentScale::default().scale_factor(Size::ZERO, Size::new(1.0, 1.0)),
            1.0
        );
    }

    #[test]
    fn reset_and_serde() {
        let mut scale = TileContentScale::new(3.0);
        assert_eq!(serde_json::to_string(&scale).expect("json"), "3.0");
        scale.reset();
        assert_eq!(scale, TileContentScale::IDENTITY);
        assert_eq!(TileContentScale::new(0.2).get(), 1.0);
    }
}
