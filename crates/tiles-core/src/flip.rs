#![forbid(unsafe_code)]

//! Axis flip flags.

use bitflags::bitflags;

use crate::geometry::Orientation;

bitflags! {
    /// A set of mirrored axes.
    ///
    /// Used both for what a layout node is able to mirror and for what the
    /// caller asks to be mirrored. A node is drawn mirrored on an axis only when
    /// both sets contain it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FlipAxes: u8 {
        /// No mirroring.
        const NONE       = 0b00;
        /// Mirror top/bottom.
        const VERTICAL   = 0b01;
        /// Mirror left/right.
        const HORIZONTAL = 0b10;
    }
}

impl Default for FlipAxes {
    fn default() -> Self {
        Self::NONE
    }
}

impl FlipAxes {
    /// Build a flag set from the two per-axis booleans gesture callers carry.
    #[must_use]
    pub fn from_bools(vertical: bool, horizontal: bool) -> Self {
        let mut flips = Self::NONE;
        flips.set(Self::VERTICAL, vertical);
        flips.set(Self::HORIZONTAL, horizontal);
        flips
    }

    /// The flag matching an orientation.
    #[must_use]
    pub const fn for_axis(axis: Orientation) -> Self {
        match axis {
            Orientation::Vertical => Self::VERTICAL,
            Orientation::Horizontal => Self::HORIZONTAL,
        }
    }

    /// Whether this set mirrors `axis`.
    #[inline]
    #[must_use]
    pub fn flips(self, axis: Orientation) -> bool {
        self.contains(Self::for_axis(axis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(FlipAxes::default().is_empty());
    }

    #[test]
    fn from_bools_sets_each_axis() {
        assert_eq!(FlipAxes::from_bools(true, false), FlipAxes::VERTICAL);
        assert_eq!(FlipAxes::from_bools(false, true), FlipAxes::HORIZONTAL);
        assert_eq!(FlipAxes::from_bools(true, true), FlipAxes::all());
        assert_eq!(FlipAxes::from_bools(false, false), FlipAxes::NONE);
    }

    #[test]
    fn flips_checks_axis() {
        let flips = FlipAxes::VERTICAL;
        assert!(flips.flips(Orientation::Vertical));
        assert!(!flips.flips(Orientation::Horizontal));
        assert!(FlipAxes::all().flips(Orientation::Horizontal));
    }
}
