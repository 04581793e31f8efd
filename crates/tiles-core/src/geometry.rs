#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are floating point pixels (or fractions of a container when a
//! type says so). Coordinates grow right and down from a top-left origin.

use serde::{Deserialize, Serialize};

/// Axis along which a chain arranges its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Children stacked top to bottom.
    Vertical,
    /// Children placed left to right.
    Horizontal,
}

impl Orientation {
    /// The perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// Component of `point` measured along this axis.
    #[inline]
    #[must_use]
    pub const fn component(self, point: Point) -> f32 {
        match self {
            Self::Vertical => point.y,
            Self::Horizontal => point.x,
        }
    }

    /// Extent of `size` along this axis.
    #[inline]
    #[must_use]
    pub const fn extent(self, size: Size) -> f32 {
        match self {
            Self::Vertical => size.height,
            Self::Horizontal => size.width,
        }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Zero-sized value.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero or negative.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A point or a displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle described by its four edges.
///
/// `left`/`top` are inclusive, `right`/`bottom` exclusive for hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Create a rectangle from its edges.
    #[inline]
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Create a rectangle from a top-left corner and a size.
    #[inline]
    #[must_use]
    pub fn from_origin(origin: Point, size: Size) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x + size.width,
            origin.y + size.height,
        )
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    #[inline]
    #[must_use]
    pub const fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Area in square pixels (zero for inverted rectangles).
    #[inline]
    #[must_use]
    pub fn area(&self) -> f32 {
        self.width().max(0.0) * self.height().max(0.0)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// Clamp a point into the rectangle so that [`Rect::contains`] holds for
    /// the result whenever the rectangle is non-empty.
    ///
    /// Trailing edges are exclusive, so points past them land on the last
    /// representable coordinate before the edge.
    #[must_use]
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            point.x.min(last_inside(self.left, self.right)).max(self.left),
            point.y.min(last_inside(self.top, self.bottom)).max(self.top),
        )
    }

    /// Shrink every edge by the matching amount.
    #[must_use]
    pub fn inset(&self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(
            self.left + left,
            self.top + top,
            self.right - right,
            self.bottom - bottom,
        )
    }

    /// Create a new rectangle that is the union of this rectangle and another.
    #[must_use]
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    #[must_use]
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);

        if left < right && top < bottom {
            Some(Rect::new(left, top, right, bottom))
        } else {
            None
        }
    }
}

fn last_inside(start: f32, end: f32) -> f32 {
    if end > start {
        (end - end.abs().max(1.0) * f32::EPSILON).max(start)
    } else {
        start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_cross_flips_axis() {
        assert_eq!(Orientation::Vertical.cross(), Orientation::Horizontal);
        assert_eq!(Orientation::Horizontal.cross(), Orientation::Vertical);
    }

    #[test]
    fn orientation_selects_component_and_extent() {
        let point = Point::new(3.0, 7.0);
        let size = Size::new(40.0, 20.0);
        assert_eq!(Orientation::Vertical.component(point), 7.0);
        assert_eq!(Orientation::Horizontal.component(point), 3.0);
        assert_eq!(Orientation::Vertical.extent(size), 20.0);
        assert_eq!(Orientation::Horizontal.extent(size), 40.0);
    }

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(9.9, 9.9)));
        assert!(!rect.contains(Point::new(10.0, 5.0)));
        assert!(!rect.contains(Point::new(5.0, 10.0)));
    }

    #[test]
    fn clamp_pulls_point_inside() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        let low = rect.clamp(Point::new(0.0, 100.0));
        assert_eq!(low.x, 10.0);
        assert!(low.y < 40.0 && low.y > 39.99);
        assert!(rect.contains(low));
        assert_eq!(rect.clamp(Point::new(15.0, 25.0)), Point::new(15.0, 25.0));
    }

    #[test]
    fn clamp_past_trailing_edges_stays_contained() {
        for rect in [
            Rect::new(0.0, 0.0, 300.0, 300.0),
            Rect::new(-20.0, -40.0, -10.0, -0.5),
            Rect::new(0.0, 0.0, 1.0e6, 0.25),
        ] {
            let corner = rect.clamp(Point::new(f32::MAX, f32::MAX));
            assert!(rect.contains(corner), "{rect:?} -> {corner:?}");
        }

        let empty = Rect::new(5.0, 5.0, 5.0, 5.0);
        assert_eq!(empty.clamp(Point::new(9.0, 1.0)), Point::new(5.0, 5.0));
    }

    #[test]
    fn inset_and_size() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0).inset(5.0, 0.0, 5.0, 10.0);
        assert_eq!(rect, Rect::new(5.0, 0.0, 95.0, 40.0));
        assert_eq!(rect.size(), Size::new(90.0, 40.0));
        assert_eq!(rect.center(), Point::new(50.0, 20.0));
    }

    #[test]
    fn union_and_intersection() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 20.0, 15.0);
        assert_eq!(a.union(&b), Rect::new(0.0, 0.0, 20.0, 15.0));
        assert_eq!(a.intersection_opt(&b), Some(Rect::new(5.0, 5.0, 10.0, 10.0)));
        let c = Rect::new(10.0, 0.0, 20.0, 10.0);
        assert_eq!(a.intersection_opt(&c), None);
    }

    #[test]
    fn point_arithmetic() {
        let mut p = Point::new(1.0, 2.0);
        p += Point::new(3.0, 4.0);
        assert_eq!(p, Point::new(4.0, 6.0));
        assert_eq!(p - Point::new(1.0, 1.0), Point::new(3.0, 5.0));
    }
}
