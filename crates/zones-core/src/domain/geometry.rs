//! Screen-space rectangles and points.
//!
//! Coordinates are in the host's virtual screen space: `x`/`y` may be negative
//! for monitors placed left of or above the primary monitor.

use serde::{Deserialize, Serialize};

/// A point in virtual screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in virtual screen space.
///
/// `x` and `y` are the top-left corner.  `right()` and `bottom()` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the top-left corner (may be negative).
    pub x: i32,
    /// Y coordinate of the top-left corner (may be negative).
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the rightmost X coordinate (exclusive).
    ///
    /// Only meaningful when [`Rect::fits_coordinate_space`] holds.
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Returns the bottommost Y coordinate (exclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Returns `true` when both sizes and both far edges fit in `i32`.
    pub fn fits_coordinate_space(&self) -> bool {
        let fits = |origin: i32, size: u32| {
            i32::try_from(size).is_ok_and(|size| origin.checked_add(size).is_some())
        };
        fits(self.x, self.width) && fits(self.y, self.height)
    }

    /// Returns `true` when both dimensions are non-zero.
    pub fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Area in square pixels.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Returns `true` if this rectangle shares area with `other`.
    ///
    /// Rectangles that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Returns `true` if `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns the smallest rectangle enclosing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        let span = |low: i32, high: i32| (i64::from(high) - i64::from(low)) as u32;
        Rect::new(x, y, span(x, right), span(y, bottom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_right_returns_x_plus_width() {
        let rect = Rect::new(100, 0, 1920, 1080);
        assert_eq!(rect.right(), 2020);
    }

    #[test]
    fn test_rect_bottom_returns_y_plus_height() {
        let rect = Rect::new(0, 50, 1920, 1080);
        assert_eq!(rect.bottom(), 1130);
    }

    #[test]
    fn test_rect_overlaps_when_rects_share_area() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 50, 100, 100);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_rect_does_not_overlap_when_sharing_an_edge() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(100, 0, 100, 100);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_rect_contains_rect_accepts_identical_rect() {
        let a = Rect::new(-1920, 0, 1920, 1040);
        assert!(a.contains_rect(&a));
    }

    #[test]
    fn test_rect_contains_rect_rejects_rect_crossing_the_edge() {
        let outer = Rect::new(0, 0, 1920, 1080);
        let inner = Rect::new(1900, 0, 40, 40);
        assert!(!outer.contains_rect(&inner));
    }

    #[test]
    fn test_rect_union_spans_side_by_side_monitors() {
        let left = Rect::new(-1920, 0, 1920, 1040);
        let right = Rect::new(0, 0, 2560, 1400);
        assert_eq!(left.union(&right), Rect::new(-1920, 0, 4480, 1400));
    }

    #[test]
    fn test_rect_is_positive_rejects_zero_height() {
        assert!(!Rect::new(0, 0, 10, 0).is_positive());
    }

    #[test]
    fn test_rect_fits_coordinate_space_rejects_overflowing_edge() {
        assert!(Rect::new(0, 0, 1920, 1080).fits_coordinate_space());
        assert!(!Rect::new(i32::MAX - 10, 0, 20, 10).fits_coordinate_space());
        assert!(!Rect::new(0, 0, 10, u32::MAX).fits_coordinate_space());
    }

    #[test]
    fn test_rect_union_of_far_apart_rects_does_not_overflow() {
        let left = Rect::new(i32::MIN, 0, 10, 10);
        let right = Rect::new(i32::MAX - 10, 0, 10, 10);

        let union = left.union(&right);

        assert_eq!(union.x, i32::MIN);
        assert_eq!(union.width, u32::MAX);
    }
}
