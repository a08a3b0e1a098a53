//! Axis-aligned bounding box implementation using glam
//!
//! Sketched rectangles never rotate, so all geometry stays axis-aligned and
//! the queries the heuristics depend on reduce to coordinate comparisons.
//! Containment and point tests here are deliberately *strict*: a rectangle
//! touching an edge of another does not count as nested inside it, and a
//! corner sitting exactly on an edge does not count as intersecting.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box represented by minimum and maximum points
///
/// `min` is the top-left corner in screen coordinates, `max` the
/// bottom-right. Constructors don't validate ordering; a drag that ends up
/// with a negative extent produces an empty bounds, which every predicate
/// treats as unclassifiable.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// The minimum point (top-left in screen coordinates)
    pub min: Vec2,
    /// The maximum point (bottom-right in screen coordinates)
    pub max: Vec2,
}

impl Bounds {
    /// Creates a new bounds from minimum and maximum points
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Creates a bounds from left/top/right/bottom edges
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            min: Vec2::new(left, top),
            max: Vec2::new(right, bottom),
        }
    }

    /// Creates bounds from two corner points, automatically ordering them
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Returns the width of the bounds
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Returns the height of the bounds
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Returns the area of the bounds
    ///
    /// Extents are taken as absolute values so a rect drawn "backwards"
    /// still compares sensibly in smallest-area scans.
    pub fn area(&self) -> f32 {
        self.width().abs() * self.height().abs()
    }

    /// Returns the width/height aspect ratio, or `None` for a degenerate
    /// (non-positive height) bounds
    ///
    /// Zero-height rects have no meaningful ratio; callers treat `None` as
    /// "fails every ratio test" so degenerate shapes fall through to the
    /// generic container classification.
    pub fn ratio(&self) -> Option<f32> {
        let h = self.height();
        if h > 0.0 {
            Some(self.width() / h)
        } else {
            None
        }
    }

    /// Tests if a point lies strictly inside the bounds
    ///
    /// Points on the boundary are *not* inside.
    pub fn point_inside(&self, x: f32, y: f32) -> bool {
        x > self.min.x && x < self.max.x && y > self.min.y && y < self.max.y
    }

    /// Tests if `inner` is strictly contained within this bounds
    ///
    /// All four edges of `inner` must lie strictly within this bounds;
    /// touching edges do not count. Strictness makes containment
    /// antisymmetric, which the forest builder relies on.
    pub fn contains(&self, inner: &Self) -> bool {
        inner.min.x > self.min.x
            && inner.min.y > self.min.y
            && inner.max.x < self.max.x
            && inner.max.y < self.max.y
    }

    /// Tests whether any corner of `other` lies strictly inside this bounds
    ///
    /// This is asymmetric: only `other`'s corners are tested. A caller
    /// needing symmetric overlap must test both directions; the split-layout
    /// heuristic relies on exactly this corner semantics for its drag-handle
    /// check.
    pub fn intersects_corners(&self, other: &Self) -> bool {
        self.point_inside(other.min.x, other.min.y)
            || self.point_inside(other.max.x, other.min.y)
            || self.point_inside(other.max.x, other.max.y)
            || self.point_inside(other.min.x, other.max.y)
    }

    /// Returns the four corner points of the bounds
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }
}

/// Returns the index of the smallest bounds by area, or `None` for an empty
/// slice
///
/// Linear scan; the first minimal element wins ties, which is observable
/// behavior (the split-layout handle pick depends on it).
pub fn smallest_by_area(bounds: &[Bounds]) -> Option<usize> {
    let mut smallest: Option<(usize, f32)> = None;
    for (ix, b) in bounds.iter().enumerate() {
        let area = b.area();
        match smallest {
            Some((_, best)) if area >= best => {}
            _ => smallest = Some((ix, area)),
        }
    }
    smallest.map(|(ix, _)| ix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_size() {
        let bounds = Bounds::from_edges(10.0, 20.0, 110.0, 70.0);
        assert_eq!(bounds.width(), 100.0);
        assert_eq!(bounds.height(), 50.0);
        assert_eq!(bounds.area(), 5000.0);
        assert_eq!(bounds.ratio(), Some(2.0));
    }

    #[test]
    fn test_degenerate_ratio() {
        let flat = Bounds::from_edges(0.0, 10.0, 100.0, 10.0);
        assert_eq!(flat.ratio(), None);

        let inverted = Bounds::from_edges(0.0, 20.0, 100.0, 10.0);
        assert_eq!(inverted.ratio(), None);
    }

    #[test]
    fn test_point_inside_is_strict() {
        let bounds = Bounds::from_edges(0.0, 0.0, 100.0, 100.0);
        assert!(bounds.point_inside(50.0, 50.0));
        assert!(!bounds.point_inside(0.0, 50.0));
        assert!(!bounds.point_inside(100.0, 50.0));
        assert!(!bounds.point_inside(50.0, 0.0));
    }

    #[test]
    fn test_contains_is_strict_and_antisymmetric() {
        let outer = Bounds::from_edges(0.0, 0.0, 100.0, 100.0);
        let inner = Bounds::from_edges(10.0, 10.0, 90.0, 90.0);
        let touching = Bounds::from_edges(0.0, 10.0, 90.0, 90.0);

        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(!outer.contains(&touching));
        assert!(!outer.contains(&outer));
    }

    #[test]
    fn test_intersects_corners_is_asymmetric() {
        // b pokes its top-left corner into a
        let a = Bounds::from_edges(0.0, 0.0, 100.0, 100.0);
        let b = Bounds::from_edges(50.0, 50.0, 200.0, 200.0);
        assert!(a.intersects_corners(&b));

        // a crosses b like a plus sign: overlap without any corner inside
        let bar = Bounds::from_edges(-50.0, 40.0, 150.0, 60.0);
        let post = Bounds::from_edges(40.0, -50.0, 60.0, 150.0);
        assert!(!bar.intersects_corners(&post));
        assert!(!post.intersects_corners(&bar));
    }

    #[test]
    fn test_smallest_by_area_first_wins() {
        let bounds = [
            Bounds::from_edges(0.0, 0.0, 10.0, 10.0),
            Bounds::from_edges(0.0, 0.0, 5.0, 5.0),
            Bounds::from_edges(20.0, 20.0, 25.0, 25.0),
        ];
        // Both 5x5 rects tie; the first one encountered wins.
        assert_eq!(smallest_by_area(&bounds), Some(1));
        assert_eq!(smallest_by_area(&[]), None);
    }
}
