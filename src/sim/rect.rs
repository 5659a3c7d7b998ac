//! Axis-aligned rectangle geometry for walls
//!
//! A rectangle is defined by its top-left origin and its size, in screen
//! coordinates (+y down). Containment is half-open so that adjacent walls
//! never both claim a shared edge and filled-rect drawing covers exactly
//! the points the collision query reports.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub origin: Vec2,
    /// Width (x) and height (y)
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.y
    }

    /// Half-open containment: x in [left, right), y in [top, bottom)
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// All four components are finite
    pub fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_interior() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(r.contains_point(Vec2::new(25.0, 40.0)));
        assert!(!r.contains_point(Vec2::new(5.0, 40.0)));
        assert!(!r.contains_point(Vec2::new(25.0, 70.0)));
    }

    #[test]
    fn test_contains_point_half_open_edges() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Top-left edges are inside
        assert!(r.contains_point(Vec2::new(0.0, 0.0)));
        assert!(r.contains_point(Vec2::new(0.0, 9.99)));
        // Bottom-right edges are outside
        assert!(!r.contains_point(Vec2::new(10.0, 5.0)));
        assert!(!r.contains_point(Vec2::new(5.0, 10.0)));
    }

    #[test]
    fn test_edges() {
        let r = Rect::new(100.0, 0.0, 20.0, 200.0);
        assert_eq!(r.left(), 100.0);
        assert_eq!(r.right(), 120.0);
        assert_eq!(r.top(), 0.0);
        assert_eq!(r.bottom(), 200.0);
    }

    #[test]
    fn test_zero_size_contains_nothing() {
        let r = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert!(!r.contains_point(Vec2::new(5.0, 5.0)));
    }
}
