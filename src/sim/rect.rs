//! Axis-aligned rectangle geometry for bricks and the paddle
//!
//! A rectangle is defined by its top-left corner and size, matching screen
//! coordinates (y grows downward).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height (both non-negative)
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Build a rectangle from its center point
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            min: center - Vec2::new(width / 2.0, height / 2.0),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Check if a point lies inside the rectangle (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Grow the rectangle by a margin on all four sides
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(margin),
            size: self.size + Vec2::splat(margin * 2.0),
        }
    }

    /// Circle-vs-rectangle overlap, approximated as the circle's bounding box
    /// against the rectangle (the arcade-classic expanded-rectangle test).
    pub fn overlaps_circle_box(&self, center: Vec2, radius: f32) -> bool {
        self.expand(radius).contains_point(center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let rect = Rect::new(10.0, 20.0, 80.0, 30.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 90.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 50.0);
        assert_eq!(rect.center(), Vec2::new(50.0, 35.0));
    }

    #[test]
    fn test_from_center_round_trips() {
        let rect = Rect::from_center(Vec2::new(400.0, 550.0), 100.0, 20.0);
        assert_eq!(rect.left(), 350.0);
        assert_eq!(rect.right(), 450.0);
        assert_eq!(rect.center(), Vec2::new(400.0, 550.0));
    }

    #[test]
    fn test_contains_point_inclusive() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_point(Vec2::new(0.0, 0.0)));
        assert!(rect.contains_point(Vec2::new(10.0, 10.0)));
        assert!(rect.contains_point(Vec2::new(5.0, 5.0)));
        assert!(!rect.contains_point(Vec2::new(10.1, 5.0)));
        assert!(!rect.contains_point(Vec2::new(5.0, -0.1)));
    }

    #[test]
    fn test_overlaps_circle_box() {
        let rect = Rect::new(0.0, 50.0, 80.0, 30.0);
        // Circle center just outside the right edge, but within radius
        assert!(rect.overlaps_circle_box(Vec2::new(85.0, 65.0), 10.0));
        // Too far away
        assert!(!rect.overlaps_circle_box(Vec2::new(95.0, 65.0), 10.0));
        // Corner case: bounding-box test accepts the corner diagonal
        assert!(rect.overlaps_circle_box(Vec2::new(88.0, 88.0), 10.0));
    }
}
