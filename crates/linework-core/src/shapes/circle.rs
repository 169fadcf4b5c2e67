//! Circle shape.

use super::geometry::Point;
use super::{Color, ShapeId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A filled circle given by its center and an integer radius.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Center point.
    pub center: Point,
    /// Radius in pixels (non-negative).
    pub radius: i32,
    /// Fill color.
    pub color: Color,
}

impl Circle {
    /// Create a circle directly from center and radius.
    pub fn new(center: Point, radius: i32, color: Color) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius,
            color,
        }
    }

    /// Create a circle from its center and a point on its edge.
    ///
    /// The radius is the Euclidean distance truncated to an integer.
    pub fn from_center_and_edge(center: Point, edge: Point, color: Color) -> Self {
        Self::new(center, center.distance(edge) as i32, color)
    }

    /// Translate the circle.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.center.translate(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_from_edge_point() {
        let circle =
            Circle::from_center_and_edge(Point::new(100, 100), Point::new(103, 104), Color::BLACK);
        assert_eq!(circle.radius, 5);
    }

    #[test]
    fn test_radius_truncates() {
        // distance((0,0),(2,2)) = 2.828..., truncated to 2
        let circle =
            Circle::from_center_and_edge(Point::new(0, 0), Point::new(2, 2), Color::BLACK);
        assert_eq!(circle.radius, 2);
    }

    #[test]
    fn test_translate() {
        let mut circle = Circle::new(Point::new(10, 10), 5, Color::BLACK);
        circle.translate(1, -1);
        assert_eq!(circle.center, Point::new(11, 9));
        assert_eq!(circle.radius, 5);
    }
}
