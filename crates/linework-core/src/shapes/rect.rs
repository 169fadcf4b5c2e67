//! Rectangle shape.

use super::geometry::Point;
use super::{Color, ShapeId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned filled rectangle.
///
/// Always stored normalized: `position` is the top-left corner and
/// `width`/`height` are non-negative, whichever way the user dragged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rect {
    pub(crate) id: ShapeId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the rectangle (non-negative).
    pub width: i32,
    /// Height of the rectangle (non-negative).
    pub height: i32,
    /// Fill color.
    pub color: Color,
}

impl Rect {
    /// Create a rectangle from two opposite corner points, in any order.
    pub fn from_corners(p1: Point, p2: Point, color: Color) -> Self {
        Self {
            id: Uuid::new_v4(),
            position: Point::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            width: (p1.x - p2.x).abs(),
            height: (p1.y - p2.y).abs(),
            color,
        }
    }

    /// Center of the rectangle, truncating toward the top-left on odd sizes.
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.width / 2,
            self.position.y + self.height / 2,
        )
    }

    /// Translate the rectangle.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.position.translate(dx, dy);
    }
}
