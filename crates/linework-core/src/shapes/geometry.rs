//! Integer point geometry shared by all shape variants.

use serde::{Deserialize, Serialize};

/// A point on the canvas, in integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate this point in place.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint of two points, truncating toward zero as integer division
    /// does. Summed in i64 so extreme coordinates cannot overflow.
    pub fn midpoint(a: Point, b: Point) -> Point {
        Point::new(
            ((i64::from(a.x) + i64::from(b.x)) / 2) as i32,
            ((i64::from(a.y) + i64::from(b.y)) / 2) as i32,
        )
    }
}
