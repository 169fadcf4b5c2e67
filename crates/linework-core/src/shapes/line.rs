//! Line shape.

use super::geometry::Point;
use super::{Color, ShapeId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which endpoint of a line is being referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineEnd {
    Start,
    End,
}

/// A straight line segment between two endpoints.
///
/// The midpoint is cached so hit testing does not recompute it on every
/// pointer event; every mutation goes through a method that keeps it current.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ShapeId,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Cached midpoint, kept consistent by `update_center`.
    center: Point,
    /// Stroke color.
    pub color: Color,
}

impl Line {
    /// Create a new line from its two endpoints.
    pub fn new(start: Point, end: Point, color: Color) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            center: Point::midpoint(start, end),
            color,
        }
    }

    /// Get the cached midpoint.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Translate the whole line, endpoints and cached center alike.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.start.translate(dx, dy);
        self.end.translate(dx, dy);
        self.center.translate(dx, dy);
    }

    /// Find an endpoint within `radius` of `point`, start checked first.
    pub fn endpoint_near(&self, point: Point, radius: f64) -> Option<LineEnd> {
        if self.start.distance(point) <= radius {
            Some(LineEnd::Start)
        } else if self.end.distance(point) <= radius {
            Some(LineEnd::End)
        } else {
            None
        }
    }

    /// Move one endpoint to a new position and recompute the center.
    pub fn set_endpoint(&mut self, end: LineEnd, position: Point) {
        match end {
            LineEnd::Start => self.start = position,
            LineEnd::End => self.end = position,
        }
        self.update_center();
    }

    /// Recompute the cached midpoint from the current endpoints.
    fn update_center(&mut self) {
        self.center = Point::midpoint(self.start, self.end);
    }
}
