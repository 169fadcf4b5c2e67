//! Shape definitions for the drawing canvas.

mod circle;
mod geometry;
mod line;
mod rect;

pub use circle::Circle;
pub use geometry::Point;
pub use line::{Line, LineEnd};
pub use rect::Rect;

use crate::surface::Surface;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for shapes.
///
/// Ids are runtime-only: they never appear in the text format and are
/// regenerated whenever a shape is decoded.
pub type ShapeId = Uuid;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    /// Create a new color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color from three text fields, as typed into the color inputs.
    ///
    /// Each component must be an integer in `0..=255`; otherwise the whole
    /// parse fails and the caller keeps whatever color it had before.
    pub fn from_components(r: &str, g: &str, b: &str) -> Result<Color, ColorParseError> {
        let channel = |name: &'static str, value: &str| {
            value
                .trim()
                .parse::<u8>()
                .map_err(|_| ColorParseError::Channel {
                    channel: name,
                    value: value.to_string(),
                })
        };
        Ok(Color::new(
            channel("red", r)?,
            channel("green", g)?,
            channel("blue", b)?,
        ))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Error from parsing user-entered color components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("invalid {channel} component {value:?}: expected an integer in 0..=255")]
    Channel {
        channel: &'static str,
        value: String,
    },
}

/// The closed set of shape variants.
///
/// Every operation dispatches with an exhaustive match; adding a variant
/// means the compiler walks you through draw, translate, and the codec.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Line(Line),
    Rect(Rect),
    Circle(Circle),
}

impl Shape {
    /// Get the unique identifier.
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Line(s) => s.id,
            Shape::Rect(s) => s.id,
            Shape::Circle(s) => s.id,
        }
    }

    /// Get the shape's color.
    pub fn color(&self) -> Color {
        match self {
            Shape::Line(s) => s.color,
            Shape::Rect(s) => s.color,
            Shape::Circle(s) => s.color,
        }
    }

    /// Get the shape's center point.
    pub fn center(&self) -> Point {
        match self {
            Shape::Line(s) => s.center(),
            Shape::Rect(s) => s.center(),
            Shape::Circle(s) => s.center,
        }
    }

    /// Translate the shape by a delta, keeping derived points consistent.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        match self {
            Shape::Line(s) => s.translate(dx, dy),
            Shape::Rect(s) => s.translate(dx, dy),
            Shape::Circle(s) => s.translate(dx, dy),
        }
    }

    /// Points a pointer click is tested against when selecting this shape:
    /// the center, plus both endpoints for lines.
    pub fn anchor_points(&self) -> Vec<Point> {
        match self {
            Shape::Line(s) => vec![s.center(), s.start, s.end],
            Shape::Rect(s) => vec![s.center()],
            Shape::Circle(s) => vec![s.center],
        }
    }

    /// Draw the shape onto a surface, one primitive call per variant.
    pub fn draw(&self, surface: &mut dyn Surface) {
        match self {
            Shape::Line(s) => surface.stroke_line(s.start, s.end, s.color),
            Shape::Rect(s) => surface.fill_rect(s.position, s.width, s.height, s.color),
            Shape::Circle(s) => surface.fill_circle(s.center, s.radius, s.color),
        }
    }

    /// Encode the shape as a single-line, space-separated record.
    ///
    /// The leading token names the variant, the trailing three tokens are
    /// always RGB, and the geometry fields sit in between.
    pub fn to_record(&self) -> String {
        match self {
            Shape::Line(s) => format!(
                "LINE {} {} {} {} {} {} {}",
                s.start.x, s.start.y, s.end.x, s.end.y, s.color.r, s.color.g, s.color.b
            ),
            Shape::Rect(s) => format!(
                "RECTANGLE {} {} {} {} {} {} {}",
                s.position.x, s.position.y, s.width, s.height, s.color.r, s.color.g, s.color.b
            ),
            Shape::Circle(s) => format!(
                "CIRCLE {} {} {} {} {} {}",
                s.center.x, s.center.y, s.radius, s.color.r, s.color.g, s.color.b
            ),
        }
    }

    /// Decode a shape from a record line.
    ///
    /// Returns `None` on an unknown type token, a wrong field count, or any
    /// non-integer field; callers treat that as "skip this line".
    pub fn from_record(record: &str) -> Option<Shape> {
        let tokens: Vec<&str> = record.split_whitespace().collect();
        let (kind, rest) = tokens.split_first()?;
        if rest.len() < 4 {
            return None;
        }
        let (geometry, rgb) = rest.split_at(rest.len() - 3);
        let color = Color::new(
            rgb[0].parse().ok()?,
            rgb[1].parse().ok()?,
            rgb[2].parse().ok()?,
        );
        let fields: Vec<i32> = geometry
            .iter()
            .map(|t| t.parse().ok())
            .collect::<Option<_>>()?;

        match (*kind, fields.as_slice()) {
            ("LINE", &[x1, y1, x2, y2]) => Some(Shape::Line(Line::new(
                Point::new(x1, y1),
                Point::new(x2, y2),
                color,
            ))),
            // Width/height are re-normalized through the corner constructor,
            // so a record with negative extents still yields valid geometry.
            // Extents whose far corner does not fit in i32 are malformed,
            // as is i32::MIN, which the normalization cannot take the abs of.
            ("RECTANGLE", &[x, y, w, h]) if w != i32::MIN && h != i32::MIN => {
                let far = Point::new(x.checked_add(w)?, y.checked_add(h)?);
                Some(Shape::Rect(Rect::from_corners(Point::new(x, y), far, color)))
            }
            ("CIRCLE", &[cx, cy, radius]) if radius >= 0 => {
                Some(Shape::Circle(Circle::new(Point::new(cx, cy), radius, color)))
            }
            _ => None,
        }
    }
}
