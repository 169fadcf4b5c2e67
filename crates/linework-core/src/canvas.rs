//! Canvas document: the ordered collection of committed shapes.

use crate::shapes::{Point, Shape, ShapeId};
use serde::{Deserialize, Serialize};

/// The committed shapes of a drawing, in insertion order.
///
/// Insertion order is draw order: later shapes are painted over earlier
/// ones. Hit testing deliberately scans in the same order, so of two
/// overlapping candidates the earliest-inserted one wins. That tie-break is
/// inherited from the reference behavior and kept as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape; it becomes the frontmost (last painted).
    pub fn add(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Remove a shape by identity. No-op if absent.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id() == id)?;
        Some(self.shapes.remove(index))
    }

    /// Remove all shapes.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Get a shape by id.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Get a mutable reference to a shape by id.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// Iterate shapes in draw order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Find the first shape (in insertion order) with an anchor point within
    /// `radius` of `point`.
    pub fn hit_test(&self, point: Point, radius: f64) -> Option<ShapeId> {
        self.shapes
            .iter()
            .find(|s| {
                s.anchor_points()
                    .iter()
                    .any(|anchor| anchor.distance(point) <= radius)
            })
            .map(Shape::id)
    }

    /// Encode the document in the line-oriented text format, one record per
    /// shape, newline-terminated, in draw order.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for shape in &self.shapes {
            out.push_str(&shape.to_record());
            out.push('\n');
        }
        out
    }

    /// Decode a document from the text format.
    ///
    /// Each line is decoded independently; malformed lines are logged and
    /// skipped. A file where every line is skipped still decodes, to an
    /// empty document.
    pub fn from_text(text: &str) -> Self {
        let mut document = Self::new();
        for (number, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Shape::from_record(line) {
                Some(shape) => document.add(shape),
                None => log::warn!("skipping malformed shape record on line {}", number + 1),
            }
        }
        document
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
