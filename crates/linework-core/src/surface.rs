//! Drawing-surface seam between the shape model and whatever renders it.

use crate::shapes::{Color, Point};

/// The drawing primitives a shape can issue.
///
/// The GUI collaborator implements this against its painter; the raster
/// crate implements it against a pixel buffer for PNG export. A surface is
/// only assumed valid for the duration of a single draw call.
pub trait Surface {
    /// Stroke a straight line between two points.
    fn stroke_line(&mut self, start: Point, end: Point, color: Color);

    /// Fill an axis-aligned rectangle given by its top-left corner and size.
    fn fill_rect(&mut self, top_left: Point, width: i32, height: i32, color: Color);

    /// Fill a circle given by its center and radius.
    fn fill_circle(&mut self, center: Point, radius: i32, color: Color);
}
