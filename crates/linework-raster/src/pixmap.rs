//! An RGB pixel buffer implementing the core drawing surface.

use linework_core::{Color, Point, Surface};

/// An offscreen RGB8 pixel buffer.
///
/// All drawing is clipped to the buffer bounds; shapes hanging off the
/// canvas edge simply lose the offscreen part.
#[derive(Debug, Clone)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Create a pixmap filled with the given background color.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for _ in 0..width as usize * height as usize {
            data.extend_from_slice(&[background.r, background.g, background.b]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGB8 pixel data, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Read a pixel. Returns `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let index = self.index(x, y)?;
        Some(Color::new(
            self.data[index],
            self.data[index + 1],
            self.data[index + 2],
        ))
    }

    /// Write a pixel, silently clipping anything out of bounds.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(index) = self.index(x, y) {
            self.data[index] = color.r;
            self.data[index + 1] = color.g;
            self.data[index + 2] = color.b;
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 3)
    }
}

impl Surface for Pixmap {
    /// Bresenham line walk, one pixel per step.
    fn stroke_line(&mut self, start: Point, end: Point, color: Color) {
        let dx = (end.x - start.x).abs();
        let dy = -(end.y - start.y).abs();
        let sx = if start.x < end.x { 1 } else { -1 };
        let sy = if start.y < end.y { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (start.x, start.y);

        loop {
            self.put_pixel(x, y, color);
            if x == end.x && y == end.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn fill_rect(&mut self, top_left: Point, width: i32, height: i32, color: Color) {
        let x0 = top_left.x.max(0);
        let y0 = top_left.y.max(0);
        let x1 = (top_left.x + width).min(self.width as i32);
        let y1 = (top_left.y + height).min(self.height as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                self.put_pixel(x, y, color);
            }
        }
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) {
        let r_sq = i64::from(radius) * i64::from(radius);
        for y in center.y - radius..=center.y + radius {
            for x in center.x - radius..=center.x + radius {
                let dx = i64::from(x - center.x);
                let dy = i64::from(y - center.y);
                if dx * dx + dy * dy <= r_sq {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    const RED: Color = Color { r: 255, g: 0, b: 0 };

    #[test]
    fn test_new_is_filled_with_background() {
        let pixmap = Pixmap::new(4, 3, WHITE);
        assert_eq!(pixmap.data().len(), 4 * 3 * 3);
        assert_eq!(pixmap.pixel(0, 0), Some(WHITE));
        assert_eq!(pixmap.pixel(3, 2), Some(WHITE));
        assert_eq!(pixmap.pixel(4, 0), None);
    }

    #[test]
    fn test_stroke_line_hits_both_endpoints() {
        let mut pixmap = Pixmap::new(20, 20, WHITE);
        pixmap.stroke_line(Point::new(2, 3), Point::new(15, 11), RED);
        assert_eq!(pixmap.pixel(2, 3), Some(RED));
        assert_eq!(pixmap.pixel(15, 11), Some(RED));
    }

    #[test]
    fn test_horizontal_line_is_contiguous() {
        let mut pixmap = Pixmap::new(20, 20, WHITE);
        pixmap.stroke_line(Point::new(0, 5), Point::new(10, 5), RED);
        for x in 0..=10 {
            assert_eq!(pixmap.pixel(x, 5), Some(RED));
        }
        assert_eq!(pixmap.pixel(11, 5), Some(WHITE));
    }

    #[test]
    fn test_fill_rect_is_clipped() {
        let mut pixmap = Pixmap::new(10, 10, WHITE);
        pixmap.fill_rect(Point::new(-5, -5), 8, 8, RED);
        assert_eq!(pixmap.pixel(0, 0), Some(RED));
        assert_eq!(pixmap.pixel(2, 2), Some(RED));
        assert_eq!(pixmap.pixel(3, 3), Some(WHITE));
    }

    #[test]
    fn test_fill_circle_contains_center_not_corners() {
        let mut pixmap = Pixmap::new(21, 21, WHITE);
        pixmap.fill_circle(Point::new(10, 10), 5, RED);
        assert_eq!(pixmap.pixel(10, 10), Some(RED));
        assert_eq!(pixmap.pixel(15, 10), Some(RED)); // on the radius
        assert_eq!(pixmap.pixel(14, 14), Some(WHITE)); // outside: 4²+4² > 5²
    }

    #[test]
    fn test_zero_radius_circle_is_a_dot() {
        let mut pixmap = Pixmap::new(5, 5, WHITE);
        pixmap.fill_circle(Point::new(2, 2), 0, RED);
        assert_eq!(pixmap.pixel(2, 2), Some(RED));
        assert_eq!(pixmap.pixel(3, 2), Some(WHITE));
    }

    #[test]
    fn test_drawing_out_of_bounds_does_not_panic() {
        let mut pixmap = Pixmap::new(5, 5, WHITE);
        pixmap.stroke_line(Point::new(-10, -10), Point::new(20, 20), RED);
        pixmap.fill_circle(Point::new(-3, -3), 2, RED);
        pixmap.fill_rect(Point::new(4, 4), 100, 100, RED);
        assert_eq!(pixmap.pixel(4, 4), Some(RED));
    }
}
