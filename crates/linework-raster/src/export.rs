//! Rendering a document offscreen and encoding it as PNG.

use crate::pixmap::Pixmap;
use linework_core::{Color, Document, Shape};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Background color of exported snapshots.
pub const BACKGROUND: Color = Color {
    r: 255,
    g: 255,
    b: 255,
};

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the committed shapes (and the in-progress shape, if any) onto a
/// fresh pixmap, in draw order.
pub fn render_document(
    document: &Document,
    in_progress: Option<&Shape>,
    width: u32,
    height: u32,
) -> Pixmap {
    let mut pixmap = Pixmap::new(width, height, BACKGROUND);
    for shape in document.iter() {
        shape.draw(&mut pixmap);
    }
    if let Some(shape) = in_progress {
        shape.draw(&mut pixmap);
    }
    pixmap
}

/// Encode a pixmap as an 8-bit RGB PNG.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(pixmap.data())?;
    }
    Ok(bytes)
}

/// Encode a pixmap and write it to a file.
pub fn write_png(path: &Path, pixmap: &Pixmap) -> Result<(), ExportError> {
    let bytes = encode_png(pixmap)?;
    fs::write(path, bytes)?;
    Ok(())
}
