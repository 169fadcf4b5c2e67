//! Linework software rasterizer.
//!
//! Implements the core's [`linework_core::Surface`] trait on a plain RGB
//! pixel buffer and encodes the result as PNG, so a drawing can be exported
//! without any GUI or GPU attached.

mod export;
mod pixmap;

pub use export::{encode_png, render_document, write_png, ExportError, BACKGROUND};
pub use pixmap::Pixmap;
