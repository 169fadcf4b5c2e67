//! Linework Core Library
//!
//! Platform-agnostic shape model, pointer-driven editor state machine, and
//! persistence for the Linework vector drawing tool. The GUI shell feeds
//! pointer events into [`Editor`] and renders through the [`Surface`] seam;
//! nothing in this crate touches a window or a rendering backend.

pub mod canvas;
pub mod editor;
pub mod shapes;
pub mod storage;
pub mod surface;

pub use canvas::Document;
pub use editor::{Editor, Mode, PointerButton, ToolKind, DEFAULT_HIT_RADIUS};
pub use shapes::{Circle, Color, Line, Point, Rect, Shape, ShapeId};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError, StorageResult};
pub use surface::Surface;
