//! Storage abstraction for persistence.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::canvas::Document;
use thiserror::Error;

/// Storage errors.
///
/// Every variant is recoverable: a failed save leaves the stored copy
/// untouched, a failed load leaves the in-memory document untouched.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no saved shapes: {0}")]
    NotFound(String),
    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A place the shape collection can be saved to and loaded from.
///
/// Backends are synchronous; the editor is single-threaded and runs every
/// command to completion before returning to the GUI.
pub trait Storage {
    /// Save the document, replacing any previous contents.
    fn save(&self, document: &Document) -> StorageResult<()>;

    /// Load the document.
    fn load(&self) -> StorageResult<Document>;

    /// Check whether saved contents exist.
    fn exists(&self) -> bool;
}
