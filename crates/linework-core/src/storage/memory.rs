//! In-memory storage implementation.

use super::{Storage, StorageError, StorageResult};
use crate::canvas::Document;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
///
/// Holds the serialized text so that loading exercises the same decode path
/// as the file backend.
#[derive(Default)]
pub struct MemoryStorage {
    contents: RwLock<Option<String>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&self, document: &Document) -> StorageResult<()> {
        let mut contents = self
            .contents
            .write()
            .map_err(|e| StorageError::Io(format!("lock error: {}", e)))?;
        *contents = Some(document.to_text());
        Ok(())
    }

    fn load(&self) -> StorageResult<Document> {
        let contents = self
            .contents
            .read()
            .map_err(|e| StorageError::Io(format!("lock error: {}", e)))?;
        contents
            .as_deref()
            .map(Document::from_text)
            .ok_or_else(|| StorageError::NotFound("memory storage is empty".to_string()))
    }

    fn exists(&self) -> bool {
        self.contents
            .read()
            .map(|contents| contents.is_some())
            .unwrap_or(false)
    }
}
