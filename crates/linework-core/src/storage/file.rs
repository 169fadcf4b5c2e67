//! File-based storage: the whole document in one text file.

use super::{Storage, StorageError, StorageResult};
use crate::canvas::Document;
use std::fs;
use std::path::PathBuf;

/// Stores the document as line-oriented shape records in a single file.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a storage backed by the given file path. The file itself is
    /// only touched on save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Storage for FileStorage {
    fn save(&self, document: &Document) -> StorageResult<()> {
        fs::write(&self.path, document.to_text()).map_err(|e| {
            StorageError::Io(format!("failed to write {}: {}", self.path.display(), e))
        })
    }

    fn load(&self) -> StorageResult<Document> {
        if !self.path.exists() {
            return Err(StorageError::NotFound(self.path.display().to_string()));
        }
        let text = fs::read_to_string(&self.path).map_err(|e| {
            StorageError::Io(format!("failed to read {}: {}", self.path.display(), e))
        })?;
        Ok(Document::from_text(&text))
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Color, Line, Point, Shape};
    use tempfile::tempdir;

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("shapes.txt"));

        let mut doc = Document::new();
        doc.add(Shape::Line(Line::new(
            Point::new(10, 10),
            Point::new(50, 50),
            Color::new(255, 0, 0),
        )));

        storage.save(&doc).unwrap();
        assert!(storage.exists());

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.to_text(), doc.to_text());
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nothing.txt"));

        assert!(!storage.exists());
        assert!(matches!(storage.load(), Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_save_to_unwritable_path_is_io_error() {
        let dir = tempdir().unwrap();
        // The parent directory does not exist, so the write must fail.
        let storage = FileStorage::new(dir.path().join("missing").join("shapes.txt"));

        let result = storage.save(&Document::new());
        assert!(matches!(result, Err(StorageError::Io(_))));
    }

    #[test]
    fn test_load_skips_garbage_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shapes.txt");
        fs::write(&path, "LINE 0 0 10 10 0 0 0\n<<corrupt>>\n").unwrap();

        let loaded = FileStorage::new(path).load().unwrap();
        assert_eq!(loaded.len(), 1);
    }
}
