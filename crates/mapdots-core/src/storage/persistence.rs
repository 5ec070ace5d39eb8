//! Dots slot persistence
//!
//! The store talks to storage through [`DotPersistence`]. The file-backed
//! adapter keeps the slot as a JSON file and uses atomic writes (write to
//! temp file, then rename) so a crash never leaves a half-written slot.
//!
//! Storage location: `<data_dir>/<storage_key>.json` (see `Config`)

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::models::Dot;

use super::codec::{decode_dots, encode_dots};
use super::error::{StorageError, StorageResult};

/// A single named slot that holds the serialized dots collection
pub trait DotPersistence {
    /// Read the stored collection
    ///
    /// `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> StorageResult<Option<Vec<Dot>>>;

    /// Replace the stored collection
    fn save(&mut self, dots: &[Dot]) -> StorageResult<()>;
}

/// File-backed dots slot
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    /// Create a slot at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create the slot described by a configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.dots_path())
    }

    /// Path of the slot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the slot file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Size of the slot file in bytes, 0 when absent
    pub fn size(&self) -> u64 {
        fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
    }

    /// Remove the slot file
    pub fn clear(&self) -> StorageResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::from_write(e, self.path.clone())),
        }
    }
}

impl DotPersistence for JsonFilePersistence {
    fn load(&self) -> StorageResult<Option<Vec<Dot>>> {
        let payload = match fs::read_to_string(&self.path) {
            Ok(payload) => payload,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::from_read(e, self.path.clone())),
        };
        decode_dots(&payload)
    }

    fn save(&mut self, dots: &[Dot]) -> StorageResult<()> {
        let payload = encode_dots(dots)?;
        atomic_write(&self.path, payload.as_bytes())
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::from_write(e, parent.to_path_buf()))?;
    }

    let temp_path = path.with_extension("tmp");

    let mut file =
        File::create(&temp_path).map_err(|e| StorageError::from_write(e, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|e| StorageError::from_write(e, temp_path.clone()))?;

    file.sync_all()
        .map_err(|e| StorageError::from_write(e, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|source| StorageError::AtomicWriteFailed {
        from: temp_path.clone(),
        to: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentField;
    use tempfile::TempDir;

    fn slot(temp_dir: &TempDir) -> JsonFilePersistence {
        JsonFilePersistence::new(temp_dir.path().join("interactiveMapDots.json"))
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let mut persistence = slot(&temp_dir);

        // Initially nothing stored
        assert!(!persistence.exists());
        assert!(persistence.load().unwrap().is_none());

        let mut dot = Dot::with_id("dot_1", 40.0, 60.0);
        dot.content.set(ContentField::Title, "Jerusalem");
        persistence.save(&[dot.clone()]).unwrap();
        assert!(persistence.exists());
        assert!(persistence.size() > 0);

        let loaded = persistence.load().unwrap().unwrap();
        assert_eq!(loaded, vec![dot]);
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let mut persistence = slot(&temp_dir);

        persistence
            .save(&[Dot::with_id("a", 1.0, 1.0), Dot::with_id("b", 2.0, 2.0)])
            .unwrap();
        persistence.save(&[Dot::with_id("c", 3.0, 3.0)]).unwrap();

        let loaded = persistence.load().unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "c");
        assert!(!persistence.path().with_extension("tmp").exists());
    }

    #[test]
    fn test_load_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = slot(&temp_dir);
        fs::write(persistence.path(), "[{\"id\": ").unwrap();

        let err = persistence.load().unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_clear() {
        let temp_dir = TempDir::new().unwrap();
        let mut persistence = slot(&temp_dir);
        persistence.save(&[]).unwrap();
        assert!(persistence.exists());

        persistence.clear().unwrap();
        assert!(!persistence.exists());
        // Clearing twice is fine
        persistence.clear().unwrap();
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let nested_path = temp_dir.path().join("a").join("b").join("dots.json");

        atomic_write(&nested_path, b"[]").unwrap();

        assert!(nested_path.exists());
        assert_eq!(fs::read_to_string(&nested_path).unwrap(), "[]");
    }

    #[test]
    fn test_save_into_unwritable_location_fails() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the parent directory should be
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let mut persistence = JsonFilePersistence::new(blocker.join("dots.json"));

        assert!(persistence.save(&[Dot::with_id("a", 1.0, 1.0)]).is_err());
    }
}
