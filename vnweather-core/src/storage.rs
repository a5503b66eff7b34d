//! Key-value storage port for the saved-city blob.
//!
//! The app only ever needs `load` at startup and `save` after each change.
//! Writes are fire-and-forget: failures are logged, never returned, and a
//! write that does not finish before the process dies is simply lost.

use parking_lot::Mutex;
use std::{fs, io, path::PathBuf};
use tracing::warn;

/// File name of the saved-city blob inside the data directory.
pub const SAVED_CITIES_FILE: &str = "saved_cities.json";

pub trait CityStore: Send + Sync {
    /// The last saved blob, if any.
    fn load(&self) -> Option<Vec<u8>>;

    /// Replace the stored blob.
    fn save(&self, bytes: Vec<u8>);
}

/// Stores the blob in a single file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, bytes)
    }
}

impl CityStore for FileStore {
    fn load(&self) -> Option<Vec<u8>> {
        match fs::read(&self.path) {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %self.path.display(), "Failed to read saved cities: {e}");
                None
            }
        }
    }

    fn save(&self, bytes: Vec<u8>) {
        if let Err(e) = self.write(&bytes) {
            warn!(path = %self.path.display(), "Failed to write saved cities: {e}");
        }
    }
}

/// In-process store, for tests and embedders without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Mutex<Option<Vec<u8>>>,
    writes: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(bytes: Vec<u8>) -> Self {
        Self {
            blob: Mutex::new(Some(bytes)),
            writes: Mutex::new(0),
        }
    }

    /// Number of `save` calls so far.
    pub fn writes(&self) -> usize {
        *self.writes.lock()
    }

    pub fn blob(&self) -> Option<Vec<u8>> {
        self.blob.lock().clone()
    }
}

impl CityStore for MemoryStore {
    fn load(&self) -> Option<Vec<u8>> {
        self.blob()
    }

    fn save(&self, bytes: Vec<u8>) {
        *self.blob.lock() = Some(bytes);
        *self.writes.lock() += 1;
    }
}

impl<T: CityStore + ?Sized> CityStore for std::sync::Arc<T> {
    fn load(&self) -> Option<Vec<u8>> {
        (**self).load()
    }

    fn save(&self, bytes: Vec<u8>) {
        (**self).save(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join(SAVED_CITIES_FILE));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn file_store_creates_parent_dirs_and_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("cities.json"));

        store.save(b"[1,2,3]".to_vec());
        assert_eq!(store.load().as_deref(), Some(&b"[1,2,3]"[..]));

        store.save(b"[]".to_vec());
        assert_eq!(store.load().as_deref(), Some(&b"[]"[..]));
    }

    #[test]
    fn file_store_write_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the write fail.
        let store = FileStore::new(dir.path());
        store.save(b"[]".to_vec());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn memory_store_counts_writes() {
        let store = MemoryStore::new();
        assert_eq!(store.load(), None);

        store.save(b"a".to_vec());
        store.save(b"b".to_vec());
        assert_eq!(store.writes(), 2);
        assert_eq!(store.load(), Some(b"b".to_vec()));
    }
}
