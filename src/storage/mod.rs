//! The persistence port the record store writes through.
//!
//! State is a handful of named text blobs. `BlobStore` abstracts where they
//! live: `MemoryBlobStore` keeps them in a map (tests, embedding),
//! `FileBlobStore` keeps one file per key in a locked data directory.

mod file;

pub use file::FileBlobStore;

use crate::errors::AppResult;
use std::collections::HashMap;

/// Key-value storage for whole serialized blobs.
pub trait BlobStore {
    /// Returns the blob stored under `key`, or `None` if there is none.
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    /// Replaces the blob stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    /// Deletes the blob stored under `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

/// In-memory `BlobStore` that also counts writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
    writes: usize,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one blob.
    pub fn with_blob(key: &str, value: &str) -> Self {
        let mut blobs = HashMap::new();
        blobs.insert(key.to_string(), value.to_string());
        MemoryBlobStore { blobs, writes: 0 }
    }

    /// Number of `set` and `remove` calls made so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn contains(&self, key: &str) -> bool {
        self.blobs.contains_key(key)
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.writes += 1;
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.writes += 1;
        self.blobs.remove(key);
        Ok(())
    }
}
