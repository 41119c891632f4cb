use super::BlobStore;
use crate::constants::{BLOB_FILE_EXTENSION, LOCK_FILE_NAME};
use crate::errors::{AppError, AppResult, LockError, StorageError};
use fs2::FileExt;
use std::fs::{self, File};
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// `BlobStore` backed by a directory with one `<key>.json` file per blob.
///
/// Opening the store takes an exclusive lock on `<dir>/LOCK` that is held until
/// the store is dropped, so only one process writes to a data directory at a
/// time. Blobs are written to a temporary file in the same directory and then
/// renamed over the target.
#[derive(Debug)]
pub struct FileBlobStore {
    dir: PathBuf,
    _lock_file: File,
}

impl FileBlobStore {
    /// Opens (creating if needed) the data directory and locks it.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `AppError::Config` if `dir` is not absolute
    /// - `AppError::Io` if the directory cannot be created
    /// - `AppError::Lock(LockError::FileBusy)` if another process holds the lock
    /// - `AppError::Lock(LockError::AcquisitionFailed)` for other lock failures
    pub fn open(dir: &Path) -> AppResult<Self> {
        ensure_data_directory_exists(dir)?;
        let lock_file = acquire_lock(dir)?;
        debug!("Opened data directory");

        Ok(FileBlobStore {
            dir: dir.to_path_buf(),
            _lock_file: lock_file,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()).into());
        }
        Ok(self.dir.join(format!("{}.{}", key, BLOB_FILE_EXTENSION)))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                key: key.to_string(),
                source,
            }
            .into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        let write_error = |source: io::Error| -> AppError {
            StorageError::Write {
                key: key.to_string(),
                source,
            }
            .into()
        };

        let mut temp = NamedTempFile::new_in(&self.dir).map_err(write_error)?;
        temp.write_all(value.as_bytes()).map_err(write_error)?;
        temp.as_file().sync_all().map_err(write_error)?;

        #[cfg(unix)]
        {
            use crate::constants::DEFAULT_FILE_PERMISSIONS;
            fs::set_permissions(
                temp.path(),
                fs::Permissions::from_mode(DEFAULT_FILE_PERMISSIONS),
            )
            .map_err(write_error)?;
        }

        temp.persist(&path).map_err(|e| write_error(e.error))?;
        debug!(key, bytes = value.len(), "Wrote blob");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "Removed blob");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Remove {
                key: key.to_string(),
                source,
            }
            .into()),
        }
    }
}

/// Ensures the data directory exists, creating it with owner-only permissions.
///
/// # Errors
///
/// Returns:
/// - `AppError::Config` if the provided path is not an absolute path
/// - `AppError::Io` if the directory creation fails
pub fn ensure_data_directory_exists(dir: &Path) -> AppResult<()> {
    if !dir.is_absolute() {
        return Err(AppError::Config(format!(
            "Data directory path must be absolute: {}",
            dir.display()
        )));
    }

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| {
            AppError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;

        #[cfg(unix)]
        {
            use crate::constants::DEFAULT_DIR_PERMISSIONS;
            fs::set_permissions(dir, fs::Permissions::from_mode(DEFAULT_DIR_PERMISSIONS))
                .map_err(|e| {
                    AppError::Io(io::Error::new(
                        e.kind(),
                        format!("Failed to set secure permissions on data directory: {}", e),
                    ))
                })?;
            debug!("Set 0o700 permissions on data directory");
        }
    }
    Ok(())
}

fn acquire_lock(dir: &Path) -> AppResult<File> {
    let lock_path = dir.join(LOCK_FILE_NAME);
    let lock_file = File::create(&lock_path).map_err(|source| LockError::AcquisitionFailed {
        path: lock_path.clone(),
        source,
    })?;

    lock_file.try_lock_exclusive().map_err(|source| {
        if source.kind() == fs2::lock_contended_error().kind() {
            LockError::FileBusy { path: lock_path.clone() }
        } else {
            LockError::AcquisitionFailed {
                path: lock_path.clone(),
                source,
            }
        }
    })?;

    Ok(lock_file)
}
