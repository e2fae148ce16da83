//! # Taskdeck Storage
//!
//! File-backed [`BlobStore`] implementation.
//!
//! The browser original kept the todo sequence in local storage; the
//! desktop equivalent is one JSON file per blob key inside a directory
//! the application owns. [`JsonFileStore`] implements the core
//! `BlobStore` trait over such a directory.
//!
//! ## Example
//!
//! ```no_run
//! use taskdeck_core::storage::{load_todos, save_todos};
//! use taskdeck_storage::JsonFileStore;
//!
//! # async fn example() -> Result<(), taskdeck_core::storage::StorageError> {
//! let store = JsonFileStore::new("/var/lib/taskdeck");
//! let todos = load_todos(&store).await;
//! save_todos(&store, &todos).await?;
//! # Ok(())
//! # }
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use taskdeck_core::storage::{BlobStore, BoxFuture, StorageError};
use tokio::sync::Mutex;

/// Blob store persisting each key as a JSON file in one directory
///
/// Writes go through an internal async mutex so two save effects can
/// never interleave on the same file, and each write lands in a
/// temporary file that is renamed over the blob - an interrupted write
/// leaves the previous blob intact rather than a truncated one.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Creates a store rooted at `dir`
    ///
    /// The directory is created lazily on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The directory blobs are stored in
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn io_error(err: &std::io::Error) -> StorageError {
        // Out-of-space is the local-storage quota analogue; keep it
        // distinguishable from other I/O failures.
        if err.kind() == ErrorKind::StorageFull || err.kind() == ErrorKind::QuotaExceeded {
            StorageError::QuotaExceeded(err.to_string())
        } else {
            StorageError::Io(err.to_string())
        }
    }
}

impl BlobStore for JsonFileStore {
    fn read<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<Vec<u8>>, StorageError>> {
        Box::pin(async move {
            let path = self.blob_path(key);
            match tokio::fs::read(&path).await {
                Ok(bytes) => Ok(Some(bytes)),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "blob read failed");
                    Err(Self::io_error(&err))
                }
            }
        })
    }

    fn write<'a>(&'a self, key: &'a str, value: Vec<u8>) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            let _guard = self.write_lock.lock().await;

            tokio::fs::create_dir_all(&self.dir)
                .await
                .map_err(|e| Self::io_error(&e))?;

            let path = self.blob_path(key);
            let tmp = self.dir.join(format!("{key}.json.tmp"));

            tokio::fs::write(&tmp, &value)
                .await
                .map_err(|e| Self::io_error(&e))?;
            tokio::fs::rename(&tmp, &path)
                .await
                .map_err(|e| Self::io_error(&e))?;

            tracing::trace!(path = %path.display(), bytes = value.len(), "blob written");
            Ok(())
        })
    }
}
