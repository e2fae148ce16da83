//! Persistence boundary: the blob-store trait and the todo adapter.
//!
//! The todo sequence is mirrored to exactly one named blob in a generic
//! key-value store. Which store that is (a JSON file, an in-memory map in
//! tests) is an implementation detail behind [`BlobStore`]; this module
//! owns the key, the wire encoding, and the lenient load semantics.

use crate::types::Todo;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Fixed key the todo sequence is persisted under
pub const TODOS_KEY: &str = "todoList";

/// Boxed future returned by [`BlobStore`] methods
///
/// Explicit `Pin<Box<dyn Future>>` returns instead of `async fn` keep the
/// trait dyn-compatible (`Arc<dyn BlobStore>` is captured by the save
/// effect).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Errors that can occur during blob store operations
#[derive(Error, Debug, Clone)]
pub enum StorageError {
    /// Underlying I/O failed
    #[error("I/O error: {0}")]
    Io(String),

    /// The backend refused the write for lack of space
    #[error("storage quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Key-value blob store abstraction
///
/// A deliberately minimal collaborator: one readable/replaceable blob per
/// key. Implementations must be `Send + Sync` so they can be shared with
/// spawned save effects.
pub trait BlobStore: Send + Sync {
    /// Read the blob stored under `key`, or `None` if absent
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the backend cannot be read.
    fn read<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<Vec<u8>>, StorageError>>;

    /// Replace the blob stored under `key`
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] or [`StorageError::QuotaExceeded`]
    /// when the backend cannot be written.
    fn write<'a>(&'a self, key: &'a str, value: Vec<u8>) -> BoxFuture<'a, Result<(), StorageError>>;
}

/// Blob store that stores nothing
///
/// Reads always miss and writes are discarded. Useful for doc examples
/// and for exercising the reducer without persistence.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBlobStore;

impl BlobStore for NullBlobStore {
    fn read<'a>(&'a self, _key: &'a str) -> BoxFuture<'a, Result<Option<Vec<u8>>, StorageError>> {
        Box::pin(async { Ok(None) })
    }

    fn write<'a>(
        &'a self,
        _key: &'a str,
        _value: Vec<u8>,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async { Ok(()) })
    }
}

/// Serializes the todo sequence to its wire form
///
/// # Errors
///
/// Returns [`StorageError::Serialization`] when encoding fails.
pub fn encode_todos(todos: &[Todo]) -> Result<Vec<u8>, StorageError> {
    serde_json::to_vec(todos).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Deserializes a todo sequence from its wire form
///
/// # Errors
///
/// Returns [`StorageError::Serialization`] when the bytes are not a valid
/// list of todo records.
pub fn decode_todos(bytes: &[u8]) -> Result<Vec<Todo>, StorageError> {
    serde_json::from_slice(bytes).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Loads the persisted todo sequence, recovering to empty on any problem
///
/// Missing blob, unreadable backend, and malformed content all yield an
/// empty collection; a malformed or unreadable blob is logged but never
/// surfaced as an error. The store must come up even when the persisted
/// data is garbage.
pub async fn load_todos(store: &dyn BlobStore) -> Vec<Todo> {
    match store.read(TODOS_KEY).await {
        Ok(Some(bytes)) => match decode_todos(&bytes) {
            Ok(todos) => todos,
            Err(error) => {
                tracing::warn!(%error, "persisted todo blob is malformed, starting empty");
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(error) => {
            tracing::warn!(%error, "failed to read persisted todos, starting empty");
            Vec::new()
        }
    }
}

/// Serializes and writes the full todo sequence under [`TODOS_KEY`]
///
/// Replaces any prior blob. Called once per collection mutation, never
/// debounced or batched.
///
/// # Errors
///
/// Propagates encoding and backend errors so the caller (the save
/// effect) can surface them as a persist-failure signal.
pub async fn save_todos(store: &dyn BlobStore, todos: &[Todo]) -> Result<(), StorageError> {
    let bytes = encode_todos(todos)?;
    store.write(TODOS_KEY, bytes).await
}
