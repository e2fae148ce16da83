//! Mock implementations of the environment traits.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use taskdeck_core::environment::{Clock, IdGenerator};
use taskdeck_core::storage::{BlobStore, BoxFuture, StorageError};
use taskdeck_core::types::TodoId;
use uuid::Uuid;

/// Fixed clock for deterministic tests
///
/// Always returns the same time, making tests reproducible.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use taskdeck_core::environment::Clock;
/// use taskdeck_testing::FixedClock;
///
/// let clock = FixedClock::new(Utc::now());
/// assert_eq!(clock.now(), clock.now());
/// ```
#[derive(Debug, Clone)]
pub struct FixedClock {
    time: DateTime<Utc>,
}

impl FixedClock {
    /// Create a new fixed clock with the given time
    #[must_use]
    pub const fn new(time: DateTime<Utc>) -> Self {
        Self { time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.time
    }
}

/// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
///
/// # Panics
///
/// This function will panic if the hardcoded timestamp fails to parse,
/// which should never happen in practice.
#[must_use]
#[allow(clippy::expect_used)]
pub fn test_clock() -> FixedClock {
    FixedClock::new(
        DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
            .expect("hardcoded timestamp should always parse")
            .with_timezone(&Utc),
    )
}

/// Id generator yielding predictable, strictly increasing ids
///
/// Ids are UUIDs whose low 64 bits are a counter, so tests can create
/// todos and still assert on deterministic state.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create a generator starting at zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next call to `generate` will return
    #[must_use]
    pub fn peek(&self) -> TodoId {
        Self::nth(self.next.load(Ordering::SeqCst))
    }

    /// The id produced by the `n`-th call (zero-based)
    #[must_use]
    pub fn nth(n: u64) -> TodoId {
        TodoId::from_uuid(Uuid::from_u64_pair(0, n))
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> TodoId {
        Self::nth(self.next.fetch_add(1, Ordering::SeqCst))
    }
}

/// In-memory blob store for fast, deterministic persistence tests
///
/// Records every write so tests can assert on write counts as well as
/// contents.
#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
    writes: AtomicUsize,
}

impl InMemoryBlobStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one blob
    #[must_use]
    pub fn with_blob(key: &str, value: Vec<u8>) -> Self {
        let store = Self::default();
        #[allow(clippy::unwrap_used)] // fresh mutex cannot be poisoned
        store.blobs.lock().unwrap().insert(key.to_string(), value);
        store
    }

    /// Returns the current blob under `key`, if any
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned, which only happens if a
    /// previous test thread panicked while holding it.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn blob(&self, key: &str) -> Option<Vec<u8>> {
        self.blobs.lock().unwrap().get(key).cloned()
    }

    /// Number of writes performed so far
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl BlobStore for InMemoryBlobStore {
    fn read<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<Vec<u8>>, StorageError>> {
        Box::pin(async move {
            self.blobs
                .lock()
                .map_err(|e| StorageError::Io(e.to_string()))
                .map(|blobs| blobs.get(key).cloned())
        })
    }

    fn write<'a>(&'a self, key: &'a str, value: Vec<u8>) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            let mut blobs = self
                .blobs
                .lock()
                .map_err(|e| StorageError::Io(e.to_string()))?;
            blobs.insert(key.to_string(), value);
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }
}

/// Blob store whose writes always fail
///
/// Reads succeed (empty), so a store can hydrate and then hit write
/// failures - the shape of a full or revoked storage quota.
#[derive(Debug, Clone, Default)]
pub struct FailingBlobStore {
    message: String,
}

impl FailingBlobStore {
    /// Create a failing store with the given error message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl BlobStore for FailingBlobStore {
    fn read<'a>(&'a self, _key: &'a str) -> BoxFuture<'a, Result<Option<Vec<u8>>, StorageError>> {
        Box::pin(async { Ok(None) })
    }

    fn write<'a>(
        &'a self,
        _key: &'a str,
        _value: Vec<u8>,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move { Err(StorageError::QuotaExceeded(self.message.clone())) })
    }
}
