//! Dependency injection traits and the todo environment.
//!
//! All external dependencies of the reducer are abstracted behind traits
//! and injected via [`TodoEnvironment`]. The store instance owning an
//! environment is constructed once at application start and passed by
//! handle to whatever consumes it; nothing here is reachable through a
//! global.

use crate::storage::BlobStore;
use crate::types::TodoId;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Clock trait - abstracts time operations for testability
///
/// Production code uses [`SystemClock`]; tests inject a fixed clock so
/// timestamps are deterministic.
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock reading the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Id generation for new todo records
///
/// Ids must be unique across all ids generated within one process
/// lifetime, including two calls made in the same instant.
pub trait IdGenerator: Send + Sync {
    /// Generate a fresh id
    fn generate(&self) -> TodoId;
}

/// Production id generator backed by random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> TodoId {
        TodoId::new()
    }
}

/// Injected dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for stamping `created_at` / `updated_at`
    pub clock: Arc<dyn Clock>,
    /// Generator for fresh record ids
    pub ids: Arc<dyn IdGenerator>,
    /// Blob store the save effect writes through
    pub blobs: Arc<dyn BlobStore>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { clock, ids, blobs }
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}
