//! # Taskdeck Testing
//!
//! Testing utilities and helpers for the Taskdeck store.
//!
//! This crate provides:
//! - Mock implementations of the environment traits (fixed clock,
//!   sequential id generator, in-memory and always-failing blob stores)
//! - The [`ReducerTest`] Given/When/Then harness
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```
//! use taskdeck_core::{TodoAction, TodoInput, TodoState};
//! use taskdeck_core::reducer::TodoReducer;
//! use taskdeck_testing::{ReducerTest, assertions, test_environment};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(test_environment())
//!     .given_state(TodoState::new())
//!     .when_action(TodoAction::Add {
//!         input: TodoInput::new("Buy milk"),
//!     })
//!     .then_state(|state| assert_eq!(state.count(), 1))
//!     .then_effects(assertions::assert_persist_effect)
//!     .run();
//! ```

use std::sync::Arc;
use taskdeck_core::TodoEnvironment;

pub mod mocks;
pub mod reducer_test;

pub use mocks::{
    FailingBlobStore, FixedClock, InMemoryBlobStore, SequentialIdGenerator, test_clock,
};
pub use reducer_test::{ReducerTest, assertions};

/// Builds a fully deterministic [`TodoEnvironment`] for reducer tests
///
/// Fixed clock, sequential ids, and an in-memory blob store (returned
/// alongside nothing - grab the store from the environment's `blobs`
/// field if the test needs to inspect writes).
#[must_use]
pub fn test_environment() -> TodoEnvironment {
    TodoEnvironment::new(
        Arc::new(test_clock()),
        Arc::new(SequentialIdGenerator::new()),
        Arc::new(InMemoryBlobStore::new()),
    )
}
