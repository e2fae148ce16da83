//! # Taskdeck Core
//!
//! Core traits and domain logic for the Taskdeck todo store.
//!
//! This crate provides the state-management layer of a client-side task
//! tracker: the reducer that owns the todo collection, the pure
//! derived-query functions that project it for display, and the boundary
//! traits for the injected dependencies (clock, id generation, blob
//! persistence).
//!
//! ## Core Concepts
//!
//! - **State**: [`types::TodoState`] — the todo sequence plus the current
//!   filter mode and search text
//! - **Action**: [`action::TodoAction`] — every mutation intent as a
//!   tagged variant
//! - **Reducer**: pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: side-effect descriptions (not execution) — here, the
//!   persistence write that follows each collection mutation
//! - **Environment**: injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use taskdeck_core::environment::{SystemClock, UuidGenerator};
//! use taskdeck_core::reducer::{Reducer, TodoReducer};
//! use taskdeck_core::storage::NullBlobStore;
//! use taskdeck_core::{TodoAction, TodoEnvironment, TodoInput, TodoState};
//!
//! let env = TodoEnvironment::new(
//!     Arc::new(SystemClock),
//!     Arc::new(UuidGenerator),
//!     Arc::new(NullBlobStore),
//! );
//!
//! let mut state = TodoState::new();
//! let _effects = TodoReducer::new().reduce(
//!     &mut state,
//!     TodoAction::Add {
//!         input: TodoInput::new("Buy milk"),
//!     },
//!     &env,
//! );
//! assert_eq!(state.count(), 1);
//! ```

pub mod action;
pub mod effect;
pub mod environment;
pub mod query;
pub mod reducer;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use smallvec::SmallVec;

pub use action::TodoAction;
pub use environment::TodoEnvironment;
pub use query::Stats;
pub use types::{Filter, Priority, Todo, TodoId, TodoInput, TodoPatch, TodoState};
