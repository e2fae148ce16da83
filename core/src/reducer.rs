//! Reducer logic for the todo store.
//!
//! Every state transition is a pure function of `(state, action,
//! environment)`; the only reads of the outside world are the injected
//! clock (for timestamps) and id generator (for new records). Collection
//! mutations return a single save effect that mirrors the new sequence
//! to the blob store; view-state changes return no effects.

use crate::action::TodoAction;
use crate::effect::Effect;
use crate::environment::TodoEnvironment;
use crate::storage::{self, BlobStore};
use crate::types::{Todo, TodoState};
use smallvec::{SmallVec, smallvec};
use std::sync::Arc;

/// The Reducer trait - core abstraction for business logic
///
/// # Type Parameters
///
/// - `State`: The domain state this reducer operates on
/// - `Action`: The action type this reducer processes
/// - `Environment`: The injected dependencies this reducer needs
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// The environment type with injected dependencies
    type Environment;

    /// Reduce an action into state changes and effects
    ///
    /// This is a pure function that:
    /// 1. Updates state in place
    /// 2. Returns effect descriptions to be executed by the runtime
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]>;
}

/// Reducer for the todo store
///
/// Mutations targeting an absent id are silent no-ops: callers are
/// expected to operate on ids from current state, but state may be stale
/// between read and write in a decoupled view layer. No-ops produce no
/// save effect.
///
/// The reducer performs no title validation; rejecting blank titles
/// before dispatching an [`TodoAction::Add`] is the form layer's
/// obligation.
#[derive(Clone, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Builds the save effect mirroring the current sequence to storage
    ///
    /// The snapshot is taken eagerly so later mutations cannot bleed into
    /// an in-flight write. A failed write feeds
    /// [`TodoAction::PersistFailed`] back into the reducer; the in-memory
    /// state it would have mirrored stays untouched.
    fn persist(blobs: &Arc<dyn BlobStore>, todos: Vec<Todo>) -> Effect<TodoAction> {
        let blobs = Arc::clone(blobs);
        Effect::future(async move {
            match storage::save_todos(blobs.as_ref(), &todos).await {
                Ok(()) => None,
                Err(error) => Some(TodoAction::PersistFailed {
                    error: error.to_string(),
                }),
            }
        })
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    #[allow(clippy::too_many_lines)] // one arm per operation reads better than dispatch helpers
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::Add { input } => {
                let now = env.clock.now();
                let todo = Todo {
                    id: env.ids.generate(),
                    title: input.title,
                    description: input.description,
                    priority: input.priority.unwrap_or_default(),
                    due_date: input.due_date,
                    completed: false,
                    created_at: now,
                    updated_at: now,
                };
                state.todos.push(todo);
                state.last_persist_error = None;

                smallvec![Self::persist(&env.blobs, state.todos.clone())]
            }

            TodoAction::Update { id, patch } => {
                let Some(todo) = state.todos.iter_mut().find(|t| t.id == id) else {
                    return SmallVec::new();
                };
                todo.apply(patch);
                todo.updated_at = env.clock.now();
                state.last_persist_error = None;

                smallvec![Self::persist(&env.blobs, state.todos.clone())]
            }

            TodoAction::Delete { id } => {
                let before = state.todos.len();
                state.todos.retain(|t| t.id != id);
                if state.todos.len() == before {
                    return SmallVec::new();
                }
                state.last_persist_error = None;

                smallvec![Self::persist(&env.blobs, state.todos.clone())]
            }

            TodoAction::Toggle { id } => {
                let Some(todo) = state.todos.iter_mut().find(|t| t.id == id) else {
                    return SmallVec::new();
                };
                todo.completed = !todo.completed;
                todo.updated_at = env.clock.now();
                state.last_persist_error = None;

                smallvec![Self::persist(&env.blobs, state.todos.clone())]
            }

            TodoAction::ClearCompleted => {
                let before = state.todos.len();
                state.todos.retain(|t| !t.completed);
                if state.todos.len() == before {
                    return SmallVec::new();
                }
                state.last_persist_error = None;

                smallvec![Self::persist(&env.blobs, state.todos.clone())]
            }

            TodoAction::SetFilter { filter } => {
                state.filter = filter;
                SmallVec::new()
            }

            TodoAction::SetSearchQuery { query } => {
                state.search_query = query;
                SmallVec::new()
            }

            TodoAction::Hydrate { todos } => {
                // Startup load; writing freshly loaded data back would be
                // a pointless extra write, so no effect here.
                state.todos = todos;
                SmallVec::new()
            }

            TodoAction::PersistFailed { error } => {
                tracing::warn!(%error, "persistence write failed, in-memory state kept");
                state.last_persist_error = Some(error);
                SmallVec::new()
            }
        }
    }
}
