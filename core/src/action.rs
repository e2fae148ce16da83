//! Mutation intents for the todo store.
//!
//! Every way the collection or view state can change is a variant here;
//! the reducer is the only code that interprets them.

use crate::types::{Filter, Todo, TodoId, TodoInput, TodoPatch};

/// All possible inputs to the todo reducer
///
/// Most variants correspond one-to-one with the store's public mutation
/// operations. [`Hydrate`](Self::Hydrate) carries the startup load from
/// the persistence adapter, and [`PersistFailed`](Self::PersistFailed) is
/// fed back by the save effect when a write fails.
#[derive(Clone, Debug)]
pub enum TodoAction {
    /// Create a new todo at the end of the sequence
    Add {
        /// Fields for the new record; id and timestamps are assigned by
        /// the reducer
        input: TodoInput,
    },

    /// Shallow-merge a patch into the matching record
    ///
    /// Silent no-op when no record has this id.
    Update {
        /// Target record
        id: TodoId,
        /// Fields to merge
        patch: TodoPatch,
    },

    /// Remove the matching record
    ///
    /// Silent no-op when no record has this id.
    Delete {
        /// Target record
        id: TodoId,
    },

    /// Flip the completion flag on the matching record
    ///
    /// Silent no-op when no record has this id.
    Toggle {
        /// Target record
        id: TodoId,
    },

    /// Remove every completed record
    ClearCompleted,

    /// Set the current filter mode
    SetFilter {
        /// New mode
        filter: Filter,
    },

    /// Set the current search text, verbatim
    SetSearchQuery {
        /// New search text
        query: String,
    },

    /// Replace the collection with the persisted one at startup
    Hydrate {
        /// Records loaded from the persistence adapter
        todos: Vec<Todo>,
    },

    /// Record that a persistence write failed
    ///
    /// The in-memory collection is the source of truth and is never
    /// rolled back; this only surfaces the failure.
    PersistFailed {
        /// Human-readable failure description
        error: String,
    },
}

impl TodoAction {
    /// Whether this action can change the todo sequence (and therefore
    /// may trigger a persistence write)
    #[must_use]
    pub const fn mutates_collection(&self) -> bool {
        matches!(
            self,
            Self::Add { .. }
                | Self::Update { .. }
                | Self::Delete { .. }
                | Self::Toggle { .. }
                | Self::ClearCompleted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_actions_do_not_mutate_collection() {
        assert!(!TodoAction::SetFilter { filter: Filter::All }.mutates_collection());
        assert!(
            !TodoAction::SetSearchQuery {
                query: String::new()
            }
            .mutates_collection()
        );
        assert!(!TodoAction::Hydrate { todos: vec![] }.mutates_collection());
        assert!(
            !TodoAction::PersistFailed {
                error: String::new()
            }
            .mutates_collection()
        );
    }

    #[test]
    fn collection_actions_mutate() {
        assert!(TodoAction::ClearCompleted.mutates_collection());
        assert!(TodoAction::Delete { id: TodoId::new() }.mutates_collection());
    }
}
