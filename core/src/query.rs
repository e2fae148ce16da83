//! Derived-query engine: pure projections of the todo collection.
//!
//! Nothing here mutates its input or holds state; every function takes a
//! snapshot and returns a new sequence. The display pipeline is
//! [`visible_todos`]: search, then status filter, then priority sort.
//! Search and status filtering are independent subset predicates, so
//! their relative order does not change the result set; the pipeline
//! fixes one order anyway so every read is deterministic.

use crate::types::{Filter, Todo, TodoState};
use chrono::NaiveDate;

/// Aggregate completion counters for a todo collection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of todos
    pub total: usize,
    /// Number of completed todos
    pub completed: usize,
    /// Number of not-yet-completed todos (`total - completed`)
    pub pending: usize,
    /// Completed share in percent, rounded; 0 for an empty collection
    pub percentage: u8,
}

/// Returns the subset matching the filter mode, preserving order
#[must_use]
pub fn filter_by_status(todos: &[Todo], filter: Filter) -> Vec<Todo> {
    match filter {
        Filter::Completed => todos.iter().filter(|t| t.completed).cloned().collect(),
        Filter::Pending => todos.iter().filter(|t| !t.completed).cloned().collect(),
        Filter::All => todos.to_vec(),
    }
}

/// Returns the subset whose title or description contains the query
///
/// Matching is case-insensitive substring; the empty query matches
/// everything.
#[must_use]
pub fn search_match(todos: &[Todo], query: &str) -> Vec<Todo> {
    if query.is_empty() {
        return todos.to_vec();
    }
    let needle = query.to_lowercase();
    todos
        .iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Returns the collection sorted by descending priority
///
/// The sort is stable: equal-priority todos keep their relative input
/// order.
#[must_use]
pub fn sort_by_priority(todos: &[Todo]) -> Vec<Todo> {
    let mut sorted = todos.to_vec();
    sorted.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
    sorted
}

/// Computes completion stats for a collection
#[must_use]
pub fn compute_stats(todos: &[Todo]) -> Stats {
    let total = todos.len();
    let completed = todos.iter().filter(|t| t.completed).count();

    // Integer round-half-up; avoids float casts and division by zero
    // Note: Truncation impossible, the quotient is at most 100
    #[allow(clippy::cast_possible_truncation)]
    let percentage = if total == 0 {
        0
    } else {
        ((100 * completed + total / 2) / total) as u8
    };

    Stats {
        total,
        completed,
        pending: total - completed,
        percentage,
    }
}

/// The combined read path for display
///
/// Applies search, then the status filter, then the priority sort, all
/// from the state's own filter mode and search text.
#[must_use]
pub fn visible_todos(state: &TodoState) -> Vec<Todo> {
    let searched = search_match(&state.todos, &state.search_query);
    let filtered = filter_by_status(&searched, state.filter);
    sort_by_priority(&filtered)
}

/// Whether a due date has passed
///
/// Uses UTC-normalized calendar-day comparison: a due date strictly
/// before `today` is overdue, a due date equal to `today` is not.
/// Production callers pass `Utc::now().date_naive()`.
#[must_use]
pub fn is_overdue(due_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    due_date.is_some_and(|due| due < today)
}
