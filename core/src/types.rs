//! Domain types for the todo collection.
//!
//! The wire representation of [`Todo`] is fixed by the persistence
//! contract: camelCase field names, ISO-8601 dates, booleans as booleans.
//! Keep the serde attributes in sync with that contract when changing
//! anything here.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a todo record
///
/// Ids are immutable after creation and unique within a collection.
/// They serialize as plain UUID strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a new random `TodoId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Priority level of a todo
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority, sorted last
    Low,
    /// The default priority
    #[default]
    Medium,
    /// High priority, sorted first
    High,
}

impl Priority {
    /// Numeric rank used for descending priority sorts
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Error returned when parsing an unrecognized priority level
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized priority level: {0}")]
pub struct ParsePriorityError(String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ParsePriorityError(other.to_string())),
        }
    }
}

/// Filter mode controlling which subset of todos is visible
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Show every todo
    #[default]
    All,
    /// Show only todos that are not completed
    Pending,
    /// Show only completed todos
    Completed,
}

/// Error returned when parsing an unrecognized filter mode
///
/// The typed [`crate::action::TodoAction::SetFilter`] cannot carry an
/// invalid mode; unrecognized input is rejected here at the string
/// boundary instead. A caller that discards this error leaves the
/// current filter unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized filter mode: {0}")]
pub struct ParseFilterError(String);

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}

/// A single todo record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier, immutable after creation
    pub id: TodoId,
    /// User-entered task name
    pub title: String,
    /// Optional free-form detail, may be empty
    #[serde(default)]
    pub description: String,
    /// Priority level
    #[serde(default)]
    pub priority: Priority,
    /// Optional due date (calendar day, no time component)
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Whether the todo has been completed
    #[serde(default)]
    pub completed: bool,
    /// Set once at creation, immutable
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation of this record
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Shallow-merges a patch into this record.
    ///
    /// `id` and `created_at` are never touched; the caller is responsible
    /// for refreshing `updated_at` afterwards (it needs a clock).
    pub fn apply(&mut self, patch: TodoPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// Input for creating a new todo
///
/// The store does not validate titles; rejecting blank input is the form
/// layer's obligation before it dispatches an add.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoInput {
    /// Task name
    pub title: String,
    /// Optional detail text
    pub description: String,
    /// Priority, defaulting to [`Priority::Medium`] when absent
    pub priority: Option<Priority>,
    /// Optional due date
    pub due_date: Option<NaiveDate>,
}

impl TodoInput {
    /// Creates an input with the given title and all defaults
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the due date
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Partial update for an existing todo
///
/// Every field is optional; `None` leaves the field untouched. The due
/// date is doubly optional so a patch can distinguish "leave it" from
/// "clear it" (`Some(None)`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoPatch {
    /// Replacement title
    pub title: Option<String>,
    /// Replacement description
    pub description: Option<String>,
    /// Replacement priority
    pub priority: Option<Priority>,
    /// Replacement due date; `Some(None)` clears it
    pub due_date: Option<Option<NaiveDate>>,
    /// Replacement completion flag
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Creates an empty patch (applies as a no-op merge)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets or clears the due date
    #[must_use]
    pub const fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the completion flag
    #[must_use]
    pub const fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

/// State of the todo store
///
/// The collection is an ordered sequence; insertion order is creation
/// order and ids are unique. The filter mode and search text live here
/// too so the derived view is a pure function of this one value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TodoState {
    /// All todos, in creation order
    pub todos: Vec<Todo>,
    /// Current filter mode
    pub filter: Filter,
    /// Current search text, stored verbatim
    pub search_query: String,
    /// Message from the most recent failed persistence write, if any
    ///
    /// Persistence is best-effort: a failed write never rolls back the
    /// in-memory collection, it only surfaces here. Cleared by the next
    /// successful mutation.
    pub last_persist_error: Option<String>,
}

impl TodoState {
    /// Creates a new empty state with default filter and empty search
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Returns a todo by id
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| &t.id == id)
    }

    /// Checks whether a todo with the given id exists
    #[must_use]
    pub fn exists(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_todo(title: &str) -> Todo {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).single().unwrap();
        Todo {
            id: TodoId::new(),
            title: title.to_string(),
            description: String::new(),
            priority: Priority::default(),
            due_date: None,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn todo_id_display_is_uuid() {
        let id = TodoId::new();
        assert_eq!(format!("{id}"), id.as_uuid().to_string());
    }

    #[test]
    fn priority_rank_ordering() {
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
    }

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn priority_parses_known_levels() {
        assert_eq!("low".parse(), Ok(Priority::Low));
        assert_eq!("medium".parse(), Ok(Priority::Medium));
        assert_eq!("high".parse(), Ok(Priority::High));
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn filter_parses_known_modes() {
        assert_eq!("all".parse(), Ok(Filter::All));
        assert_eq!("pending".parse(), Ok(Filter::Pending));
        assert_eq!("completed".parse(), Ok(Filter::Completed));
    }

    #[test]
    fn filter_rejects_unknown_modes() {
        assert!("archived".parse::<Filter>().is_err());
        assert!("ALL".parse::<Filter>().is_err());
    }

    #[test]
    fn patch_merge_leaves_unset_fields() {
        let mut todo = sample_todo("Buy milk");
        todo.description = "2 liters".to_string();

        todo.apply(TodoPatch::new().title("Buy oat milk"));

        assert_eq!(todo.title, "Buy oat milk");
        assert_eq!(todo.description, "2 liters");
        assert_eq!(todo.priority, Priority::Medium);
        assert!(!todo.completed);

        todo.apply(
            TodoPatch::new()
                .description("3 liters")
                .completed(true),
        );
        assert_eq!(todo.title, "Buy oat milk");
        assert_eq!(todo.description, "3 liters");
        assert!(todo.completed);
    }

    #[test]
    fn patch_can_clear_due_date() {
        let mut todo = sample_todo("Pay rent");
        todo.due_date = NaiveDate::from_ymd_opt(2025, 7, 1);

        todo.apply(TodoPatch::new().due_date(None));
        assert_eq!(todo.due_date, None);
    }

    #[test]
    fn empty_patch_is_identity() {
        let mut todo = sample_todo("Buy milk");
        let before = todo.clone();
        todo.apply(TodoPatch::new());
        assert_eq!(todo, before);
    }

    #[test]
    fn todo_wire_format_is_camel_case() {
        let todo = sample_todo("Buy milk");
        let json = serde_json::to_value(&todo).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("dueDate").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn todo_round_trips_through_json() {
        let mut todo = sample_todo("Pay rent");
        todo.priority = Priority::High;
        todo.due_date = NaiveDate::from_ymd_opt(2025, 7, 1);

        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn state_accessors() {
        let mut state = TodoState::new();
        assert_eq!(state.count(), 0);
        assert_eq!(state.completed_count(), 0);

        let todo = sample_todo("Buy milk");
        let id = todo.id.clone();
        state.todos.push(todo);

        assert_eq!(state.count(), 1);
        assert!(state.exists(&id));
        assert!(!state.exists(&TodoId::new()));
    }
}
