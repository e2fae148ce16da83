//! Simple CLI demo for the Taskdeck store.
//!
//! Plays the role of the view layer: hydrates a store from a local JSON
//! blob, issues a few mutations, and prints the derived view after each
//! step. Run it twice to watch the collection survive the restart.

use anyhow::Result;
use std::sync::Arc;
use taskdeck_core::environment::{SystemClock, UuidGenerator};
use taskdeck_core::query::{compute_stats, visible_todos};
use taskdeck_core::reducer::TodoReducer;
use taskdeck_core::storage::load_todos;
use taskdeck_core::types::{Filter, Priority, TodoInput};
use taskdeck_core::{TodoAction, TodoEnvironment, TodoState};
use taskdeck_runtime::Store;
use taskdeck_storage::JsonFileStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskdeck=info".into()),
        )
        .init();

    println!("=== Taskdeck Demo ===\n");

    let blobs = Arc::new(JsonFileStore::new("./taskdeck-data"));
    let env = TodoEnvironment::new(
        Arc::new(SystemClock),
        Arc::new(UuidGenerator),
        Arc::clone(&blobs) as Arc<dyn taskdeck_core::storage::BlobStore>,
    );
    let store = Store::new(TodoState::new(), TodoReducer::new(), env);

    // Hydrate from the previous run, if any
    let loaded = load_todos(blobs.as_ref()).await;
    println!("Loaded {} todos from disk", loaded.len());
    store.send(TodoAction::Hydrate { todos: loaded }).await?;

    // Create some todos
    println!("\nCreating todos...");
    store
        .send(TodoAction::Add {
            input: TodoInput::new("Buy milk"),
        })
        .await?;
    store
        .send(TodoAction::Add {
            input: TodoInput::new("Pay rent")
                .with_priority(Priority::High)
                .with_due_date(chrono::Utc::now().date_naive()),
        })
        .await?;

    print_view(&store, "All todos").await;

    // Complete the first visible todo
    if let Some(id) = store.state(|s| s.todos.first().map(|t| t.id.clone())).await {
        println!("\nToggling the oldest todo...");
        store.send(TodoAction::Toggle { id }).await?;
    }

    store
        .send(TodoAction::SetFilter {
            filter: Filter::Pending,
        })
        .await?;
    print_view(&store, "Pending todos").await;

    let stats = store.state(|s| compute_stats(&s.todos)).await;
    println!(
        "\nCompleted {}/{} ({}%)",
        stats.completed, stats.total, stats.percentage
    );

    // Let the last persistence write finish before exiting
    store.shutdown(std::time::Duration::from_secs(5)).await?;

    println!("\n=== Demo Complete ===");
    Ok(())
}

type TodoStore = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

async fn print_view(store: &TodoStore, heading: &str) {
    println!("\n{heading}:");
    for todo in store.state(visible_todos).await {
        let status = if todo.completed { "x" } else { " " };
        println!("  [{status}] ({}) {}", todo.priority, todo.title);
    }
}
