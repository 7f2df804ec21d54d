//! Fetch the todo list from a JSON API and print what the store holds.
//!
//! ```sh
//! cargo run -p todo-sync [BASE_URL]
//! ```

use std::sync::Arc;

use httperactor_client::ReqwestClient;
use httperactor_core::{HttpInteractor, TracingErrorHandler};
use todo_sync::{InMemoryTodoStore, RefreshTodos};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://jsonplaceholder.typicode.com".to_string());

    let client = Arc::new(
        ReqwestClient::new(base_url).with_error_handler(Arc::new(TracingErrorHandler)),
    );
    let store = Arc::new(InMemoryTodoStore::new());

    RefreshTodos::new(client, Arc::clone(&store)).execute().await;

    let state = store.state();
    println!("{} todos ({} completed)", state.count(), state.completed_count());
    for todo in &state.todos {
        let mark = if todo.completed { "x" } else { " " };
        println!("[{mark}] {} {}", todo.id, todo.title);
    }
}
