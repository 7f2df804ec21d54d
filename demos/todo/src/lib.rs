//! Todo-sync example: fetch a todo list over HTTP and publish it to a
//! store.
//!
//! This example shows the smallest useful interactor:
//!
//! - a request descriptor ([`ListTodos`]) that decodes a JSON array
//! - an in-memory store ([`InMemoryTodoStore`]) that applies actions
//! - an interactor ([`RefreshTodos`]) wiring the two together
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use httperactor_client::ReqwestClient;
//! use httperactor_core::HttpInteractor;
//! use todo_sync::{InMemoryTodoStore, RefreshTodos};
//!
//! # async fn example() {
//! let client = Arc::new(ReqwestClient::new("https://jsonplaceholder.typicode.com"));
//! let store = Arc::new(InMemoryTodoStore::new());
//!
//! let refresh = RefreshTodos::new(client, Arc::clone(&store));
//! refresh.execute().await;
//!
//! println!("{} todos loaded", store.state().todos.len());
//! # }
//! ```

pub mod store;
pub mod sync;
pub mod types;

pub use store::InMemoryTodoStore;
pub use sync::{ListTodos, RefreshTodos};
pub use types::{TodoAction, TodoItem, TodoState};
