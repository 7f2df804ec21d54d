//! The list-todos request and the interactor that runs it.

use std::sync::Arc;

use httperactor_core::{DecodeError, HttpClient, HttpInteractor, Request};

use crate::store::InMemoryTodoStore;
use crate::types::{TodoAction, TodoItem};

/// GET `/todos`, decoded as a JSON array of [`TodoItem`]s.
#[derive(Debug, Clone, Copy)]
pub struct ListTodos;

impl Request for ListTodos {
    type Response = Vec<TodoItem>;

    fn path(&self) -> String {
        "/todos".to_string()
    }

    fn map_response(&self, text: &str) -> Result<Vec<TodoItem>, DecodeError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Interactor that fetches the todo list and publishes it to the store.
///
/// Generic over the client so tests can drive it with a scripted mock.
pub struct RefreshTodos<C> {
    client: Arc<C>,
    store: Arc<InMemoryTodoStore>,
}

impl<C> RefreshTodos<C> {
    /// Create an interactor sharing the given client and store.
    #[must_use]
    pub fn new(client: Arc<C>, store: Arc<InMemoryTodoStore>) -> Self {
        Self { client, store }
    }
}

impl<C: HttpClient> HttpInteractor for RefreshTodos<C> {
    type Response = Vec<TodoItem>;
    type Request = ListTodos;
    type Client = C;
    type Store = InMemoryTodoStore;

    fn http_client(&self) -> &C {
        &self.client
    }

    fn store(&self) -> &InMemoryTodoStore {
        &self.store
    }

    fn request(&self) -> ListTodos {
        ListTodos
    }

    async fn side_effects(&self, response: &Vec<TodoItem>) {
        tracing::info!(count = response.len(), "fetched todos");
    }

    fn actions(&self, response: &Vec<TodoItem>) -> Vec<TodoAction> {
        vec![TodoAction::Loaded(response.clone())]
    }
}
