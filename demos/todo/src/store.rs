//! A minimal in-memory store for the example.

use std::sync::{Mutex, MutexGuard};

use httperactor_core::Store;

use crate::types::{TodoAction, TodoState};

/// A store holding [`TodoState`] behind a mutex.
///
/// Dispatch applies each action synchronously, so actions dispatched in
/// sequence by one interactor execution are applied in that order.
#[derive(Debug, Default)]
pub struct InMemoryTodoStore {
    state: Mutex<TodoState>,
}

impl InMemoryTodoStore {
    /// Create a store with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> TodoState {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, TodoState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Store for InMemoryTodoStore {
    type Action = TodoAction;

    fn dispatch(&self, action: TodoAction) {
        let mut state = self.lock();
        match action {
            TodoAction::Loaded(todos) => state.todos = todos,
        }
    }
}
