//! Domain types for the todo-sync example.

use serde::{Deserialize, Serialize};

/// One todo entry as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Server-assigned identifier
    pub id: u64,
    /// Human-readable title
    pub title: String,
    /// Whether the todo is done
    pub completed: bool,
}

/// Application state owned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    /// The last todo list fetched from the server
    pub todos: Vec<TodoItem>,
}

impl TodoState {
    /// Number of todos currently held.
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Number of completed todos currently held.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }
}

/// Actions the store accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Replace the held todo list with a freshly fetched one
    Loaded(Vec<TodoItem>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_count_only_counts_done_todos() {
        let state = TodoState {
            todos: vec![
                TodoItem { id: 1, title: "buy milk".to_string(), completed: true },
                TodoItem { id: 2, title: "walk dog".to_string(), completed: false },
            ],
        };
        assert_eq!(state.count(), 2);
        assert_eq!(state.completed_count(), 1);
    }
}
