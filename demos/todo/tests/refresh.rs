//! End-to-end test of the refresh interactor against a scripted client.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use std::sync::Arc;

use httperactor_core::{HttpInteractor, Method};
use httperactor_testing::mocks::MockHttpClient;
use todo_sync::{InMemoryTodoStore, RefreshTodos, TodoItem};

#[tokio::test]
async fn refresh_loads_the_fetched_todos_into_the_store() {
    let client = Arc::new(MockHttpClient::new());
    client.push_response(
        200,
        r#"[{"id":1,"title":"buy milk","completed":false},
            {"id":2,"title":"walk dog","completed":true}]"#,
    );
    let store = Arc::new(InMemoryTodoStore::new());

    RefreshTodos::new(Arc::clone(&client), Arc::clone(&store)).execute().await;

    let state = store.state();
    assert_eq!(state.count(), 2);
    assert_eq!(state.completed_count(), 1);
    assert_eq!(
        state.todos[0],
        TodoItem { id: 1, title: "buy milk".to_string(), completed: false },
    );

    let sent = client.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].path, "/todos");
}

#[tokio::test]
async fn refresh_leaves_the_store_untouched_on_failure() {
    let client = Arc::new(MockHttpClient::new());
    client.push_response(500, "upstream down");
    let store = Arc::new(InMemoryTodoStore::new());

    RefreshTodos::new(Arc::clone(&client), Arc::clone(&store)).execute().await;

    assert!(store.state().todos.is_empty());
    assert_eq!(client.errors().len(), 1);
}
