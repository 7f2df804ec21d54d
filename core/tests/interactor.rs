//! Integration tests for the interactor template method.
//!
//! These drive `execute()` against the scripted mock client and recording
//! store, covering the absent/resulted split, hook ordering, and dispatch
//! order.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use httperactor_core::{AuthMiddleware, DecodeError, HttpInteractor, Method, Store};
use httperactor_testing::mocks::{FixtureRequest, MockHttpClient, RecordingStore, SentRequest};

#[derive(Debug, Clone, PartialEq)]
enum NoteAction {
    Loaded(String),
    Refreshed,
}

/// A store that appends dispatch markers to a shared event log, so tests
/// can assert ordering between side effects and dispatches.
struct LogStore {
    log: Arc<Mutex<Vec<String>>>,
}

impl Store for LogStore {
    type Action = NoteAction;

    fn dispatch(&self, action: NoteAction) {
        self.log.lock().unwrap().push(format!("dispatch {action:?}"));
    }
}

struct SyncNotes {
    client: MockHttpClient,
    store: LogStore,
    log: Arc<Mutex<Vec<String>>>,
}

impl SyncNotes {
    fn new(client: MockHttpClient) -> Self {
        let log = Arc::new(Mutex::new(Vec::new()));
        Self {
            client,
            store: LogStore { log: Arc::clone(&log) },
            log,
        }
    }

    fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl HttpInteractor for SyncNotes {
    type Response = String;
    type Request = FixtureRequest<String>;
    type Client = MockHttpClient;
    type Store = LogStore;

    fn http_client(&self) -> &MockHttpClient {
        &self.client
    }

    fn store(&self) -> &LogStore {
        &self.store
    }

    fn request(&self) -> FixtureRequest<String> {
        FixtureRequest::text("/notes")
    }

    async fn side_effects(&self, response: &String) {
        self.log.lock().unwrap().push(format!("side_effects {response}"));
    }

    fn actions(&self, response: &String) -> Vec<NoteAction> {
        vec![NoteAction::Loaded(response.clone()), NoteAction::Refreshed]
    }
}

#[tokio::test]
async fn execute_runs_side_effects_then_dispatches_in_order() {
    let client = MockHttpClient::new();
    client.push_response(200, "payload");
    let interactor = SyncNotes::new(client);

    interactor.execute().await;

    assert_eq!(
        interactor.log(),
        vec![
            "side_effects payload".to_string(),
            "dispatch Loaded(\"payload\")".to_string(),
            "dispatch Refreshed".to_string(),
        ]
    );
}

#[tokio::test]
async fn execute_stops_on_transport_failure() {
    let client = MockHttpClient::new();
    client.push_transport_error("connection reset");
    let interactor = SyncNotes::new(client);

    interactor.execute().await;

    assert!(interactor.log().is_empty());
    assert_eq!(interactor.client.errors(), vec!["request failed: connection reset".to_string()]);
}

#[tokio::test]
async fn execute_stops_on_non_success_status() {
    let client = MockHttpClient::new();
    client.push_response(503, "unavailable");
    let interactor = SyncNotes::new(client);

    interactor.execute().await;

    assert!(interactor.log().is_empty());
    assert_eq!(interactor.client.errors().len(), 1);
}

/// Interactor whose descriptor cannot decode its response.
struct BrokenDecode {
    client: MockHttpClient,
    store: RecordingStore<NoteAction>,
}

impl HttpInteractor for BrokenDecode {
    type Response = String;
    type Request = FixtureRequest<String>;
    type Client = MockHttpClient;
    type Store = RecordingStore<NoteAction>;

    fn http_client(&self) -> &MockHttpClient {
        &self.client
    }

    fn store(&self) -> &RecordingStore<NoteAction> {
        &self.store
    }

    fn request(&self) -> FixtureRequest<String> {
        FixtureRequest::new("/notes", |_| Err(DecodeError::new("bad payload")))
    }

    fn actions(&self, response: &String) -> Vec<NoteAction> {
        vec![NoteAction::Loaded(response.clone())]
    }
}

#[tokio::test]
async fn decode_failure_is_absent_and_reaches_the_sink_once() {
    let interactor = BrokenDecode {
        client: MockHttpClient::new(),
        store: RecordingStore::new(),
    };
    interactor.client.push_response(200, "garbage");

    interactor.execute().await;

    assert_eq!(interactor.store.dispatch_count(), 0);
    assert_eq!(
        interactor.client.errors(),
        vec!["failed to decode response: bad payload".to_string()]
    );
}

/// Interactor that overrides nothing but the required hooks.
struct BareFetch {
    client: MockHttpClient,
    store: RecordingStore<NoteAction>,
}

impl HttpInteractor for BareFetch {
    type Response = String;
    type Request = FixtureRequest<String>;
    type Client = MockHttpClient;
    type Store = RecordingStore<NoteAction>;

    fn http_client(&self) -> &MockHttpClient {
        &self.client
    }

    fn store(&self) -> &RecordingStore<NoteAction> {
        &self.store
    }

    fn request(&self) -> FixtureRequest<String> {
        FixtureRequest::text("/bare")
    }
}

#[tokio::test]
async fn default_hooks_dispatch_nothing_and_send_unauthenticated() {
    let interactor = BareFetch {
        client: MockHttpClient::new(),
        store: RecordingStore::new(),
    };
    interactor.client.push_response(200, "ok");

    interactor.execute().await;

    assert_eq!(interactor.store.dispatch_count(), 0);
    let sent = interactor.client.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].path, "/bare");
    assert!(sent[0].headers.is_empty());
    assert!(sent[0].body.is_none());
}

struct CountingBearer {
    calls: AtomicUsize,
}

impl AuthMiddleware<SentRequest> for CountingBearer {
    fn apply(&self, mut request: SentRequest) -> SentRequest {
        self.calls.fetch_add(1, Ordering::SeqCst);
        request
            .headers
            .push(("authorization".to_string(), "Bearer token".to_string()));
        request
    }
}

struct AuthedFetch {
    client: MockHttpClient,
    store: RecordingStore<NoteAction>,
    bearer: CountingBearer,
}

impl HttpInteractor for AuthedFetch {
    type Response = String;
    type Request = FixtureRequest<String>;
    type Client = MockHttpClient;
    type Store = RecordingStore<NoteAction>;

    fn http_client(&self) -> &MockHttpClient {
        &self.client
    }

    fn store(&self) -> &RecordingStore<NoteAction> {
        &self.store
    }

    fn request(&self) -> FixtureRequest<String> {
        FixtureRequest::text("/private")
    }

    fn auth(&self) -> Option<&dyn AuthMiddleware<SentRequest>> {
        Some(&self.bearer)
    }

    fn actions(&self, response: &String) -> Vec<NoteAction> {
        vec![NoteAction::Loaded(response.clone())]
    }
}

#[tokio::test]
async fn auth_middleware_runs_once_and_the_transformed_request_is_sent() {
    let interactor = AuthedFetch {
        client: MockHttpClient::new(),
        store: RecordingStore::new(),
        bearer: CountingBearer { calls: AtomicUsize::new(0) },
    };
    interactor.client.push_response(200, "secret");

    interactor.execute().await;

    assert_eq!(interactor.bearer.calls.load(Ordering::SeqCst), 1);
    let sent = interactor.client.sent();
    assert_eq!(
        sent[0].headers,
        vec![("authorization".to_string(), "Bearer token".to_string())]
    );
    assert_eq!(interactor.store.dispatched(), vec![NoteAction::Loaded("secret".to_string())]);
}

#[tokio::test]
async fn mapping_sees_response_text_and_its_result_is_returned() {
    use httperactor_core::HttpClient;

    let client = MockHttpClient::new();
    client.push_response(200, "bar");

    let request = FixtureRequest::new("/foo", |_| Ok("foo".to_string()));
    let response = client.send(request, None).await;

    assert_eq!(response.as_deref(), Some("foo"));
}
