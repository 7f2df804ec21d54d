//! Mock implementations of the core contracts.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use httperactor_core::{
    AuthMiddleware, DecodeError, ErrorHandler, HttpClient, Method, Request, SendError, Store,
};

/// Lock a mutex, recovering the guard if a previous holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// A plain record of a built transport request.
///
/// This is [`MockHttpClient`]'s transport-native request type, so auth
/// middleware written against it can be exercised without a real
/// transport: `apply` receives the built record and may rewrite any of
/// its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SentRequest {
    /// The descriptor's method
    pub method: Method,
    /// The descriptor's path
    pub path: String,
    /// The descriptor's headers, in order
    pub headers: Vec<(String, String)>,
    /// The descriptor's body, if any
    pub body: Option<serde_json::Value>,
}

/// One scripted transport outcome for [`MockHttpClient`].
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// The transport completed with this status and body text
    Response {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },
    /// The transport itself failed
    TransportError(String),
}

/// A scripted [`HttpClient`] for testing interactors and descriptors.
///
/// Outcomes are queued with [`push_response`](MockHttpClient::push_response)
/// and [`push_transport_error`](MockHttpClient::push_transport_error) and
/// consumed one per `send`, in order. The client runs the same
/// status-then-decode pipeline as the real one, records every (possibly
/// auth-transformed) request it "sent", and captures every failure instead
/// of writing it anywhere.
///
/// An unscripted `send` behaves as a transport failure.
#[derive(Debug, Default)]
pub struct MockHttpClient {
    script: Mutex<VecDeque<MockOutcome>>,
    sent: Mutex<Vec<SentRequest>>,
    errors: Mutex<Vec<SendError>>,
}

impl MockHttpClient {
    /// Create a client with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a transport response.
    pub fn push_response(&self, status: u16, body: impl Into<String>) {
        lock(&self.script).push_back(MockOutcome::Response {
            status,
            body: body.into(),
        });
    }

    /// Queue a transport failure.
    pub fn push_transport_error(&self, message: impl Into<String>) {
        lock(&self.script).push_back(MockOutcome::TransportError(message.into()));
    }

    /// The requests sent so far, in order, after auth transformation.
    #[must_use]
    pub fn sent(&self) -> Vec<SentRequest> {
        lock(&self.sent).clone()
    }

    /// The failures captured so far, rendered for assertions.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        lock(&self.errors).iter().map(ToString::to_string).collect()
    }

    fn next_outcome(&self) -> MockOutcome {
        lock(&self.script)
            .pop_front()
            .unwrap_or_else(|| MockOutcome::TransportError("no scripted response".to_string()))
    }
}

impl HttpClient for MockHttpClient {
    type TransportRequest = SentRequest;

    async fn send<R>(
        &self,
        request: R,
        auth: Option<&dyn AuthMiddleware<SentRequest>>,
    ) -> Option<R::Response>
    where
        R: Request + Send + Sync,
    {
        let built = SentRequest {
            method: request.method(),
            path: request.path(),
            headers: request.headers(),
            body: request.body(),
        };
        let built = match auth {
            Some(auth) => auth.apply(built),
            None => built,
        };
        lock(&self.sent).push(built);

        let result = match self.next_outcome() {
            MockOutcome::Response { status, body } if (200..300).contains(&status) => {
                request.map_response(&body).map_err(SendError::from)
            },
            MockOutcome::Response { status, body } => {
                Err(SendError::UnexpectedStatus { status, body })
            },
            MockOutcome::TransportError(message) => Err(SendError::RequestFailed(message)),
        };

        match result {
            Ok(response) => Some(response),
            Err(error) => {
                lock(&self.errors).push(error);
                None
            },
        }
    }
}

/// A [`Store`] that records every dispatched action.
#[derive(Debug, Default)]
pub struct RecordingStore<A> {
    dispatched: Mutex<Vec<A>>,
}

impl<A> RecordingStore<A> {
    /// Create an empty recording store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dispatched: Mutex::new(Vec::new()),
        }
    }

    /// The actions dispatched so far, in order.
    #[must_use]
    pub fn dispatched(&self) -> Vec<A>
    where
        A: Clone,
    {
        lock(&self.dispatched).clone()
    }

    /// The number of actions dispatched so far.
    #[must_use]
    pub fn dispatch_count(&self) -> usize {
        lock(&self.dispatched).len()
    }
}

impl<A: Send> Store for RecordingStore<A> {
    type Action = A;

    fn dispatch(&self, action: A) {
        lock(&self.dispatched).push(action);
    }
}

/// An [`ErrorHandler`] that collects rendered failures.
#[derive(Debug, Default)]
pub struct CapturingErrorHandler {
    handled: Mutex<Vec<String>>,
}

impl CapturingErrorHandler {
    /// Create an empty capturing handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The failures handled so far, in order.
    #[must_use]
    pub fn handled(&self) -> Vec<String> {
        lock(&self.handled).clone()
    }
}

impl ErrorHandler for CapturingErrorHandler {
    fn handle(&self, error: &SendError) {
        lock(&self.handled).push(error.to_string());
    }
}

/// Response-mapping closure used by [`FixtureRequest`].
type MapFn<T> = Box<dyn Fn(&str) -> Result<T, DecodeError> + Send + Sync>;

/// A buildable request descriptor for tests.
///
/// Starts as a GET with no headers and no body; the builder methods
/// override each attribute.
///
/// # Example
///
/// ```
/// use httperactor_core::Method;
/// use httperactor_testing::mocks::FixtureRequest;
///
/// let request = FixtureRequest::new("/foo", |_| Ok(()))
///     .with_method(Method::Post)
///     .with_header("foo", "bar")
///     .with_body(serde_json::json!({ "foo": "bar" }));
/// ```
pub struct FixtureRequest<T> {
    path: String,
    method: Method,
    headers: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    map: MapFn<T>,
}

impl<T> FixtureRequest<T> {
    /// Create a GET descriptor with an explicit mapping function.
    pub fn new<F>(path: impl Into<String>, map: F) -> Self
    where
        F: Fn(&str) -> Result<T, DecodeError> + Send + Sync + 'static,
    {
        Self {
            path: path.into(),
            method: Method::Get,
            headers: Vec::new(),
            body: None,
            map: Box::new(map),
        }
    }

    /// Override the method.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Append a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the body.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

impl FixtureRequest<String> {
    /// A descriptor whose mapping is the identity over the response text.
    #[must_use]
    pub fn text(path: impl Into<String>) -> Self {
        Self::new(path, |text| Ok(text.to_string()))
    }
}

impl<T> Request for FixtureRequest<T> {
    type Response = T;

    fn path(&self) -> String {
        self.path.clone()
    }

    fn method(&self) -> Method {
        self.method
    }

    fn headers(&self) -> Vec<(String, String)> {
        self.headers.clone()
    }

    fn body(&self) -> Option<serde_json::Value> {
        self.body.clone()
    }

    fn map_response(&self, text: &str) -> Result<T, DecodeError> {
        (self.map)(text)
    }
}

impl<T> std::fmt::Debug for FixtureRequest<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixtureRequest")
            .field("path", &self.path)
            .field("method", &self.method)
            .field("headers", &self.headers)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}
