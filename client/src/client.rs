//! The reqwest-backed request-execution pipeline.

use std::sync::Arc;

use httperactor_core::{
    AuthMiddleware, ErrorHandler, HttpClient, Method, Request, SendError, StderrErrorHandler,
};
use reqwest::Client;

const fn as_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// An HTTP client wrapping a [`reqwest::Client`].
///
/// Descriptor paths are resolved against the configured base URL; the
/// transport-native request type handed to auth middleware is
/// [`reqwest::Request`]. One error handler is held per client instance
/// ([`StderrErrorHandler`] unless overridden) and notified exactly once
/// per failed send.
///
/// Transport-level policy — timeouts, TLS, redirects, pooling — belongs to
/// the wrapped [`reqwest::Client`]; configure it there and pass it in via
/// [`with_client`](ReqwestClient::with_client).
#[derive(Clone)]
pub struct ReqwestClient {
    client: Client,
    base_url: String,
    error_handler: Arc<dyn ErrorHandler>,
}

impl ReqwestClient {
    /// Create a client with a fresh [`reqwest::Client`] and the default
    /// stderr error handler.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client around an existing, possibly pre-configured
    /// [`reqwest::Client`].
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            error_handler: Arc::new(StderrErrorHandler),
        }
    }

    /// Replace the error handler.
    #[must_use]
    pub fn with_error_handler(mut self, error_handler: Arc<dyn ErrorHandler>) -> Self {
        self.error_handler = error_handler;
        self
    }

    /// The fallible pipeline behind `send`: build, authenticate, execute,
    /// validate status, map. The public `send` is the only caller and the
    /// only catch boundary.
    async fn try_send<R>(
        &self,
        request: &R,
        auth: Option<&dyn AuthMiddleware<reqwest::Request>>,
    ) -> Result<R::Response, SendError>
    where
        R: Request + Send + Sync,
    {
        let url = format!("{}{}", self.base_url, request.path());
        let mut builder = self.client.request(as_reqwest(request.method()), url);
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body() {
            builder = builder.json(&body);
        }
        let built = builder
            .build()
            .map_err(|e| SendError::BuildFailed(e.to_string()))?;

        let built = match auth {
            Some(auth) => auth.apply(built),
            None => built,
        };

        let response = self
            .client
            .execute(built)
            .await
            .map_err(|e| SendError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SendError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(SendError::UnexpectedStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        request.map_response(&text).map_err(SendError::from)
    }
}

impl HttpClient for ReqwestClient {
    type TransportRequest = reqwest::Request;

    async fn send<R>(
        &self,
        request: R,
        auth: Option<&dyn AuthMiddleware<reqwest::Request>>,
    ) -> Option<R::Response>
    where
        R: Request + Send + Sync,
    {
        match self.try_send(&request, auth).await {
            Ok(response) => Some(response),
            Err(error) => {
                self.error_handler.handle(&error);
                None
            },
        }
    }
}
