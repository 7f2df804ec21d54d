//! The HTTP client boundary.

use crate::auth::AuthMiddleware;
use crate::request::Request;

/// A service that executes request descriptors.
///
/// `send` is the single catch boundary of the pipeline: whatever fails
/// underneath it — building the transport request, the exchange itself, a
/// non-2xx status, or response mapping — is routed to the client's error
/// handler and surfaces to the caller as `None`. Exactly one of
/// `Some(mapped)` / `None` is returned, and the handler is invoked iff the
/// result is `None`, at most once per call.
///
/// `send` is a suspension point: it suspends the calling task while the
/// transport call is outstanding. Clients hold no per-call mutable state,
/// so one instance may be shared across concurrent tasks (and across
/// interactors) as long as the transport tolerates concurrent use.
pub trait HttpClient: Send + Sync {
    /// The transport's native request representation, handed to
    /// [`AuthMiddleware::apply`] between build and send.
    type TransportRequest;

    /// Send a descriptor, optionally authenticating the built request.
    ///
    /// Returns the mapped response on success, `None` on any failure.
    async fn send<R>(
        &self,
        request: R,
        auth: Option<&dyn AuthMiddleware<Self::TransportRequest>>,
    ) -> Option<R::Response>
    where
        R: Request + Send + Sync;
}
