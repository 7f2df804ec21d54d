//! Authentication as a request-preserving transformation.

/// A middleware that injects credentials into a transport-native request.
///
/// The type parameter `R` is the transport's own request representation
/// (for the reqwest-backed client, `reqwest::Request`). The middleware
/// takes the built request by value and returns a request of the same
/// representation — mutated in place or rebuilt, its choice. It must not
/// retain the request beyond the call.
///
/// Implementations are stateless from the pipeline's point of view; the
/// same middleware may authenticate any number of requests.
pub trait AuthMiddleware<R>: Send + Sync {
    /// Add authentication to a built request.
    fn apply(&self, request: R) -> R;
}
