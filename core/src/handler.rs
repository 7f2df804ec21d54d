//! Error handlers — sinks that absorb send failures.

use crate::error::SendError;

/// A sink that consumes one send failure and performs a side effect.
///
/// The [`HttpClient`](crate::HttpClient) invokes the handler exactly once
/// per failed send and never more than once per call. Handlers must not
/// panic; they are called from the failure path and anything they raise
/// would escape the catch boundary.
pub trait ErrorHandler: Send + Sync {
    /// Handle one failure.
    fn handle(&self, error: &SendError);
}

/// The default handler: writes the failure to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrErrorHandler;

impl ErrorHandler for StderrErrorHandler {
    fn handle(&self, error: &SendError) {
        eprintln!("{error}");
    }
}

/// A handler that reports failures through `tracing` at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorHandler;

impl ErrorHandler for TracingErrorHandler {
    fn handle(&self, error: &SendError) {
        tracing::error!(%error, "http request failed");
    }
}
