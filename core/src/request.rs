//! The request descriptor contract.

use crate::error::DecodeError;
use crate::method::Method;

/// A description of one outbound HTTP call.
///
/// A descriptor is a passive, immutable value: it says where to send a
/// request, what to send, and how to interpret the raw text that comes
/// back. It performs no I/O itself — an
/// [`HttpClient`](crate::HttpClient) consumes it once and discards it.
///
/// Only [`path`](Request::path) and [`map_response`](Request::map_response)
/// are required; method, headers, and body have the conventional defaults
/// (GET, no headers, no body).
///
/// # Example
///
/// ```
/// use httperactor_core::{DecodeError, Method, Request};
///
/// struct RenameNote {
///     id: u64,
///     title: String,
/// }
///
/// impl Request for RenameNote {
///     type Response = ();
///
///     fn path(&self) -> String {
///         format!("/notes/{}", self.id)
///     }
///
///     fn method(&self) -> Method {
///         Method::Patch
///     }
///
///     fn body(&self) -> Option<serde_json::Value> {
///         Some(serde_json::json!({ "title": self.title }))
///     }
///
///     fn map_response(&self, _text: &str) -> Result<(), DecodeError> {
///         Ok(())
///     }
/// }
/// ```
pub trait Request {
    /// The typed value the raw response text maps to.
    type Response;

    /// The path part of the URL. Opaque to the pipeline; the transport
    /// client resolves it against its configured base URL.
    fn path(&self) -> String;

    /// The HTTP method to use. Defaults to [`Method::Get`].
    fn method(&self) -> Method {
        Method::Get
    }

    /// Headers to include in the request, in order. Defaults to none.
    fn headers(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// An optional structured body, sent as the JSON payload when present.
    /// Defaults to `None`.
    fn body(&self) -> Option<serde_json::Value> {
        None
    }

    /// Map raw response text to the typed result.
    ///
    /// Must be a pure function of the text. A failure here is treated as a
    /// send failure and routed to the client's error handler.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the text cannot be interpreted.
    fn map_response(&self, text: &str) -> Result<Self::Response, DecodeError>;
}
