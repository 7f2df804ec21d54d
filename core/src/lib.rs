//! # httperactor Core
//!
//! Core contracts for sending HTTP requests and feeding their results into
//! a state store.
//!
//! This crate defines the capability traits the rest of the workspace is
//! built around:
//!
//! - **[`Request`]**: a passive description of one HTTP call and how to map
//!   its raw text response into a typed value
//! - **[`AuthMiddleware`]**: a request-type-preserving transformation that
//!   injects credentials into a transport-native request
//! - **[`ErrorHandler`]**: a sink that absorbs send failures without ever
//!   propagating them
//! - **[`HttpClient`]**: the request-execution pipeline boundary — build,
//!   authenticate, send, validate status, map
//! - **[`Store`]**: the dispatch boundary of the application's
//!   state-management layer
//! - **[`HttpInteractor`]**: a template method sequencing one send with
//!   side effects and store dispatch
//!
//! ## Architecture Principles
//!
//! - Unidirectional data flow: interactor → client → transport, results
//!   flow back through side effects into store actions
//! - The client is the sole catch boundary: callers see a typed result or
//!   nothing, never a raised failure
//! - Collaborators (transport, store) are injected, never owned
//!
//! ## Example
//!
//! ```ignore
//! use httperactor_core::{HttpInteractor, Method, Request};
//!
//! struct FetchUser { id: u64 }
//!
//! impl Request for FetchUser {
//!     type Response = User;
//!
//!     fn path(&self) -> String {
//!         format!("/users/{}", self.id)
//!     }
//!
//!     fn map_response(&self, text: &str) -> Result<User, DecodeError> {
//!         Ok(serde_json::from_str(text)?)
//!     }
//! }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod handler;
pub mod interactor;
pub mod method;
pub mod request;
pub mod store;

pub use auth::AuthMiddleware;
pub use client::HttpClient;
pub use error::{DecodeError, SendError};
pub use handler::{ErrorHandler, StderrErrorHandler, TracingErrorHandler};
pub use interactor::HttpInteractor;
pub use method::Method;
pub use request::Request;
pub use store::Store;
