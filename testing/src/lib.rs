//! # httperactor Testing
//!
//! Mock implementations of the httperactor core contracts.
//!
//! This crate provides:
//! - [`MockHttpClient`]: a scripted client that records what was sent
//! - [`RecordingStore`]: a store that collects dispatched actions
//! - [`CapturingErrorHandler`]: an error sink that collects failures
//! - [`FixtureRequest`]: a buildable request descriptor for tests
//!
//! ## Example
//!
//! ```
//! use httperactor_core::HttpClient;
//! use httperactor_testing::mocks::{FixtureRequest, MockHttpClient};
//!
//! # async fn example() {
//! let client = MockHttpClient::new();
//! client.push_response(200, "bar");
//!
//! let response = client.send(FixtureRequest::text("/foo"), None).await;
//! assert_eq!(response.as_deref(), Some("bar"));
//! # }
//! ```

pub mod mocks;

pub use mocks::{
    CapturingErrorHandler, FixtureRequest, MockHttpClient, MockOutcome, RecordingStore,
    SentRequest,
};
