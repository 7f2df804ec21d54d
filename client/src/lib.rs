//! # httperactor reqwest client
//!
//! The concrete [`HttpClient`](httperactor_core::HttpClient) backed by
//! `reqwest`, plus a ready-made header-injecting auth middleware.
//!
//! ## Example
//!
//! ```no_run
//! use httperactor_client::{HeaderAuth, ReqwestClient};
//! use httperactor_core::{DecodeError, HttpClient, Request};
//!
//! struct FetchGreeting;
//!
//! impl Request for FetchGreeting {
//!     type Response = String;
//!
//!     fn path(&self) -> String {
//!         "/greeting".to_string()
//!     }
//!
//!     fn map_response(&self, text: &str) -> Result<String, DecodeError> {
//!         Ok(text.to_string())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ReqwestClient::new("https://api.example.com");
//!     let auth = HeaderAuth::bearer("sekret").expect("valid token");
//!
//!     // None on any failure; the error handler already reported it.
//!     if let Some(greeting) = client.send(FetchGreeting, Some(&auth)).await {
//!         println!("{greeting}");
//!     }
//! }
//! ```
//!
//! ## Failure model
//!
//! `send` never surfaces an error. Build failures, connectivity failures,
//! non-2xx statuses, and decode failures all collapse to `None` after one
//! call to the configured error handler (stderr by default).

pub mod auth;
pub mod client;

pub use auth::HeaderAuth;
pub use client::ReqwestClient;
