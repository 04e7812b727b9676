//! # sfsdk-client
//!
//! HTTP transport for Salesforce REST calls.
//!
//! This crate is the seam between the typed API facade (`sfsdk-net`) and the
//! network. It provides:
//! - The [`Transport`] trait: send a [`RestRequest`], get parsed JSON back
//! - [`HttpTransport`], a reqwest implementation with bearer authentication
//! - Automatic retry with exponential backoff and jitter
//! - Rate limit detection and Salesforce error-body mapping
//! - Security helpers for object names, field names and record ids
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      NetClient (sfsdk-net)                  │
//! │  - Formats /services/data/{version}/... paths               │
//! │  - Decodes typed response models                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  RestRequest
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Transport (trait)                          │
//! │  HttpTransport: instance URL + access token + reqwest       │
//! │  - Retry, rate limiting, error mapping                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use sfsdk_client::{HttpTransport, RestRequest, Transport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sfsdk_client::Error> {
//!     let transport = HttpTransport::new("https://na1.salesforce.com", "00D...")?;
//!     let versions = transport.send(RestRequest::get("/services/data/")).await?;
//!     println!("{versions:?}");
//!     Ok(())
//! }
//! ```

mod config;
mod credentials;
mod error;
mod request;
mod response;
mod retry;
pub mod security;
mod transport;

pub use config::{ClientConfig, ClientConfigBuilder};
pub use credentials::SessionCredentials;
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestMethod, RestRequest};
pub use response::{Response, ResponseExt};
pub use retry::{BackoffStrategy, RetryConfig, RetryPolicy};
pub use transport::{HttpTransport, Transport};

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("sfsdk/", env!("CARGO_PKG_VERSION"));
