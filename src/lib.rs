//! # sfsdk
//!
//! Core of a Salesforce mobile SDK for Rust: a versioned REST API facade and
//! a declarative app-configuration builder.
//!
//! ## Security
//!
//! - Access tokens are redacted in Debug output
//! - Tracing spans skip credentials and request bodies
//! - Error messages are sanitized of tokens and session ids
//!
//! ## Crates
//!
//! - **sfsdk-client** - HTTP transport with bearer auth, retry and error mapping
//! - **sfsdk-net** - Versioned REST facade: versions, resources, describe, metadata, records, query
//! - **sfsdk-app** - App configuration builder and lifecycle callbacks
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sfsdk::{NetClient, SdkManager, SessionCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manager = SdkManager::builder()
//!         .configure(|config| {
//!             config.consumer_key = "3MVG9...".into();
//!             config.redirect_uri = "myapp://auth/success".into();
//!             config.scopes = vec!["web".into(), "api".into()];
//!         })
//!         .post_launch(|actions| println!("launch actions taken: {actions}"))
//!         .build()?;
//!
//!     // Token acquisition happens elsewhere; hand the session to the facade.
//!     let creds = SessionCredentials::from_env()?;
//!     let client = NetClient::from_credentials(&creds)?;
//!
//!     let global = client.describe_global().await?;
//!     println!("{} object types", global.sobjects.len());
//!     Ok(())
//! }
//! ```

#[cfg(feature = "app")]
pub use sfsdk_app as app;
#[cfg(feature = "client")]
pub use sfsdk_client as client;
#[cfg(feature = "net")]
pub use sfsdk_net as net;

// Re-export commonly used types at the top level
#[cfg(feature = "app")]
pub use sfsdk_app::{AppConfig, LaunchAction, LaunchActions, SdkManager, UserAccount};
#[cfg(feature = "client")]
pub use sfsdk_client::{ClientConfig, HttpTransport, SessionCredentials, Transport};
#[cfg(feature = "net")]
pub use sfsdk_net::{dispatch, ApiVersion, NetClient};
