//! # sfsdk-net
//!
//! Versioned REST API facade.
//!
//! A [`NetClient`] holds one [`ApiVersion`] and a [`Transport`]. Every
//! operation renders a fixed path template under `/services/data/{version}/`
//! and returns a future resolving to a typed result.
//!
//! ## Features
//!
//! - **Discovery** - `versions`, `resources`
//! - **Describe** - `describe_global`, `describe`, `metadata`, `describe_layout`
//! - **Records** - `create`, `retrieve`, `update`, `upsert`, `delete`
//! - **Query** - `query`, `query_more`, `search`
//! - **Continuations** - [`dispatch`] for callback-style callers
//!
//! ## Example
//!
//! ```rust,ignore
//! use sfsdk_net::NetClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sfsdk_net::Error> {
//!     let client = NetClient::new("https://na1.salesforce.com", "00D...")?;
//!
//!     let global = client.describe_global().await?;
//!     for sobject in &global.sobjects {
//!         println!("{} ({})", sobject.name, sobject.label);
//!     }
//!
//!     let account = client.describe("Account").await?;
//!     println!("Account has {} fields", account.fields.len());
//!     Ok(())
//! }
//! ```

mod client;
mod describe;
mod dispatch;
mod endpoint;
mod error;
mod query;
mod sobject;
mod version;

pub use client::NetClient;
pub use describe::{
    ChildRelationship, DescribeGlobalResult, DescribeSObjectResult, FieldDescribe, PicklistValue,
    RecordTypeInfo, SObjectBasicInfo, SObjectMetadata,
};
pub use dispatch::dispatch;
pub use endpoint::{Endpoint, DATA_ROOT};
pub use error::{Error, ErrorKind, Result};
pub use query::{QueryResult, SearchResult};
pub use sobject::{CreateResult, SalesforceError, UpsertResult};
pub use version::{ApiVersion, VersionInfo, DEFAULT_API_VERSION};

// Re-export the transport seam so callers can plug in their own.
pub use sfsdk_client::{HttpTransport, RestRequest, SessionCredentials, Transport};
