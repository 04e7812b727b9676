//! Record write results.

use serde::{Deserialize, Serialize};

/// Result of a create operation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateResult {
    pub id: String,
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<SalesforceError>,
}

/// Result of an upsert operation.
///
/// The server answers 201 with a body for inserts and 204 without one for
/// updates; `created` tells them apart.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UpsertResult {
    /// Record id for inserts; the external id value for updates.
    pub id: String,
    pub success: bool,
    pub created: bool,
    #[serde(default)]
    pub errors: Vec<SalesforceError>,
}

impl UpsertResult {
    /// Result of an upsert that matched an existing record (204, no body).
    pub(crate) fn updated(external_id: &str) -> Self {
        Self {
            id: external_id.to_string(),
            success: true,
            created: false,
            errors: Vec::new(),
        }
    }
}

/// Error entry inside a write result.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SalesforceError {
    #[serde(rename = "statusCode")]
    pub status_code: String,
    pub message: String,
    #[serde(default)]
    pub fields: Vec<String>,
}
