//! SOQL query and SOSL search results.

use serde::{Deserialize, Serialize};

/// One page of a SOQL query.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryResult<T> {
    /// Total number of records matching the query.
    #[serde(rename = "totalSize")]
    pub total_size: u64,

    /// Whether all records are returned (no more pages).
    pub done: bool,

    /// Path of the next page; pass it to `query_more`.
    #[serde(rename = "nextRecordsUrl")]
    pub next_records_url: Option<String>,

    pub records: Vec<T>,
}

impl<T> QueryResult<T> {
    /// Returns true if another page can be fetched.
    pub fn has_more(&self) -> bool {
        !self.done && self.next_records_url.is_some()
    }
}

/// Result of a SOSL search.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResult<T> {
    #[serde(rename = "searchRecords")]
    pub search_records: Vec<T>,
}
