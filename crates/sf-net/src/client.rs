//! The versioned REST API client.

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use sfsdk_client::security::{soql, url as url_security};
use sfsdk_client::{ClientConfig, HttpTransport, RestRequest, SessionCredentials, Transport};

use crate::describe::{DescribeGlobalResult, DescribeSObjectResult, SObjectMetadata};
use crate::endpoint::{Endpoint, DATA_ROOT};
use crate::error::{Error, ErrorKind, Result};
use crate::query::{QueryResult, SearchResult};
use crate::sobject::{CreateResult, UpsertResult};
use crate::version::{ApiVersion, VersionInfo};

/// Typed client for the versioned REST API.
///
/// Every operation renders one path from the endpoint table with the
/// client's [`ApiVersion`] and hands it to the transport. Retries,
/// timeouts and authentication belong to the transport; this layer only
/// validates arguments and decodes responses.
///
/// # Example
///
/// ```rust,ignore
/// use sfsdk_net::NetClient;
///
/// let client = NetClient::new("https://na1.salesforce.com", "00D...")?;
///
/// let latest = client.versions().await?.pop();
/// let connect = &client.resources().await?["connect"];
/// let account = client.describe("Account").await?;
/// println!("{} fields", account.fields.len());
/// ```
#[derive(Debug, Clone)]
pub struct NetClient<T = HttpTransport> {
    transport: T,
    api_version: ApiVersion,
}

impl NetClient<HttpTransport> {
    /// Create a client for the given instance and access token, using the
    /// default API version.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let transport = HttpTransport::new(instance_url, access_token)?;
        Ok(Self::with_transport(transport, ApiVersion::default()))
    }

    /// Create a client with custom HTTP configuration.
    pub fn with_config(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let transport = HttpTransport::with_config(instance_url, access_token, config)?;
        Ok(Self::with_transport(transport, ApiVersion::default()))
    }

    /// Create a client from session credentials.
    ///
    /// Uses the credentials' API version when set, the default otherwise.
    pub fn from_credentials(credentials: &SessionCredentials) -> Result<Self> {
        let api_version = credentials
            .api_version()
            .map(ApiVersion::new)
            .transpose()?
            .unwrap_or_default();
        let transport = HttpTransport::from_credentials(credentials, ClientConfig::default())?;
        Ok(Self::with_transport(transport, api_version))
    }
}

impl<T: Transport> NetClient<T> {
    /// Create a client over any transport.
    pub fn with_transport(transport: T, api_version: ApiVersion) -> Self {
        Self {
            transport,
            api_version,
        }
    }

    /// Return a client pinned to another API version.
    pub fn with_api_version(self, api_version: ApiVersion) -> Self {
        Self {
            transport: self.transport,
            api_version,
        }
    }

    /// The API version used for every request path.
    pub fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Instance-relative path for an entry of the endpoint table.
    pub fn path(&self, endpoint: Endpoint<'_>) -> String {
        endpoint.path(&self.api_version)
    }

    // =========================================================================
    // Discovery
    // =========================================================================

    /// List the API versions the server supports, oldest first.
    #[instrument(skip(self))]
    pub async fn versions(&self) -> Result<Vec<VersionInfo>> {
        self.get(Endpoint::Versions).await
    }

    /// The newest version the server supports, if it reports any.
    #[instrument(skip(self))]
    pub async fn latest_version(&self) -> Result<Option<VersionInfo>> {
        Ok(self.versions().await?.pop())
    }

    /// Resource name to path map for the configured version.
    #[instrument(skip(self), fields(api_version = %self.api_version))]
    pub async fn resources(&self) -> Result<HashMap<String, String>> {
        self.get(Endpoint::Resources).await
    }

    // =========================================================================
    // Describe
    // =========================================================================

    /// List every object type available to the user.
    #[instrument(skip(self), fields(api_version = %self.api_version))]
    pub async fn describe_global(&self) -> Result<DescribeGlobalResult> {
        self.get(Endpoint::DescribeGlobal).await
    }

    /// Full describe of one object type.
    ///
    /// Fails with [`ErrorKind::UnknownObject`] if the type does not exist.
    #[instrument(skip(self), fields(api_version = %self.api_version))]
    pub async fn describe(&self, object_type: &str) -> Result<DescribeSObjectResult> {
        check_object_type(object_type)?;
        self.get(Endpoint::Describe { object_type })
            .await
            .map_err(|err| unknown_object(err, object_type))
    }

    /// Basic info and recently viewed records for one object type.
    ///
    /// Fails with [`ErrorKind::UnknownObject`] if the type does not exist.
    #[instrument(skip(self), fields(api_version = %self.api_version))]
    pub async fn metadata(&self, object_type: &str) -> Result<SObjectMetadata> {
        check_object_type(object_type)?;
        self.get(Endpoint::Metadata { object_type })
            .await
            .map_err(|err| unknown_object(err, object_type))
    }

    /// Page layouts of an object type, optionally for a single record type.
    ///
    /// Layout payloads are large and vary by release, so they are returned
    /// as raw JSON.
    #[instrument(skip(self), fields(api_version = %self.api_version))]
    pub async fn describe_layout(
        &self,
        object_type: &str,
        record_type_id: Option<&str>,
    ) -> Result<Value> {
        check_object_type(object_type)?;
        if let Some(id) = record_type_id {
            check_id(id)?;
        }
        self.get(Endpoint::DescribeLayout {
            object_type,
            record_type_id: record_type_id.unwrap_or_default(),
        })
        .await
    }

    // =========================================================================
    // Records
    // =========================================================================

    /// Create a record. `record` must serialize to a JSON object.
    #[instrument(skip(self, record), fields(api_version = %self.api_version))]
    pub async fn create<F: Serialize>(&self, object_type: &str, record: &F) -> Result<CreateResult> {
        check_object_type(object_type)?;
        let body = field_map(record)?;
        let request = RestRequest::post(self.path(Endpoint::SObject { object_type }), body);
        self.send_decode("create", request).await
    }

    /// Fetch a record by id, optionally limited to some fields.
    #[instrument(skip(self), fields(api_version = %self.api_version))]
    pub async fn retrieve<R: DeserializeOwned>(
        &self,
        object_type: &str,
        id: &str,
        field_list: Option<&[&str]>,
    ) -> Result<R> {
        check_object_type(object_type)?;
        check_id(id)?;

        let mut request = RestRequest::get(self.path(Endpoint::Record { object_type, id }));
        if let Some(fields) = field_list {
            for field in fields {
                check_field(field)?;
            }
            if !fields.is_empty() {
                request = request.query("fields", fields.join(","));
            }
        }
        self.send_decode("retrieve", request).await
    }

    /// Update fields of a record.
    #[instrument(skip(self, record), fields(api_version = %self.api_version))]
    pub async fn update<F: Serialize>(&self, object_type: &str, id: &str, record: &F) -> Result<()> {
        check_object_type(object_type)?;
        check_id(id)?;
        let body = field_map(record)?;
        let request = RestRequest::patch(self.path(Endpoint::Record { object_type, id }), body);
        self.send("update", request).await?;
        Ok(())
    }

    /// Insert or update a record matched on an external id field.
    #[instrument(skip(self, record), fields(api_version = %self.api_version))]
    pub async fn upsert<F: Serialize>(
        &self,
        object_type: &str,
        external_id_field: &str,
        external_id: &str,
        record: &F,
    ) -> Result<UpsertResult> {
        check_object_type(object_type)?;
        check_field(external_id_field)?;
        if external_id.is_empty() {
            return Err(invalid("external id value must not be empty"));
        }
        let body = field_map(record)?;

        let value = url_security::encode_param(external_id);
        let path = self.path(Endpoint::ExternalId {
            object_type,
            field: external_id_field,
            value: &value,
        });

        // 201 carries the new record, 204 means an existing one was updated
        match self.send("upsert", RestRequest::patch(path, body)).await? {
            Some(body) => decode("upsert", body),
            None => Ok(UpsertResult::updated(external_id)),
        }
    }

    /// Delete a record.
    #[instrument(skip(self), fields(api_version = %self.api_version))]
    pub async fn delete(&self, object_type: &str, id: &str) -> Result<()> {
        check_object_type(object_type)?;
        check_id(id)?;
        let request = RestRequest::delete(self.path(Endpoint::Record { object_type, id }));
        self.send("delete", request).await?;
        Ok(())
    }

    // =========================================================================
    // Query & Search
    // =========================================================================

    /// Run a SOQL query and return the first page.
    #[instrument(skip(self), fields(api_version = %self.api_version))]
    pub async fn query<R: DeserializeOwned>(&self, soql: &str) -> Result<QueryResult<R>> {
        if soql.trim().is_empty() {
            return Err(invalid("SOQL query must not be empty"));
        }
        let request = RestRequest::get(self.path(Endpoint::Query)).query("q", soql);
        self.send_decode("query", request).await
    }

    /// Fetch the next page of a query from its `nextRecordsUrl`.
    #[instrument(skip(self))]
    pub async fn query_more<R: DeserializeOwned>(
        &self,
        next_records_url: &str,
    ) -> Result<QueryResult<R>> {
        if !next_records_url.starts_with(DATA_ROOT) || next_records_url.contains("..") {
            return Err(invalid(format!(
                "'{next_records_url}' is not a query locator path"
            )));
        }
        self.send_decode("query_more", RestRequest::get(next_records_url))
            .await
    }

    /// Run a SOSL search.
    #[instrument(skip(self), fields(api_version = %self.api_version))]
    pub async fn search<R: DeserializeOwned>(&self, sosl: &str) -> Result<SearchResult<R>> {
        if sosl.trim().is_empty() {
            return Err(invalid("SOSL search must not be empty"));
        }
        let request = RestRequest::get(self.path(Endpoint::Search)).query("q", sosl);
        self.send_decode("search", request).await
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    async fn get<R: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<R> {
        let request = RestRequest::get(self.path(endpoint));
        self.send_decode(endpoint.name(), request).await
    }

    async fn send_decode<R: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RestRequest,
    ) -> Result<R> {
        match self.send(operation, request).await? {
            Some(body) => decode(operation, body),
            None => Err(malformed(operation, "expected a JSON body, got none")),
        }
    }

    async fn send(&self, operation: &'static str, request: RestRequest) -> Result<Option<Value>> {
        debug!(operation, method = request.method().as_str(), path = %request.path(), "Dispatching");
        self.transport.send(request).await.map_err(|err| {
            if matches!(err.kind, sfsdk_client::ErrorKind::Json(_)) {
                let message = err.to_string();
                Error::with_source(
                    ErrorKind::MalformedResponse {
                        endpoint: operation.to_string(),
                        message,
                    },
                    err,
                )
            } else {
                err.into()
            }
        })
    }
}

fn decode<R: DeserializeOwned>(operation: &str, body: Value) -> Result<R> {
    serde_json::from_value(body).map_err(|err| {
        Error::with_source(
            ErrorKind::MalformedResponse {
                endpoint: operation.to_string(),
                message: err.to_string(),
            },
            err,
        )
    })
}

fn malformed(operation: &str, message: &str) -> Error {
    Error::new(ErrorKind::MalformedResponse {
        endpoint: operation.to_string(),
        message: message.to_string(),
    })
}

fn invalid(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::InvalidArgument(message.into()))
}

fn check_object_type(object_type: &str) -> Result<()> {
    if soql::is_safe_sobject_name(object_type) {
        Ok(())
    } else {
        Err(invalid(format!("invalid object type '{object_type}'")))
    }
}

fn check_field(field: &str) -> Result<()> {
    if soql::is_safe_field_name(field) {
        Ok(())
    } else {
        Err(invalid(format!("invalid field name '{field}'")))
    }
}

fn check_id(id: &str) -> Result<()> {
    if url_security::is_valid_salesforce_id(id) {
        Ok(())
    } else {
        Err(invalid(format!("invalid record id '{id}'")))
    }
}

fn field_map<F: Serialize>(fields: &F) -> Result<Value> {
    match serde_json::to_value(fields) {
        Ok(value @ Value::Object(_)) => Ok(value),
        Ok(_) => Err(invalid("record fields must serialize to a JSON object")),
        Err(err) => Err(Error::with_source(
            ErrorKind::InvalidArgument("record fields could not be serialized".to_string()),
            err,
        )),
    }
}

/// Turn a not-found transport error into `UnknownObject`, keeping the cause.
fn unknown_object(err: Error, object_type: &str) -> Error {
    let not_found = err
        .transport_error()
        .is_some_and(|cause| cause.is_not_found());
    if not_found {
        Error {
            kind: ErrorKind::UnknownObject(object_type.to_string()),
            source: err.source,
        }
    } else {
        err
    }
}
