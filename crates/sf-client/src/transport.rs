//! The transport seam and its reqwest implementation.
//!
//! ## Security
//!
//! - Access tokens are redacted in Debug output
//! - The request body is skipped in tracing spans

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::credentials::SessionCredentials;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RestRequest;
use crate::response::{Response, ResponseExt};
use crate::retry::RetryPolicy;

/// Issues a REST call and delivers the parsed JSON body or a structured error.
///
/// `Ok(None)` means the call succeeded without a body (204 No Content).
/// Implementations decide on retries, timeouts and authentication; callers
/// only see the final outcome.
pub trait Transport: Send + Sync {
    /// Send a request and parse the response body.
    fn send(&self, request: RestRequest) -> impl Future<Output = Result<Option<Value>>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn send(&self, request: RestRequest) -> impl Future<Output = Result<Option<Value>>> + Send {
        (**self).send(request)
    }
}

/// Authenticated HTTP transport for one Salesforce instance.
///
/// Paths in [`RestRequest`] are resolved against the instance URL and sent
/// with `Authorization: Bearer <token>`. Rate limits and 5xx responses are
/// retried according to [`ClientConfig::retry`].
///
/// # Example
///
/// ```rust,ignore
/// use sfsdk_client::{HttpTransport, RestRequest, Transport};
///
/// let transport = HttpTransport::new("https://na1.salesforce.com", "00D...")?;
/// let body = transport.send(RestRequest::get("/services/data/v42.0/")).await?;
/// ```
#[derive(Clone)]
pub struct HttpTransport {
    inner: reqwest::Client,
    config: ClientConfig,
    instance_url: String,
    access_token: String,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("instance_url", &self.instance_url)
            .field("access_token", &"[REDACTED]")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Create a transport with the default configuration.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(instance_url, access_token, ClientConfig::default())
    }

    /// Create a transport with a custom configuration.
    pub fn with_config(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(config.accept_compressed)
            .deflate(config.accept_compressed)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            inner,
            config,
            instance_url: instance_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        })
    }

    /// Create a transport from session credentials.
    pub fn from_credentials(credentials: &SessionCredentials, config: ClientConfig) -> Result<Self> {
        credentials.validate()?;
        Self::with_config(credentials.instance_url(), credentials.access_token(), config)
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the full URL for a path.
    ///
    /// Absolute URLs are passed through unchanged.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.instance_url, path)
        } else {
            format!("{}/{}", self.instance_url, path)
        }
    }

    /// Execute a request with automatic retry handling.
    #[instrument(skip(self, request), fields(method = request.method().as_str(), path = %request.path()))]
    pub async fn execute(&self, request: &RestRequest) -> Result<Response> {
        let mut retry_policy = self
            .config
            .retry
            .as_ref()
            .map(|c| RetryPolicy::new(c.clone()));

        loop {
            match self.execute_once(request).await {
                Ok(response) => return response.check_salesforce_error().await,
                Err(err) if err.is_retryable() => {
                    let Some(policy) = retry_policy.as_mut() else {
                        return Err(err);
                    };
                    match policy.next_delay(err.retry_after()) {
                        Some(delay) => {
                            warn!(
                                attempt = policy.attempt(),
                                delay_ms = delay.as_millis(),
                                error = %err,
                                "Request failed, retrying"
                            );
                            tokio::time::sleep(delay).await;
                        }
                        None => {
                            return Err(Error::with_source(
                                ErrorKind::RetriesExhausted {
                                    attempts: policy.attempt(),
                                },
                                err,
                            ));
                        }
                    }
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Execute a single request without retry logic.
    async fn execute_once(&self, request: &RestRequest) -> Result<Response> {
        let mut url = url::Url::parse(&self.url(request.path()))?;
        if !request.query_params().is_empty() {
            url.query_pairs_mut().extend_pairs(
                request
                    .query_params()
                    .iter()
                    .map(|(name, value)| (name.as_str(), value.as_str())),
            );
        }

        let mut req = self
            .inner
            .request(request.method().to_reqwest(), url.clone())
            .bearer_auth(&self.access_token)
            .header("Accept", "application/json");

        if let Some(body) = request.body() {
            req = req.json(body);
        }

        if self.config.enable_tracing {
            debug!(method = request.method().as_str(), url = %url, "Sending request");
        }

        let response = Response::new(req.send().await?);
        let status = response.status();

        if self.config.enable_tracing {
            if response.is_success() {
                debug!(status, "Response received");
            } else {
                info!(status, "Non-success response");
            }
        }

        if status == 429 {
            return Err(Error::new(ErrorKind::RateLimited {
                retry_after: response.retry_after(),
            }));
        }

        if matches!(status, 500 | 502 | 503 | 504) {
            return Err(Error::new(ErrorKind::Http {
                status,
                message: format!("Server error: {}", status),
            }));
        }

        Ok(response)
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: RestRequest) -> Result<Option<Value>> {
        let response = self.execute(&request).await?;
        response.json_value().await
    }
}
