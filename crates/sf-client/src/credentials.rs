//! Session credentials handed to the transport.
//!
//! Acquiring and refreshing tokens happens elsewhere; this is only the
//! already-authenticated handle. Debug output redacts the access token.

use crate::error::{Error, ErrorKind, Result};

/// Instance URL, access token and optional API version of a live session.
#[derive(Clone)]
pub struct SessionCredentials {
    instance_url: String,
    access_token: String,
    api_version: Option<String>,
}

impl std::fmt::Debug for SessionCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCredentials")
            .field("instance_url", &self.instance_url)
            .field("access_token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl SessionCredentials {
    /// Create credentials for the given instance and token.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            instance_url: instance_url.into(),
            access_token: access_token.into(),
            api_version: None,
        }
    }

    /// Pin the API version the session should use (e.g. `v42.0`).
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Load credentials from environment variables.
    ///
    /// Reads `SF_INSTANCE_URL`, `SF_ACCESS_TOKEN` and the optional
    /// `SF_API_VERSION`; the `SALESFORCE_*` spellings are accepted too.
    pub fn from_env() -> Result<Self> {
        let instance_url = std::env::var("SF_INSTANCE_URL")
            .or_else(|_| std::env::var("SALESFORCE_INSTANCE_URL"))
            .map_err(|_| Error::new(ErrorKind::Config("SF_INSTANCE_URL is not set".to_string())))?;

        let access_token = std::env::var("SF_ACCESS_TOKEN")
            .or_else(|_| std::env::var("SALESFORCE_ACCESS_TOKEN"))
            .map_err(|_| Error::new(ErrorKind::Config("SF_ACCESS_TOKEN is not set".to_string())))?;

        let api_version = std::env::var("SF_API_VERSION")
            .or_else(|_| std::env::var("SALESFORCE_API_VERSION"))
            .ok()
            .filter(|v| !v.is_empty());

        let creds = Self {
            instance_url,
            access_token,
            api_version,
        };
        creds.validate()?;
        Ok(creds)
    }

    /// Check that the instance URL parses and the token is non-empty.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.instance_url)?;
        if self.access_token.is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "access token is empty".to_string(),
            )));
        }
        Ok(())
    }

    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }
}
