//! Connected-app configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};

/// Connected-app settings the SDK manager is built from.
///
/// Field names on the wire follow the mobile SDK's `bootconfig.json`.
///
/// ```rust
/// use sfsdk_app::AppConfig;
///
/// let config = AppConfig::from_json_str(r#"{
///     "remoteAccessConsumerKey": "3MVG9...",
///     "oauthRedirectURI": "myapp://auth/success",
///     "oauthScopes": ["web", "api"]
/// }"#).unwrap();
///
/// assert!(config.should_authenticate);
/// assert_eq!(config.scope_string(), "web api");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Connected app consumer key (client_id).
    #[serde(rename = "remoteAccessConsumerKey", default)]
    pub consumer_key: String,

    /// Callback URI registered on the connected app.
    #[serde(rename = "oauthRedirectURI", default)]
    pub redirect_uri: String,

    /// OAuth scopes to request.
    #[serde(rename = "oauthScopes", default)]
    pub scopes: Vec<String>,

    /// Authenticate at launch. When false the launch is `AuthBypassed` and
    /// the OAuth settings are not checked.
    #[serde(rename = "shouldAuthenticate", default = "default_should_authenticate")]
    pub should_authenticate: bool,

    /// Login host override, e.g. `test.salesforce.com`.
    #[serde(rename = "loginHost", default, skip_serializing_if = "Option::is_none")]
    pub login_host: Option<String>,
}

fn default_should_authenticate() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            consumer_key: String::new(),
            redirect_uri: String::new(),
            scopes: Vec::new(),
            should_authenticate: true,
            login_host: None,
        }
    }
}

impl AppConfig {
    /// Create a config for the given connected app.
    pub fn new(consumer_key: impl Into<String>, redirect_uri: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            redirect_uri: redirect_uri.into(),
            ..Self::default()
        }
    }

    /// Set the scopes.
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the login host.
    pub fn with_login_host(mut self, host: impl Into<String>) -> Self {
        self.login_host = Some(host.into());
        self
    }

    /// Load from environment variables.
    ///
    /// - `SFSDK_CONSUMER_KEY` (required)
    /// - `SFSDK_REDIRECT_URI` (required)
    /// - `SFSDK_OAUTH_SCOPES`, comma or space separated
    /// - `SFSDK_LOGIN_HOST`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let consumer_key = lookup("SFSDK_CONSUMER_KEY")
            .ok_or_else(|| Error::new(ErrorKind::EnvVar("SFSDK_CONSUMER_KEY".to_string())))?;
        let redirect_uri = lookup("SFSDK_REDIRECT_URI")
            .ok_or_else(|| Error::new(ErrorKind::EnvVar("SFSDK_REDIRECT_URI".to_string())))?;
        let scopes = lookup("SFSDK_OAUTH_SCOPES")
            .map(|raw| parse_scopes(&raw))
            .unwrap_or_default();
        let login_host = lookup("SFSDK_LOGIN_HOST").filter(|h| !h.trim().is_empty());

        Ok(Self {
            consumer_key,
            redirect_uri,
            scopes,
            should_authenticate: true,
            login_host,
        })
    }

    /// Parse a `bootconfig.json` document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a `bootconfig.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Scopes as a single space-separated OAuth `scope` value.
    pub fn scope_string(&self) -> String {
        self.scopes.join(" ")
    }

    /// Check the settings needed to authenticate.
    ///
    /// Always passes when `should_authenticate` is false.
    pub fn validate(&self) -> Result<()> {
        if !self.should_authenticate {
            return Ok(());
        }

        if self.consumer_key.trim().is_empty() {
            return Err(invalid("consumer key must not be empty"));
        }

        url::Url::parse(&self.redirect_uri).map_err(|err| {
            Error::with_source(
                ErrorKind::InvalidConfig(format!("redirect URI '{}' is not a URI", self.redirect_uri)),
                err,
            )
        })?;

        if self.scopes.iter().all(|s| s.trim().is_empty()) {
            return Err(invalid("at least one OAuth scope is required"));
        }

        if let Some(host) = &self.login_host {
            if host.trim().is_empty() || host.contains('/') {
                return Err(invalid(format!("login host '{host}' must be a bare host name")));
            }
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::InvalidConfig(message.into()))
}

fn parse_scopes(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
