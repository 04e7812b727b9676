//! API version value and the version listing returned by the platform root.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};

/// API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "v42.0";

/// A REST API version such as `v42.0`.
///
/// Always stored in canonical form with the leading `v`; `"42.0"` and
/// `"v42.0"` parse to the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Parse and normalize a version string.
    pub fn new(version: impl AsRef<str>) -> Result<Self> {
        let raw = version.as_ref().trim();
        let number = raw.strip_prefix('v').unwrap_or(raw);

        let valid = match number.split_once('.') {
            Some((major, minor)) => {
                !major.is_empty()
                    && !minor.is_empty()
                    && major.chars().all(|c| c.is_ascii_digit())
                    && minor.chars().all(|c| c.is_ascii_digit())
            }
            None => false,
        };

        if !valid {
            return Err(Error::new(ErrorKind::InvalidArgument(format!(
                "invalid API version '{raw}', expected e.g. v42.0"
            ))));
        }

        Ok(Self(format!("v{number}")))
    }

    /// The canonical form, e.g. `v42.0`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The bare number, e.g. `42.0`, as used in `VersionInfo::version`.
    pub fn number(&self) -> &str {
        &self.0[1..]
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self(DEFAULT_API_VERSION.to_string())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ApiVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One entry of the `/services/data/` listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VersionInfo {
    /// Release name, e.g. `Spring '18`.
    pub label: String,
    /// Instance-relative root of this version, e.g. `/services/data/v42.0`.
    pub url: String,
    /// Bare version number, e.g. `42.0`.
    pub version: String,
}

impl VersionInfo {
    /// The entry as an [`ApiVersion`].
    pub fn api_version(&self) -> Result<ApiVersion> {
        ApiVersion::new(&self.version)
    }
}
