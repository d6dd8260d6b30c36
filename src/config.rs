//! Configuration types for book-query

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

/// Main configuration for [`BookQuery`](crate::BookQuery)
///
/// All fields have defaults, so an empty JSON object is a valid config.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base endpoint of the search service, without query string (default: "https://buscador")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for a single search request (default: 10 seconds)
    #[serde(default = "default_timeout", with = "duration_serde")]
    pub timeout: Duration,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Read a JSON config file and validate it
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configured values can drive a request
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the offending key when:
    /// - `base_url` does not parse, is not http(s), or carries a query string or fragment
    /// - `timeout` is zero
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.base_url).map_err(|e| Error::Config {
            message: format!("invalid base_url '{}': {}", self.base_url, e),
            key: Some("base_url".to_string()),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config {
                message: format!(
                    "base_url must use http or https, got '{}'",
                    parsed.scheme()
                ),
                key: Some("base_url".to_string()),
            });
        }

        if parsed.query().is_some() {
            return Err(Error::Config {
                message: "base_url must not contain a query string".to_string(),
                key: Some("base_url".to_string()),
            });
        }

        // Anything after '#' would swallow the appended query string
        if parsed.fragment().is_some() {
            return Err(Error::Config {
                message: "base_url must not contain a fragment".to_string(),
                key: Some("base_url".to_string()),
            });
        }

        if self.timeout.is_zero() {
            return Err(Error::Config {
                message: "timeout must be greater than zero".to_string(),
                key: Some("timeout".to_string()),
            });
        }

        Ok(())
    }
}

fn default_base_url() -> String {
    "https://buscador".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_user_agent() -> String {
    concat!("book-query/", env!("CARGO_PKG_VERSION")).to_string()
}

// Duration as whole seconds
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
