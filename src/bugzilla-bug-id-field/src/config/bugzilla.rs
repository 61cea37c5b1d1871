//! Bugzilla connection settings.

use super::ConfigError;
use std::time::Duration;
use url::Url;

/// Default timeout for a single Bugzilla request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Connection settings for the Bugzilla instance that owns the bugs.
///
/// Built once and handed to the HTTP client and the field definition; nothing
/// reads these values from process-wide state at request time.
#[derive(Clone)]
pub struct BugzillaConfig {
    /// Base URL of the Bugzilla instance.
    url: Url,
    /// Automation API key sent with every permissions check.
    api_key: String,
    /// Timeout for a single request.
    timeout: Duration,
}

impl BugzillaConfig {
    /// Creates validated connection settings with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the URL is not an http(s)
    /// base URL or the API key is blank.
    pub fn new(url: Url, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ConfigError::ValidationError {
                key: "bugzilla-url",
                message: format!("'{url}' is not an http(s) base URL"),
            });
        }

        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                key: "automation-api-key",
                message: "API key is empty".to_string(),
            });
        }

        Ok(Self {
            url,
            api_key,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Sets a custom request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for a zero timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::ValidationError {
                key: "timeout-secs",
                message: "timeout must be greater than zero".to_string(),
            });
        }
        self.timeout = timeout;
        Ok(self)
    }

    /// Returns the Bugzilla base URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the automation API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the base URL with its path replaced by `path`.
    ///
    /// Bugzilla serves `/<id>` as a redirect to the bug page.
    #[must_use]
    pub fn bug_url(&self, path: &str) -> Url {
        let mut url = self.url.clone();
        url.set_path(path);
        url
    }
}

// The API key stays out of debug output and therefore out of logs.
impl std::fmt::Debug for BugzillaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BugzillaConfig")
            .field("url", &self.url.as_str())
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
