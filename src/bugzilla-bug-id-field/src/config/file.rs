//! On-disk configuration file.

use super::{BugzillaConfig, ConfigError, MozLogConfig, Settings};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Environment variable overriding `bugzilla-url`.
pub const URL_ENV: &str = "BUGZILLA_URL";

/// Environment variable overriding `automation-api-key`.
pub const API_KEY_ENV: &str = "BUGZILLA_AUTOMATION_API_KEY";

/// Raw settings as read from `config.toml`, before validation.
///
/// Every Bugzilla setting is optional here so that the environment and
/// command line can fill in whatever the file leaves out.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    /// Base URL of the Bugzilla instance.
    pub bugzilla_url: Option<String>,

    /// Automation API key.
    pub automation_api_key: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// MozLog output settings.
    #[serde(default)]
    pub mozlog: MozLogConfig,
}

impl ConfigFile {
    /// Loads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file can't be read or isn't valid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading config file");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Overrides file values with `BUGZILLA_URL` and
    /// `BUGZILLA_AUTOMATION_API_KEY` when they are set and non-empty.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(url) = env_value(URL_ENV) {
            self.bugzilla_url = Some(url);
        }
        if let Some(key) = env_value(API_KEY_ENV) {
            self.automation_api_key = Some(key);
        }
        self
    }

    /// Validates the collected values into [`Settings`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required value is missing or invalid.
    pub fn resolve(self) -> Result<Settings, ConfigError> {
        let raw_url = self.bugzilla_url.ok_or(ConfigError::MissingSetting {
            key: "bugzilla-url",
            env: URL_ENV,
        })?;
        let url = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidUrl {
            value: raw_url.clone(),
            source: e,
        })?;
        let api_key = self
            .automation_api_key
            .ok_or(ConfigError::MissingSetting {
                key: "automation-api-key",
                env: API_KEY_ENV,
            })?;

        let mut bugzilla = BugzillaConfig::new(url, api_key)?;
        if let Some(secs) = self.timeout_secs {
            bugzilla = bugzilla.with_timeout(Duration::from_secs(secs))?;
        }

        Ok(Settings {
            bugzilla,
            mozlog: self.mozlog,
        })
    }
}

/// Reads an environment variable, treating empty values as unset.
fn env_value(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn can_load_full_config() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            r#"
bugzilla-url = "https://bugzilla.example.com"
automation-api-key = "abc123"
timeout-secs = 10

[mozlog]
path = "/tmp/moz_log"
hostname = "phab.example.com"
"#,
        );

        let settings = ConfigFile::load(&path).unwrap().resolve().unwrap();

        assert_eq!(
            settings.bugzilla.url().as_str(),
            "https://bugzilla.example.com/"
        );
        assert_eq!(settings.bugzilla.api_key(), "abc123");
        assert_eq!(settings.bugzilla.timeout(), Duration::from_secs(10));
        assert_eq!(settings.mozlog.path, Path::new("/tmp/moz_log"));
        assert_eq!(settings.mozlog.hostname, "phab.example.com");
        // Unset keys fall back to defaults
        assert_eq!(settings.mozlog.logger, "MozPhab");
        assert_eq!(settings.mozlog.env_version, "1.0");
    }

    #[test]
    fn load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = ConfigFile::load(&temp.path().join("nonexistent.toml"));
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn load_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), "bugzilla-url = [");
        let result = ConfigFile::load(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn resolve_requires_url() {
        let file = ConfigFile {
            automation_api_key: Some("abc123".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            file.resolve(),
            Err(ConfigError::MissingSetting {
                key: "bugzilla-url",
                ..
            })
        ));
    }

    #[test]
    fn resolve_requires_api_key() {
        let file = ConfigFile {
            bugzilla_url: Some("https://bugzilla.example.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            file.resolve(),
            Err(ConfigError::MissingSetting {
                key: "automation-api-key",
                ..
            })
        ));
    }

    #[test]
    fn resolve_rejects_unparseable_url() {
        let file = ConfigFile {
            bugzilla_url: Some("not a url".to_string()),
            automation_api_key: Some("abc123".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            file.resolve(),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn env_overrides_file_values() {
        temp_env::with_vars(
            [
                (URL_ENV, Some("https://env.example.com")),
                (API_KEY_ENV, Some("from-env")),
            ],
            || {
                let file = ConfigFile {
                    bugzilla_url: Some("https://file.example.com".to_string()),
                    automation_api_key: Some("from-file".to_string()),
                    ..Default::default()
                };

                let settings = file.with_env_overrides().resolve().unwrap();
                assert_eq!(settings.bugzilla.url().as_str(), "https://env.example.com/");
                assert_eq!(settings.bugzilla.api_key(), "from-env");
            },
        );
    }

    #[test]
    fn empty_env_values_are_ignored() {
        temp_env::with_vars([(URL_ENV, Some("")), (API_KEY_ENV, None::<&str>)], || {
            let file = ConfigFile {
                bugzilla_url: Some("https://file.example.com".to_string()),
                automation_api_key: Some("from-file".to_string()),
                ..Default::default()
            };

            let file = file.with_env_overrides();
            assert_eq!(
                file.bugzilla_url.as_deref(),
                Some("https://file.example.com")
            );
            assert_eq!(file.automation_api_key.as_deref(), Some("from-file"));
        });
    }
}
