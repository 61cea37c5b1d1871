//! MozLog output settings.

use serde::Deserialize;
use std::path::PathBuf;

/// Where MozLog lines are written and how they identify their source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MozLogConfig {
    /// File that log lines are appended to.
    pub path: PathBuf,

    /// Value of the `Hostname` field.
    pub hostname: String,

    /// Value of the `Logger` field.
    pub logger: String,

    /// Value of the `EnvVersion` field.
    pub env_version: String,
}

impl Default for MozLogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("/var/log/moz_log"),
            hostname: "phabricator.services.mozilla.com".to_string(),
            logger: "MozPhab".to_string(),
            env_version: "1.0".to_string(),
        }
    }
}
