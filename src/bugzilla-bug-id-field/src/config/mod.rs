//! Configuration loading.
//!
//! Settings come from three layers, later layers winning:
//! a `config.toml` file, the `BUGZILLA_URL` / `BUGZILLA_AUTOMATION_API_KEY`
//! environment variables, and explicit values set by the caller (the CLI
//! flags) on the [`ConfigFile`] before [`ConfigFile::resolve`] is called.

mod bugzilla;
mod error;
mod file;
mod mozlog;

pub use bugzilla::{BugzillaConfig, DEFAULT_TIMEOUT_SECS};
pub use error::ConfigError;
pub use file::{ConfigFile, API_KEY_ENV, URL_ENV};
pub use mozlog::MozLogConfig;

use std::path::Path;
use tracing::info;

/// Fully validated settings for one process.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Bugzilla connection settings.
    pub bugzilla: BugzillaConfig,

    /// MozLog output settings.
    pub mozlog: MozLogConfig,
}

/// Reads the config file (if any) and applies environment overrides.
///
/// The result is still unvalidated so callers can layer their own overrides
/// on top before calling [`ConfigFile::resolve`].
///
/// # Arguments
///
/// * `path` - Optional path to a `config.toml`; `None` starts from defaults
///
/// # Errors
///
/// Returns an error if the file exists but can't be read or parsed.
pub fn load_config_file(path: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    let file = match path {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            ConfigFile::load(path)?
        }
        None => ConfigFile::default(),
    };

    Ok(file.with_env_overrides())
}
