//! MozLog structured logging.
//!
//! Writes one JSON object per line in the MozLog schema:
//!
//! ```text
//! {"Timestamp":1700000000,"Type":"bugzilla","Logger":"MozPhab",
//!  "Hostname":"phabricator.services.mozilla.com","EnvVersion":"1.0",
//!  "Severity":"3","Pid":"4242","Fields":{"msg":"...", ...}}
//! ```
//!
//! [`MozLogger`] is called directly; [`MozLogLayer`] feeds `tracing` events
//! through the same logger.

mod entry;
mod error;
mod layer;

pub use entry::{DEFAULT_SEVERITY, DEFAULT_TYPE};
pub use error::MozLogError;
pub use layer::MozLogLayer;

use crate::config::MozLogConfig;
use serde_json::{json, Value};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

/// Writes MozLog lines to a sink.
#[derive(Debug)]
pub struct MozLogger<W> {
    config: MozLogConfig,
    sink: Mutex<W>,
}

impl MozLogger<File> {
    /// Opens the configured log file for appending, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`MozLogError::Open`] if the file can't be opened.
    pub fn open(config: MozLogConfig) -> Result<Self, MozLogError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.path)
            .map_err(|e| MozLogError::Open {
                path: config.path.display().to_string(),
                source: e,
            })?;
        Ok(Self::new(config, file))
    }
}

impl<W: Write> MozLogger<W> {
    /// Creates a logger writing to `sink`.
    pub fn new(config: MozLogConfig, sink: W) -> Self {
        Self {
            config,
            sink: Mutex::new(sink),
        }
    }

    /// Returns the logger's configuration.
    pub fn config(&self) -> &MozLogConfig {
        &self.config
    }

    /// Logs `message` with the given type and extra detail, returning the
    /// message so it can be reused, e.g. in an error.
    ///
    /// `detail` must be a JSON object (or `null`); its keys override the
    /// schema defaults, and its `Fields` object merges with the default
    /// fields. `log_type` and `message` always win.
    ///
    /// # Errors
    ///
    /// Returns [`MozLogError`] if the detail is invalid or the line can't be
    /// written.
    pub fn log<'m>(
        &self,
        message: &'m str,
        log_type: &str,
        detail: Value,
    ) -> Result<&'m str, MozLogError> {
        let line = self.format_line(message, log_type, detail)?;
        self.write_line(&line)?;
        Ok(message)
    }

    /// Builds a MozLog line without writing it.
    ///
    /// # Errors
    ///
    /// Returns [`MozLogError`] if the detail is not an object or
    /// serialization fails.
    pub fn format_line(
        &self,
        message: &str,
        log_type: &str,
        detail: Value,
    ) -> Result<String, MozLogError> {
        let detail = match detail {
            Value::Null => Value::Object(Default::default()),
            Value::Object(_) => detail,
            other => return Err(MozLogError::InvalidDetail(other.to_string())),
        };

        let mut entry = entry::default_entry(&self.config, unix_timestamp(), std::process::id());
        entry::merge(&mut entry, detail);
        entry::merge(
            &mut entry,
            json!({ "Type": log_type, "Fields": { "msg": message } }),
        );

        Ok(serde_json::to_string(&entry)?)
    }

    /// Appends one line to the sink and flushes it.
    pub(crate) fn write_line(&self, line: &str) -> Result<(), MozLogError> {
        let mut sink = self.sink.lock().map_err(|_| MozLogError::Poisoned)?;
        writeln!(sink, "{line}")?;
        sink.flush()?;
        Ok(())
    }
}

/// Seconds since the Unix epoch.
pub(crate) fn unix_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn logger() -> MozLogger<Vec<u8>> {
        MozLogger::new(MozLogConfig::default(), Vec::new())
    }

    fn written_lines(logger: MozLogger<Vec<u8>>) -> Vec<Value> {
        let bytes = logger.sink.into_inner().unwrap();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn log_returns_message_and_writes_line() {
        let logger = logger();
        let returned = logger
            .log("Bug lookup failed", "bugzilla", Value::Null)
            .unwrap();
        assert_eq!(returned, "Bug lookup failed");

        let lines = written_lines(logger);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["Type"], "bugzilla");
        assert_eq!(lines[0]["Fields"]["msg"], "Bug lookup failed");
        assert_eq!(lines[0]["Fields"]["method"], "GET");
        assert_eq!(lines[0]["Severity"], "3");
        assert_eq!(lines[0]["Pid"], std::process::id().to_string());
        assert!(lines[0]["Timestamp"].as_u64().unwrap() > 0);
    }

    #[test]
    fn detail_overrides_defaults_but_not_message() {
        let logger = logger();
        logger
            .log(
                "hello",
                DEFAULT_TYPE,
                json!({
                    "Severity": "6",
                    "Fields": { "uid": "PHID-USER-1", "msg": "ignored", "path": "/D123" }
                }),
            )
            .unwrap();

        let lines = written_lines(logger);
        let entry = &lines[0];
        assert_eq!(entry["Type"], "Unspecified");
        assert_eq!(entry["Severity"], "6");
        assert_eq!(entry["Fields"]["uid"], "PHID-USER-1");
        assert_eq!(entry["Fields"]["path"], "/D123");
        assert_eq!(entry["Fields"]["msg"], "hello");
        assert_eq!(entry["Fields"]["errno"], "0");
    }

    #[test]
    fn rejects_non_object_detail() {
        let logger = logger();
        let result = logger.log("hello", "test", json!(["not", "an", "object"]));
        assert!(matches!(result, Err(MozLogError::InvalidDetail(_))));
        assert!(written_lines(logger).is_empty());
    }

    #[test]
    fn one_line_per_call() {
        let logger = logger();
        logger.log("first", "test", Value::Null).unwrap();
        logger.log("second", "test", Value::Null).unwrap();

        let lines = written_lines(logger);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["Fields"]["msg"], "second");
    }

    #[test]
    fn open_appends_to_file() {
        let temp = TempDir::new().unwrap();
        let config = MozLogConfig {
            path: temp.path().join("moz_log"),
            ..Default::default()
        };
        std::fs::write(&config.path, "existing\n").unwrap();

        let logger = MozLogger::open(config.clone()).unwrap();
        logger.log("appended", "test", Value::Null).unwrap();

        let content = std::fs::read_to_string(&config.path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "existing");
        assert!(lines[1].contains("\"msg\":\"appended\""));
    }

    #[test]
    fn open_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let config = MozLogConfig {
            path: temp.path().join("missing/moz_log"),
            ..Default::default()
        };
        assert!(matches!(
            MozLogger::open(config),
            Err(MozLogError::Open { .. })
        ));
    }
}
