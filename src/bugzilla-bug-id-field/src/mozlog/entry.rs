//! MozLog entry schema.

use crate::config::MozLogConfig;
use serde_json::{json, Map, Value};

/// `Severity` used by [`super::MozLogger::log`] (syslog "error").
pub const DEFAULT_SEVERITY: &str = "3";

/// `Type` used when the caller doesn't give one.
pub const DEFAULT_TYPE: &str = "Unspecified";

/// Builds an entry holding every default of the schema.
///
/// `Fields.msg` starts as a placeholder that callers are expected to
/// overwrite.
pub(crate) fn default_entry(config: &MozLogConfig, timestamp: u64, pid: u32) -> Value {
    json!({
        "Timestamp": timestamp,
        "Type": "",
        "Logger": config.logger,
        "Hostname": config.hostname,
        "EnvVersion": config.env_version,
        "Severity": DEFAULT_SEVERITY,
        "Pid": pid.to_string(),
        "Fields": {
            "agent": "",
            "errno": "0",
            "method": "GET",
            "msg": "Message not provided",
            "path": "",
            "t": "",
            "uid": "",
        },
    })
}

/// Merges `overlay` into `base`.
///
/// Objects merge key by key, recursively; any other overlay value replaces
/// the base value.
pub(crate) fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => merge_maps(base, overlay),
        (base, overlay) => *base = overlay,
    }
}

fn merge_maps(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        match base.get_mut(&key) {
            Some(existing) => merge(existing, value),
            None => {
                base.insert(key, value);
            }
        }
    }
}
