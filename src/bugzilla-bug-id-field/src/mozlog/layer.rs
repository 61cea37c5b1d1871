//! `tracing` layer emitting MozLog lines.

use super::{entry, unix_timestamp, MozLogger};
use serde_json::{json, Map, Value};
use std::fmt;
use std::io::Write;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// Forwards `tracing` events to a [`MozLogger`].
///
/// The event target becomes `Type`, the level becomes a syslog `Severity`,
/// and event fields go into `Fields` with `message` mapped to `msg`.
pub struct MozLogLayer<W> {
    logger: Arc<MozLogger<W>>,
}

impl<W> MozLogLayer<W> {
    /// Creates a layer writing through `logger`.
    pub fn new(logger: Arc<MozLogger<W>>) -> Self {
        Self { logger }
    }
}

/// Maps a `tracing` level to a syslog severity.
fn severity(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "3",
        Level::WARN => "4",
        Level::INFO => "6",
        _ => "7",
    }
}

/// Collects event fields as JSON strings.
#[derive(Default)]
struct FieldVisitor {
    fields: Map<String, Value>,
}

impl FieldVisitor {
    fn insert(&mut self, field: &Field, value: String) {
        let name = match field.name() {
            "message" => "msg",
            name => name,
        };
        self.fields.insert(name.to_string(), Value::String(value));
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.to_string());
    }
}

impl<S, W> Layer<S> for MozLogLayer<W>
where
    S: Subscriber,
    W: Write + Send + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let mut line = entry::default_entry(
            self.logger.config(),
            unix_timestamp(),
            std::process::id(),
        );
        entry::merge(
            &mut line,
            json!({
                "Type": metadata.target(),
                "Severity": severity(metadata.level()),
                "Fields": Value::Object(visitor.fields),
            }),
        );

        // Logging from inside a layer would recurse, so failures go to stderr.
        let result = serde_json::to_string(&line)
            .map_err(super::MozLogError::from)
            .and_then(|line| self.logger.write_line(&line));
        if let Err(e) = result {
            eprintln!("mozlog: {e}");
        }
    }
}
