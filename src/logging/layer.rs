//! tracing integration
//!
//! Routes events from the `tracing` macros through a [`Logger`], so code that
//! already uses `tracing::info!` and friends gets the same format and stream split.

use std::fmt;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::config::LoggerConfig;
use crate::error::{LoggerError, LoggerResult};

use super::level::Level;
use super::logger::Logger;
use super::record::{Attrs, Caller, LogRecord};

/// tracing-subscriber layer that renders events through a [`Logger`]
#[derive(Debug, Clone)]
pub struct LoggerLayer {
    logger: Arc<Logger>,
}

impl LoggerLayer {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }
}

impl<S: Subscriber> Layer<S> for LoggerLayer {
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.logger.enabled(Level::from(*metadata.level()))
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Level::from(*metadata.level());
        if !self.logger.enabled(level) {
            return;
        }

        let mut fields = FieldCollector::default();
        event.record(&mut fields);

        let caller = if level.is_diagnostic() {
            metadata
                .file()
                .zip(metadata.line())
                .map(|(file, line)| Caller::new(file, line))
        } else {
            None
        };

        let record = LogRecord::new(level, fields.message)
            .with_attrs(fields.attrs)
            .with_caller(caller);
        self.logger.log_record(&record);
    }
}

/// Collects the `message` field and the remaining fields in declaration order
#[derive(Default)]
struct FieldCollector {
    message: String,
    attrs: Attrs,
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.attrs.push(field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.attrs.push(field.name(), format!("{:?}", value));
        }
    }
}

/// Install a stdout/stderr logger as the global `tracing` subscriber
///
/// Returns the logger so callers can also use it directly. Fails if a global
/// subscriber is already set.
pub fn init_global(config: LoggerConfig) -> LoggerResult<Arc<Logger>> {
    let logger = Arc::new(Logger::new(config));

    tracing_subscriber::registry()
        .with(LoggerLayer::new(Arc::clone(&logger)))
        .try_init()
        .map_err(|e| LoggerError::Init(e.to_string()))?;

    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::buffer::CaptureBuffer;

    fn bridged(min_level: Level) -> (impl Subscriber + Send + Sync, CaptureBuffer, CaptureBuffer) {
        let stdout = CaptureBuffer::new();
        let stderr = CaptureBuffer::new();
        let logger = Arc::new(Logger::with_writers(
            LoggerConfig::new(min_level),
            stdout.clone(),
            stderr.clone(),
        ));
        let subscriber = tracing_subscriber::registry().with(LoggerLayer::new(logger));
        (subscriber, stdout, stderr)
    }

    /// Drop the timestamp from a rendered line
    fn body(line: &str) -> &str {
        &line[20..]
    }

    #[test]
    fn test_layer_routes_by_level() {
        let (subscriber, stdout, stderr) = bridged(Level::Debug);

        let mut warn_line = 0;
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("debug event");
            tracing::info!("info event");
            warn_line = line!() + 1;
            tracing::warn!("warn event");
        });

        let out = stdout.lines();
        assert_eq!(out.len(), 2);
        assert_eq!(body(&out[0]), "DBG debug event");
        assert_eq!(body(&out[1]), "INF info event");

        let err = stderr.lines();
        assert_eq!(err.len(), 1);
        assert_eq!(body(&err[0]), format!("WRN layer.rs:{} warn event", warn_line));
    }

    #[test]
    fn test_layer_keeps_field_order() {
        let (subscriber, stdout, _) = bridged(Level::Info);

        tracing::subscriber::with_default(subscriber, || {
            let ip = "192.168.1.1";
            tracing::info!(username = "john_doe", ip, attempts = 2, "User logged in");
        });

        let out = stdout.lines();
        assert_eq!(out.len(), 1);
        assert_eq!(
            body(&out[0]),
            "INF User logged in username=john_doe ip=192.168.1.1 attempts=2"
        );
    }

    #[test]
    fn test_layer_formats_message_arguments() {
        let (subscriber, _, stderr) = bridged(Level::Info);

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!(reason = %"connection refused", "retry {} of {}", 3, 5);
        });

        let err = stderr.lines();
        assert_eq!(err.len(), 1);
        assert!(body(&err[0]).starts_with("ERR layer.rs:"));
        assert!(body(&err[0]).ends_with(" retry 3 of 5 reason=\"connection refused\""));
    }

    #[test]
    fn test_layer_respects_min_level() {
        let (subscriber, stdout, stderr) = bridged(Level::Error);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("hidden");
            tracing::warn!("hidden");
        });

        assert!(stdout.is_empty());
        assert!(stderr.is_empty());
    }
}
