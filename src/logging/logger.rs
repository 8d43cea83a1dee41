//! Two-stream leveled logger
//!
//! Debug and Info records go to the informational stream, Warn and Error to the
//! diagnostic stream. Warn and Error records are prefixed with the caller's
//! `file:line`.

use std::fmt;
use std::io::{self, Write};

use crate::config::LoggerConfig;

use super::buffer::CaptureBuffer;
use super::level::Level;
use super::record::{Attr, Attrs, Caller, LogRecord};
use super::sink::{Sink, Stream};
use super::stack;

/// Leveled logger writing to an informational and a diagnostic stream
///
/// All methods take `&self` and are safe to call from many threads at once;
/// every record reaches its destination as a single write.
pub struct Logger {
    info: Sink,
    diag: Sink,
    min_level: Level,
}

impl Logger {
    /// Create a logger writing to the process stdout and stderr
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_writers(config, io::stdout(), io::stderr())
    }

    /// Create a stdout/stderr logger configured from the `LOG_LEVEL` environment variable
    pub fn from_env() -> Self {
        Self::new(LoggerConfig::from_env())
    }

    /// Create a logger with custom destinations for each stream
    pub fn with_writers<O, E>(config: LoggerConfig, stdout: O, stderr: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            info: Sink::new(Stream::Info, stdout),
            diag: Sink::new(Stream::Diagnostic, stderr),
            min_level: config.min_level,
        }
    }

    /// Create a logger that captures both streams in memory
    ///
    /// Behaves exactly like [`Logger::from_env`] apart from the destinations.
    pub fn with_buffers(stdout: CaptureBuffer, stderr: CaptureBuffer) -> Self {
        Self::with_writers(LoggerConfig::from_env(), stdout, stderr)
    }

    /// Minimum level a record needs to be emitted
    pub fn min_level(&self) -> Level {
        self.min_level
    }

    /// Check if records at `level` would be emitted
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /// Log a debug message to the informational stream
    #[track_caller]
    pub fn debug(&self, message: &str, attrs: &[Attr<'_>]) {
        self.log(Level::Debug, message, attrs);
    }

    /// Log an informational message to the informational stream
    #[track_caller]
    pub fn info(&self, message: &str, attrs: &[Attr<'_>]) {
        self.log(Level::Info, message, attrs);
    }

    /// Log a warning, prefixed with the caller location, to the diagnostic stream
    #[track_caller]
    pub fn warn(&self, message: &str, attrs: &[Attr<'_>]) {
        self.log(Level::Warn, message, attrs);
    }

    /// Log an error, prefixed with the caller location, to the diagnostic stream
    #[track_caller]
    pub fn error(&self, message: &str, attrs: &[Attr<'_>]) {
        self.log(Level::Error, message, attrs);
    }

    /// Log a warning like [`Logger::warn`], then dump the calling thread's
    /// stack to the informational stream
    #[track_caller]
    pub fn warn_with_stack(&self, message: &str, attrs: &[Attr<'_>]) {
        if !self.enabled(Level::Warn) {
            return;
        }

        let dump = stack::capture();
        let record = LogRecord::new(Level::Warn, message)
            .with_attrs(attrs)
            .with_caller(Some(Caller::here()));
        self.log_record(&record);
        self.info.write_text(&dump);
    }

    /// Log a message at an arbitrary level
    ///
    /// Warn and Error records carry the location of the code calling this method.
    #[track_caller]
    pub fn log(&self, level: Level, message: &str, attrs: &[Attr<'_>]) {
        if !self.enabled(level) {
            return;
        }

        let caller = if level.is_diagnostic() {
            Some(Caller::here())
        } else {
            None
        };
        let record = LogRecord::new(level, message)
            .with_attrs(Attrs::from_pairs(attrs))
            .with_caller(caller);
        self.log_record(&record);
    }

    /// Emit an already-built record to the sink for its level
    ///
    /// Returns whether the record was written; a record below the minimum
    /// level or one whose write failed returns false. A caller attached to a
    /// Debug or Info record is not rendered.
    pub fn log_record(&self, record: &LogRecord) -> bool {
        if !self.enabled(record.level) {
            return false;
        }
        self.sink_for(record.level).write_text(&record.render())
    }

    /// Number of records dropped because a destination could not be written
    pub fn dropped_records(&self) -> u64 {
        self.info.dropped() + self.diag.dropped()
    }

    fn sink_for(&self, level: Level) -> &Sink {
        if self.info.accepts(level) {
            &self.info
        } else {
            &self.diag
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::from_env()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field("info", &self.info)
            .field("diag", &self.diag)
            .finish()
    }
}
