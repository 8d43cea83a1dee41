//! Leveled output sinks
//!
//! A logger owns two sinks of the same type: one for the informational stream
//! and one for the diagnostic stream.

use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use super::level::Level;

/// Which of the two output streams a sink feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    /// Debug and Info records (stdout by default)
    Info,
    /// Warn and Error records (stderr by default)
    Diagnostic,
}

impl Stream {
    /// Stream that records at `level` are routed to
    pub fn for_level(level: Level) -> Self {
        if level.is_diagnostic() {
            Stream::Diagnostic
        } else {
            Stream::Info
        }
    }
}

/// One destination writer plus the bookkeeping for records it could not take
pub(crate) struct Sink {
    stream: Stream,
    writer: Mutex<Box<dyn Write + Send>>,
    dropped: AtomicU64,
}

impl Sink {
    pub(crate) fn new(stream: Stream, writer: impl Write + Send + 'static) -> Self {
        Self {
            stream,
            writer: Mutex::new(Box::new(writer)),
            dropped: AtomicU64::new(0),
        }
    }

    /// Check if records at `level` belong to this sink
    pub(crate) fn accepts(&self, level: Level) -> bool {
        Stream::for_level(level) == self.stream
    }

    /// Write `text` as one contiguous chunk and flush it
    ///
    /// On failure the text is dropped and counted; returns whether it was written.
    pub(crate) fn write_text(&self, text: &str) -> bool {
        let written = match self.writer.lock() {
            Ok(mut writer) => writer
                .write_all(text.as_bytes())
                .and_then(|()| writer.flush())
                .is_ok(),
            Err(_) => false,
        };

        if !written {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
        written
    }

    /// Number of writes that failed since creation
    pub(crate) fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("stream", &self.stream)
            .field("dropped", &self.dropped())
            .finish_non_exhaustive()
    }
}
