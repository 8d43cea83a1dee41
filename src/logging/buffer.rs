//! In-memory capture buffer
//!
//! Provides a thread-safe, cloneable writer that keeps everything written to it,
//! so tests can read back exactly what a logger emitted.

use std::io::{self, Write};
use std::sync::{Arc, RwLock};

/// Thread-safe byte buffer usable as a logger destination
///
/// Clones share the same storage: hand one clone to the logger and keep
/// another to inspect the output.
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    bytes: Arc<RwLock<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Create an empty capture buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Get everything written so far as a string (lossy for invalid UTF-8)
    pub fn contents(&self) -> String {
        self.bytes
            .read()
            .map(|b| String::from_utf8_lossy(&b).into_owned())
            .unwrap_or_default()
    }

    /// Get the written output split into lines, without line terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Get the number of bytes written
    pub fn len(&self) -> usize {
        self.bytes.read().map(|b| b.len()).unwrap_or(0)
    }

    /// Check if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard everything written so far
    pub fn clear(&self) {
        if let Ok(mut bytes) = self.bytes.write() {
            bytes.clear();
        }
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.bytes.write() {
            Ok(mut bytes) => {
                bytes.extend_from_slice(buf);
                Ok(buf.len())
            }
            Err(_) => Err(io::Error::new(
                io::ErrorKind::Other,
                "capture buffer lock poisoned",
            )),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
