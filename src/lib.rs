//! splitlog - Two-stream leveled logging
//!
//! Debug and Info records go to stdout, Warn and Error records go to stderr
//! prefixed with the caller's `file:line`. Every record is one line:
//!
//! ```text
//! 2024/03/09 07:05:01 INF User logged in username=john_doe ip=192.168.1.1
//! 2024/03/09 07:05:01 ERR main.rs:42 Failed to connect error="connection refused"
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use splitlog::{Logger, LoggerConfig};
//!
//! let logger = Logger::new(LoggerConfig::from_env());
//! logger.info("User logged in", &[("username", &"john_doe")]);
//! splitlog::error!(logger, "Failed to connect", "error" => "connection refused");
//! ```

pub mod config;
pub mod error;
pub mod logging;
mod macros;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use logging::{
    capture_stack, init_global, Attr, Attrs, CaptureBuffer, Caller, Level, LogRecord, Logger,
    LoggerLayer, Stream,
};
