//! Logging core for splitlog
//!
//! Provides the two-stream [`Logger`], its records and levels, an in-memory
//! capture buffer for tests, and a bridge from the `tracing` macros.

mod buffer;
mod layer;
mod level;
mod logger;
mod record;
mod sink;
mod stack;

pub use buffer::CaptureBuffer;
pub use layer::{init_global, LoggerLayer};
pub use level::Level;
pub use logger::Logger;
pub use record::{Attr, Attrs, Caller, LogRecord, BAD_KEY, TIME_FORMAT};
pub use sink::Stream;
pub use stack::capture as capture_stack;
