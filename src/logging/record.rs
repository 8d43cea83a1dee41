//! Log records and their single-line text rendering
//!
//! A record renders as
//! `<timestamp> <LVL> [<file>:<line> ]<message>[ key=value]*` followed by a newline.

use std::fmt::{self, Write as _};
use std::panic::Location;

use chrono::{DateTime, Local};

use super::level::Level;

/// Timestamp layout of every record, e.g. `2024/03/09 07:05:01`
pub const TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Key used when a flat attribute list ends with a value that has no partner
pub const BAD_KEY: &str = "!BADKEY";

/// A borrowed key/value attribute as passed to the logging methods
pub type Attr<'a> = (&'a str, &'a dyn fmt::Display);

/// Source location of a logging call, reduced to the base file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    file: &'static str,
    line: u32,
}

impl Caller {
    /// Create a caller from a source path and line, stripping any directories
    pub fn new(path: &'static str, line: u32) -> Self {
        Self {
            file: base_name(path),
            line,
        }
    }

    /// Location of the code that called into the current `#[track_caller]` chain
    #[track_caller]
    pub fn here() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Strip directories from a path, accepting both separator styles
fn base_name(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}

/// Ordered list of rendered attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs(Vec<(String, String)>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute, rendering its value immediately
    pub fn push(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        self.0.push((key.into(), value.to_string()));
    }

    /// Build from borrowed key/value pairs, preserving order
    pub fn from_pairs(attrs: &[Attr<'_>]) -> Self {
        let mut out = Self(Vec::with_capacity(attrs.len()));
        for (key, value) in attrs {
            out.push(*key, value);
        }
        out
    }

    /// Build from a flat `key, value, key, value, ...` sequence
    ///
    /// A trailing element without a partner is kept under [`BAD_KEY`] instead
    /// of being dropped.
    pub fn from_flat(items: &[&dyn fmt::Display]) -> Self {
        let mut out = Self(Vec::with_capacity((items.len() + 1) / 2));
        let mut chunks = items.chunks_exact(2);
        for pair in &mut chunks {
            out.push(pair[0].to_string(), pair[1]);
        }
        if let [dangling] = chunks.remainder() {
            out.push(BAD_KEY, dangling);
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[Attr<'_>]> for Attrs {
    fn from(attrs: &[Attr<'_>]) -> Self {
        Self::from_pairs(attrs)
    }
}

/// A single log record
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Severity
    pub level: Level,
    /// When the record was created
    pub timestamp: DateTime<Local>,
    /// Log message
    pub message: String,
    /// Attributes in call order
    pub attrs: Attrs,
    /// Call site, present for Warn and Error when known
    pub caller: Option<Caller>,
}

impl LogRecord {
    /// Create a record stamped with the current local time
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: Local::now(),
            message: message.into(),
            attrs: Attrs::new(),
            caller: None,
        }
    }

    pub fn with_attrs(mut self, attrs: impl Into<Attrs>) -> Self {
        self.attrs = attrs.into();
        self
    }

    pub fn with_caller(mut self, caller: Option<Caller>) -> Self {
        self.caller = caller;
        self
    }

    /// Render the record as one newline-terminated line
    ///
    /// The caller prefix is only written for Warn and Error records.
    pub fn render(&self) -> String {
        let mut line = String::with_capacity(64 + self.message.len());

        let _ = write!(line, "{}", self.timestamp.format(TIME_FORMAT));
        line.push(' ');
        line.push_str(self.level.code());
        line.push(' ');
        if let Some(caller) = self.caller.filter(|_| self.level.is_diagnostic()) {
            let _ = write!(line, "{} ", caller);
        }
        line.push_str(&self.message);

        for (key, value) in self.attrs.iter() {
            line.push(' ');
            push_quoted(&mut line, key);
            line.push('=');
            push_quoted(&mut line, value);
        }

        line.push('\n');
        line
    }
}

fn needs_quoting(s: &str) -> bool {
    s.is_empty()
        || s
            .chars()
            .any(|c| c.is_whitespace() || c == '"' || c == '=' || c.is_control())
}

fn push_quoted(buf: &mut String, s: &str) {
    if needs_quoting(s) {
        let _ = write!(buf, "{:?}", s);
    } else {
        buf.push_str(s);
    }
}
