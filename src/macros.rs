//! Call-site macros
//!
//! `splitlog::info!(logger, "User logged in", "username" => name)` is shorthand
//! for `logger.info("User logged in", &[("username", &name)])`. The caller
//! location recorded for Warn and Error is the macro invocation.

/// Build a `&[Attr]` slice from `key => value` pairs
#[macro_export]
macro_rules! attrs {
    () => {
        &[] as &[$crate::Attr<'_>]
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        &[$(($key, &$value as &dyn ::std::fmt::Display)),+]
    };
}

/// Log at Debug level: `debug!(logger, "message", "key" => value, ...)`
#[macro_export]
macro_rules! debug {
    ($logger:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.debug($msg, $crate::attrs![$($key => $value),*])
    };
}

/// Log at Info level: `info!(logger, "message", "key" => value, ...)`
#[macro_export]
macro_rules! info {
    ($logger:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.info($msg, $crate::attrs![$($key => $value),*])
    };
}

/// Log at Warn level: `warn!(logger, "message", "key" => value, ...)`
#[macro_export]
macro_rules! warn {
    ($logger:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.warn($msg, $crate::attrs![$($key => $value),*])
    };
}

/// Log at Error level: `error!(logger, "message", "key" => value, ...)`
#[macro_export]
macro_rules! error {
    ($logger:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.error($msg, $crate::attrs![$($key => $value),*])
    };
}

/// Log a warning followed by a stack dump
#[macro_export]
macro_rules! warn_with_stack {
    ($logger:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.warn_with_stack($msg, $crate::attrs![$($key => $value),*])
    };
}

#[cfg(test)]
mod tests {
    use crate::{CaptureBuffer, Level, Logger, LoggerConfig};

    fn capture_logger() -> (Logger, CaptureBuffer, CaptureBuffer) {
        let stdout = CaptureBuffer::new();
        let stderr = CaptureBuffer::new();
        let logger = Logger::with_writers(
            LoggerConfig::new(Level::Debug),
            stdout.clone(),
            stderr.clone(),
        );
        (logger, stdout, stderr)
    }

    #[test]
    fn test_level_macros() {
        let (logger, stdout, stderr) = capture_logger();
        let user = String::from("john_doe");

        crate::debug!(logger, "starting");
        crate::info!(logger, "User logged in", "username" => user, "ip" => "192.168.1.1");
        let line = line!() + 1;
        crate::error!(logger, "Failed", "error" => "connection refused", "code" => 61,);

        let out = stdout.lines();
        assert!(out[0].ends_with(" DBG starting"));
        assert!(out[1].ends_with(" INF User logged in username=john_doe ip=192.168.1.1"));

        let err = stderr.contents();
        assert!(err.ends_with(&format!(
            " ERR macros.rs:{} Failed error=\"connection refused\" code=61\n",
            line
        )));
    }

    #[test]
    fn test_warn_macros_record_invocation_site() {
        let (logger, stdout, stderr) = capture_logger();

        let line = line!() + 1;
        crate::warn!(logger, "careful", "n" => 1);
        crate::warn_with_stack!(logger, "with stack");

        let err = stderr.lines();
        assert_eq!(err.len(), 2);
        assert!(err[0].ends_with(&format!(" WRN macros.rs:{} careful n=1", line)));
        assert!(err[1].ends_with(&format!(" WRN macros.rs:{} with stack", line + 1)));
        assert!(stdout.contents().contains("[running]:"));
    }

    #[test]
    fn test_attrs_macro() {
        let empty = crate::attrs![];
        assert!(empty.is_empty());

        let pairs = crate::attrs!["a" => 1, "b" => "two"];
        let attrs = crate::Attrs::from_pairs(pairs);
        let rendered: Vec<(&str, &str)> = attrs.iter().collect();
        assert_eq!(rendered, vec![("a", "1"), ("b", "two")]);
    }
}
