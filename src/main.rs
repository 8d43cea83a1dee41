use std::path::PathBuf;

use anyhow::{Context, Result};

use splitlog::LoggerConfig;

fn main() -> Result<()> {
    // Optional TOML config path, otherwise LOG_LEVEL decides
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => LoggerConfig::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => LoggerConfig::from_env(),
    };

    let logger = splitlog::init_global(config).context("Failed to install logger")?;

    println!("\nLogging messages...");
    logger.info("This is an informational message", &[]);
    logger.warn("This is a warning message", &[]);
    logger.error("This is an error message", &[("code", &500)]);
    splitlog::info!(logger, "User logged in", "username" => "john_doe", "ip" => "192.168.1.1");
    splitlog::warn_with_stack!(logger, "This is a warning message with stack trace");

    // Events from the tracing macros share the same format and streams
    tracing::info!(min_level = %logger.min_level(), "Routed through tracing");
    tracing::error!(reason = "connection refused", "Failed to connect to database");

    if logger.dropped_records() > 0 {
        anyhow::bail!("{} log records could not be written", logger.dropped_records());
    }
    Ok(())
}
