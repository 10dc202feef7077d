//! Logging using simplelog
//!
//! Logs go to stderr so stdout stays clean for the JSON output. With
//! `log_to_file` they go to a timestamped file in the cache directory
//! (~/.cache/gh-diff/ on Linux) instead.

use anyhow::{Context, Result};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

/// Get the log file path in the cache directory
fn log_file_path() -> Result<PathBuf> {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("debug-{}.log", timestamp);
    Ok(gh_diff_config::cache_dir()?.join(filename))
}

/// Map `-v` occurrences to a level, falling back to `RUST_LOG`, then `warn`.
fn level_filter(verbosity: u8, rust_log: Option<&str>) -> LevelFilter {
    match verbosity {
        0 => rust_log
            .map(|v| match v.to_lowercase().as_str() {
                "off" => LevelFilter::Off,
                "error" => LevelFilter::Error,
                "warn" => LevelFilter::Warn,
                "info" => LevelFilter::Info,
                "debug" => LevelFilter::Debug,
                "trace" => LevelFilter::Trace,
                _ => LevelFilter::Warn,
            })
            .unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize logging
///
/// Returns the path to the log file when logging to a file.
pub fn init(verbosity: u8, to_file: bool) -> Result<Option<PathBuf>> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let level = level_filter(verbosity, rust_log.as_deref());

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    if to_file {
        let log_file = log_file_path()?;
        let file = File::create(&log_file)
            .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
        WriteLogger::init(level, config, file).context("Failed to initialize logger")?;
        return Ok(Some(log_file));
    }

    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
        .context("Failed to initialize logger")?;
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(level_filter(1, None), LevelFilter::Info);
        assert_eq!(level_filter(2, Some("error")), LevelFilter::Debug);
        assert_eq!(level_filter(5, None), LevelFilter::Trace);
    }

    #[test]
    fn test_level_from_rust_log() {
        assert_eq!(level_filter(0, None), LevelFilter::Warn);
        assert_eq!(level_filter(0, Some("DEBUG")), LevelFilter::Debug);
        assert_eq!(level_filter(0, Some("off")), LevelFilter::Off);
        assert_eq!(level_filter(0, Some("gh_diff=trace")), LevelFilter::Warn);
    }
}
