//! Logging Infrastructure
//!
//! Structured logging for development (pretty, stdout) and production
//! (optional JSON, optional daily rolling files).

use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Initialize the logger with the default level
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger
///
/// `RUST_LOG` wins over `log_level` when set. `log_dir` is created if
/// missing; when that fails, logs go to stdout and a warning is emitted.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let mut dir_error = None;
    let file_appender = log_dir
        .and_then(|dir| match prepare_log_dir(dir) {
            Ok(path) => Some(path),
            Err(e) => {
                dir_error = Some((dir.to_string(), e));
                None
            }
        })
        .map(|path| tracing_appender::rolling::daily(path, "web-server"));

    let result = match (json, file_appender) {
        (true, Some(writer)) => builder.json().with_writer(writer).try_init(),
        (true, None) => builder.json().try_init(),
        (false, Some(writer)) => builder.with_ansi(false).with_writer(writer).try_init(),
        (false, None) => builder.try_init(),
    };

    if let Err(e) = result {
        eprintln!("Logger already initialized: {e}");
    }
    if let Some((dir, e)) = dir_error {
        tracing::warn!(log_dir = %dir, error = %e, "Log directory unavailable, logging to stdout");
    }
}

/// Create the log directory if needed
fn prepare_log_dir(dir: &str) -> std::io::Result<PathBuf> {
    let path = Path::new(dir);
    std::fs::create_dir_all(path)?;
    Ok(path.to_path_buf())
}
