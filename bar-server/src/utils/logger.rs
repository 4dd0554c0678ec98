//! Logging Infrastructure
//!
//! Structured logging with `tracing`, optionally written to a daily rolling file.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional file output
///
/// `RUST_LOG` wins over `log_level` when set. A second call keeps the
/// subscriber that is already installed and says so on stderr.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},sqlx=warn")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "bar-server");
            let result = subscriber
                .with_ansi(false)
                .with_writer(file_appender)
                .try_init();
            if let Err(e) = result {
                eprintln!("Logger already initialized, not switching to {dir}: {e}");
            }
            return;
        }
        eprintln!("LOG_DIR {dir} is not a directory, logging to stdout");
    }

    if let Err(e) = subscriber.try_init() {
        eprintln!("Logger already initialized, keeping the existing subscriber: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_repeated_init_keeps_running() {
        let dir = TempDir::new().unwrap();
        let dir_str = dir.path().to_str().unwrap();

        init_logger_with_file(Some("debug"), None);
        init_logger_with_file(Some("info"), Some(dir_str));
        init_logger_with_file(None, Some("/nonexistent/bar-logs"));

        tracing::info!("still logging after repeated init");
    }
}
