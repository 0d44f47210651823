//! File logging
//!
//! The terminal belongs to the UI, so log output goes to a daily-rolling
//! file only. `RUST_LOG` takes precedence over the configured level.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ConfigError, Settings};

/// Log file prefix inside the log directory
pub const LOG_FILE: &str = "agentdeck.log";

/// Build the filter: `RUST_LOG`, then the configured level, then `info`
pub fn build_filter(rust_log: Option<&str>, configured: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|s| !s.is_empty())
        .or(configured)
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `<log dir>/agentdeck.log.<date>`
///
/// Returns the writer guard, which must be held until exit so buffered
/// lines are flushed. Returns `None` when the log directory cannot be
/// created; the application then runs without logging.
pub fn init(settings: &Settings, home: &Path) -> Option<WorkerGuard> {
    let dir = settings.log_dir(home);
    if std::fs::create_dir_all(&dir).is_err() {
        return None;
    }

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(rust_log.as_deref(), settings.logging.level.as_deref());

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer);

    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        return None;
    }

    tracing::info!(dir = %dir.display(), "logging initialized");
    Some(guard)
}

/// Record how the config file at `path` was loaded
pub fn log_config_outcome(path: &Path, error: Option<&ConfigError>) {
    match error {
        None => tracing::info!(path = %path.display(), "config loaded"),
        Some(err) => tracing::warn!(path = %path.display(), error = %err, "using default settings"),
    }
}
