//! File logging for the terminal UI.
//!
//! A full-screen TUI owns stdout and stderr, so tracing output goes only to a
//! file under the platform cache directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const APP_NAME: &str = "fantasy-fighters";
const LOG_FILE: &str = "roster.log";

/// Directory logs are written to.
///
/// `ROSTER_LOG_DIR` wins; otherwise the platform cache directory:
/// - macOS: `~/Library/Caches/fantasy-fighters/logs`
/// - Linux: `~/.cache/fantasy-fighters/logs` (or `$XDG_CACHE_HOME/...`)
/// - Windows: `%LOCALAPPDATA%\fantasy-fighters\cache\logs`
/// - Fallback: `/tmp/fantasy-fighters/logs`
pub fn log_dir() -> PathBuf {
    resolve_log_dir(std::env::var_os("ROSTER_LOG_DIR").map(PathBuf::from))
}

fn resolve_log_dir(override_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir.filter(|dir| !dir.as_os_str().is_empty()) {
        return dir;
    }

    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| Path::new("/tmp").join(APP_NAME))
        .join("logs")
}

/// Install the global subscriber writing to `{log_dir}/roster.log`.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Keep the returned
/// guard alive for the whole run; dropping it flushes and stops the writer.
pub fn setup_logging() -> Result<WorkerGuard> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    // File layer only: the TUI owns the terminal.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Log file: {}", log_dir.join(LOG_FILE).display());
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins() {
        let dir = resolve_log_dir(Some(PathBuf::from("/var/log/roster")));
        assert_eq!(dir, PathBuf::from("/var/log/roster"));
    }

    #[test]
    fn default_ends_in_app_logs_dir() {
        let dir = resolve_log_dir(Some(PathBuf::new()));
        assert!(dir.ends_with("logs"));
        assert!(dir.to_string_lossy().contains(APP_NAME));
    }
}
