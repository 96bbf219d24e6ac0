//! Tracing subscriber setup.

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::dirs;

const LOG_FILE: &str = "maze.log";

/// Logs to stderr, and to a file in the cache directory when `to_file` is set.
///
/// Verbosity follows `RUST_LOG`, defaulting to `info`.
pub fn setup_logging(to_file: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let file_layer = if to_file {
        let log_dir = dirs::log_dir();
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
        // Keep the writer thread alive for the whole process.
        std::mem::forget(guard);

        Some(
            fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if to_file {
        tracing::info!("Log file: {}/{LOG_FILE}", dirs::log_dir().display());
    }

    Ok(())
}
