//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific log directory
///
/// - macOS: `~/Library/Caches/maze/logs`
/// - Linux: `~/.cache/maze/logs` (or `$XDG_CACHE_HOME/maze/logs`)
/// - Windows: `%LOCALAPPDATA%\maze\logs`
/// - Fallback: `/tmp/maze/logs`
pub fn log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", "maze")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/maze"));

    base_dir.join("logs")
}
