use std::path::PathBuf;

use trellis_common::PlatformError;

pub(super) const APP_NAME: &str = "trellis";

fn base(dir: Option<PathBuf>, what: &str) -> Result<PathBuf, PlatformError> {
    dir.map(|p| p.join(APP_NAME))
        .ok_or_else(|| PlatformError::PathError(format!("could not determine {what} directory")))
}

/// Platform configuration directory.
///
/// - macOS: `~/Library/Application Support/trellis`
/// - Linux: `$XDG_CONFIG_HOME/trellis` (defaults to `~/.config/trellis`)
/// - Windows: `%APPDATA%\trellis`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    base(dirs::config_dir(), "config")
}

/// Platform data directory, home of the session file.
///
/// - macOS: `~/Library/Application Support/trellis`
/// - Linux: `$XDG_DATA_HOME/trellis` (defaults to `~/.local/share/trellis`)
/// - Windows: `%APPDATA%\trellis`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    base(dirs::data_dir(), "data")
}

/// `config_dir()/config.toml`
pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}

/// `data_dir()/session.json`
pub fn session_file() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("session.json"))
}

/// `data_dir()/logs/crash-reports`
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs").join("crash-reports"))
}
