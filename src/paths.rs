//! Path resolution for the config file and logs.
//!
//! In development mode (cargo run), paths resolve to the working directory.
//! Installed builds use platform-specific locations:
//! - Windows: `%APPDATA%\MapShapes\`
//! - macOS: `~/Library/Application Support/MapShapes/`
//! - Linux: `~/.config/mapshapes/` (config), `~/.local/share/mapshapes/` (logs)

use std::path::PathBuf;

#[cfg(target_os = "linux")]
const APP_DIR_NAME: &str = "mapshapes";

#[cfg(not(target_os = "linux"))]
const APP_DIR_NAME: &str = "MapShapes";

/// Returns true when running in development mode (cargo run or a debug build)
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

/// Platform-appropriate config directory.
///
/// - Dev mode: current directory
/// - Linux: `~/.config/mapshapes/`
/// - Windows/macOS: same as data_dir
pub fn config_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    #[cfg(target_os = "linux")]
    {
        dirs::config_dir().map(|p| p.join(APP_DIR_NAME))
    }

    #[cfg(not(target_os = "linux"))]
    {
        data_dir()
    }
}

pub fn data_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    dirs::data_dir().map(|p| p.join(APP_DIR_NAME))
}

/// `./config.json` in dev mode, `{config_dir}/config.json` when installed
pub fn config_file() -> PathBuf {
    config_dir()
        .map(|p| p.join("config.json"))
        .unwrap_or_else(|| PathBuf::from("config.json"))
}

/// `./logs/` in dev mode, `{data_dir}/logs/` when installed
pub fn logs_dir() -> PathBuf {
    data_dir()
        .map(|p| p.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Create the config and log directories. No-op in dev mode.
pub fn ensure_directories() -> std::io::Result<()> {
    if is_dev_mode() {
        return Ok(());
    }

    if let Some(config) = config_dir() {
        std::fs::create_dir_all(&config)?;
    }
    std::fs::create_dir_all(logs_dir())?;
    Ok(())
}
