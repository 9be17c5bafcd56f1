//! Per-platform locations for settings and logs.
//!
//! - macOS: ~/Library/Application Support/ideshell/{logs,settings.json}
//! - Linux: $XDG_DATA_HOME/ideshell/logs, $XDG_CONFIG_HOME/ideshell/settings.json
//! - Windows: %APPDATA%\ideshell\{logs,settings.json}

use std::path::PathBuf;

const APP_NAME: &str = "ideshell";
const LOG_DIR: &str = "logs";

fn get_app_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        home_dir().map(|home| home.join("Library/Application Support").join(APP_NAME))
    }

    #[cfg(target_os = "linux")]
    {
        xdg_dir("XDG_DATA_HOME", ".local/share")
    }

    #[cfg(target_os = "windows")]
    {
        appdata_dir()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        xdg_dir("XDG_CONFIG_HOME", ".config")
    }

    #[cfg(not(target_os = "linux"))]
    {
        get_app_data_dir()
    }
}

#[cfg(target_os = "macos")]
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

#[cfg(target_os = "linux")]
fn xdg_dir(var: &str, home_fallback: &str) -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(var) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir).join(APP_NAME));
        }
    }
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(home_fallback).join(APP_NAME))
}

#[cfg(target_os = "windows")]
fn appdata_dir() -> Option<PathBuf> {
    std::env::var("APPDATA")
        .ok()
        .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(LOG_DIR))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}
