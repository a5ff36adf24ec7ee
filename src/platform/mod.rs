// BioLingua platform paths
// Resolves per-user config and data directories for Linux, macOS, and Windows.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "biolingua";
#[cfg_attr(not(any(target_os = "macos", target_os = "windows")), allow(dead_code))]
const APP_DIR_TITLE: &str = "BioLingua";

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns `$<var>/<app>` when the variable is set and non-empty.
fn from_env(var: &str, app: &str) -> Option<PathBuf> {
    env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .map(|v| PathBuf::from(v).join(app))
}

/// Returns the configuration directory.
///
/// - **Linux**: `$XDG_CONFIG_HOME/biolingua` or `~/.config/biolingua`
/// - **macOS**: `~/Library/Application Support/BioLingua`
/// - **Windows**: `%APPDATA%/BioLingua`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join(APP_DIR_TITLE)
    }
    #[cfg(target_os = "windows")]
    {
        from_env("APPDATA", APP_DIR_TITLE)
            .unwrap_or_else(|| home_dir().join("AppData").join("Roaming").join(APP_DIR_TITLE))
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        from_env("XDG_CONFIG_HOME", APP_DIR)
            .unwrap_or_else(|| home_dir().join(".config").join(APP_DIR))
    }
}

/// Returns the data directory holding the durable store.
///
/// - **Linux**: `$XDG_DATA_HOME/biolingua` or `~/.local/share/biolingua`
/// - **macOS**: `~/Library/Application Support/BioLingua`
/// - **Windows**: `%APPDATA%/BioLingua`
pub fn get_data_dir() -> PathBuf {
    #[cfg(any(target_os = "macos", target_os = "windows"))]
    {
        get_config_dir()
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        from_env("XDG_DATA_HOME", APP_DIR)
            .unwrap_or_else(|| home_dir().join(".local").join("share").join(APP_DIR))
    }
}
