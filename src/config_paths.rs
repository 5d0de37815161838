//! Where cmdedit keeps its files
//!
//! One directory holds `config.yaml` (the [`EditorConfig`](crate::config::EditorConfig)
//! read at startup) and `logs/` (the rolling `cmdedit.log` written by
//! [`crate::tracing::init`]).

use std::{env, fs, io, path::PathBuf};

const APP_DIR: &str = "cmdedit";

/// `$XDG_CONFIG_HOME/cmdedit`, falling back to `~/.config/cmdedit`
/// (`%APPDATA%\cmdedit` on Windows). `None` without a home directory.
pub fn config_dir() -> Option<PathBuf> {
    let base = if cfg!(windows) {
        dirs::config_dir()
    } else {
        env::var_os("XDG_CONFIG_HOME")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
    };
    base.map(|dir| dir.join(APP_DIR))
}

/// Editor settings file
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Log file directory
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the log directory if needed, returning it
pub fn ensure_logs_dir() -> io::Result<PathBuf> {
    let logs = logs_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no config directory"))?;
    fs::create_dir_all(&logs)?;
    Ok(logs)
}
