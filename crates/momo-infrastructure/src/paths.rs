//! Path management for MomoChao files.
//!
//! ```text
//! ~/.config/momochao/        # or $MOMOCHAO_CONFIG_DIR
//! ├── config.toml            # MomoConfig
//! ├── flags.toml             # durable one-shot flags
//! └── logs/                  # REPL log files
//! ```

use std::path::PathBuf;

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "MOMOCHAO_CONFIG_DIR";

const APP_DIR_NAME: &str = "momochao";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for momo_core::MomoError {
    fn from(e: PathError) -> Self {
        momo_core::MomoError::config(e.to_string())
    }
}

pub struct MomoPaths;

impl MomoPaths {
    /// Root directory for all MomoChao files.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::ConfigDirNotFound)
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn flags_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("flags.toml"))
    }

    pub fn log_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}
