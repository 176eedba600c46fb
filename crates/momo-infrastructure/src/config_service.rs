//! Configuration service.
//!
//! Loads `MomoConfig` from `config.toml` and caches it.

use momo_core::MomoConfig;
use momo_core::error::Result;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::paths::MomoPaths;
use crate::storage::AtomicTomlFile;

#[derive(Clone)]
pub struct ConfigService {
    path: PathBuf,
    config: Arc<RwLock<Option<MomoConfig>>>,
}

impl ConfigService {
    /// Service reading `<config dir>/config.toml`.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(MomoPaths::config_file()?))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Returns the configuration, loading it on first access.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed. A missing
    /// file is not an error.
    pub fn load(&self) -> Result<MomoConfig> {
        if let Ok(guard) = self.config.read() {
            if let Some(cached) = guard.as_ref() {
                return Ok(cached.clone());
            }
        }

        let file = AtomicTomlFile::<MomoConfig>::new(self.path.clone());
        let loaded = match file.load()? {
            Some(config) => {
                tracing::info!(path = %self.path.display(), "configuration loaded");
                config
            }
            None => {
                tracing::debug!(path = %self.path.display(), "no configuration file; using defaults");
                MomoConfig::default()
            }
        };

        if let Ok(mut guard) = self.config.write() {
            *guard = Some(loaded.clone());
        }
        Ok(loaded)
    }

    /// Like [`load`](Self::load) but falls back to defaults on error.
    pub fn load_or_default(&self) -> MomoConfig {
        self.load().unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "invalid configuration; using defaults");
            MomoConfig::default()
        })
    }

    /// Forces a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut guard) = self.config.write() {
            *guard = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use momo_core::Language;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        assert_eq!(service.load().unwrap(), MomoConfig::default());
    }

    #[test]
    fn test_loads_and_caches() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "default_language = \"en\"\n").unwrap();

        let service = ConfigService::with_path(path.clone());
        assert_eq!(service.load().unwrap().default_language, Language::En);

        std::fs::write(&path, "default_language = \"zh\"\n").unwrap();
        assert_eq!(service.load().unwrap().default_language, Language::En);

        service.invalidate_cache();
        assert_eq!(service.load().unwrap().default_language, Language::Zh);
    }

    #[test]
    fn test_invalid_file_falls_back_when_asked() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "overlay_duration_ms = \"soon\"\n").unwrap();

        let service = ConfigService::with_path(path);
        assert!(service.load().is_err());
        assert_eq!(service.load_or_default(), MomoConfig::default());
    }
}
