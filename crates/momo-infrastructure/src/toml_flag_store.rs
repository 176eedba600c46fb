//! TOML-backed flag store.

use std::collections::BTreeMap;
use std::path::PathBuf;

use momo_core::error::Result;
use momo_core::ritual::FlagStore;
use serde::{Deserialize, Serialize};

use crate::paths::MomoPaths;
use crate::storage::AtomicTomlFile;

/// On-disk layout of `flags.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FlagDocument {
    #[serde(default)]
    flags: BTreeMap<String, String>,
}

/// Durable [`FlagStore`] persisted as a `[flags]` table.
pub struct TomlFlagStore {
    file: AtomicTomlFile<FlagDocument>,
}

impl TomlFlagStore {
    /// Store at the default location (`<config dir>/flags.toml`).
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(MomoPaths::flags_file()?))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }
}

impl FlagStore for TomlFlagStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let document = self.file.load()?.unwrap_or_default();
        Ok(document.flags.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.file.update(FlagDocument::default(), |document| {
            let previous = document.flags.insert(key.to_string(), value.to_string());
            (previous.as_deref() != Some(value), ())
        })?;
        tracing::debug!(key, path = %self.file.path().display(), "flag stored");
        Ok(())
    }

    fn set_once(&self, key: &str, value: &str) -> Result<bool> {
        let written = self.file.update(FlagDocument::default(), |document| {
            if document.flags.get(key).map(String::as_str) == Some(value) {
                return (false, false);
            }
            document.flags.insert(key.to_string(), value.to_string());
            (true, true)
        })?;
        tracing::debug!(key, written, path = %self.file.path().display(), "flag set once");
        Ok(written)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.file.update(FlagDocument::default(), |document| {
            (document.flags.remove(key).is_some(), ())
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flags_survive_a_new_handle() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("flags.toml");

        let store = TomlFlagStore::with_path(path.clone());
        assert_eq!(store.get("momochao.candle_lit").unwrap(), None);
        store.set("momochao.candle_lit", "1").unwrap();

        let reopened = TomlFlagStore::with_path(path.clone());
        assert_eq!(
            reopened.get("momochao.candle_lit").unwrap().as_deref(),
            Some("1")
        );

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("[flags]"));
    }

    #[test]
    fn test_remove_and_other_keys_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let store = TomlFlagStore::with_path(temp_dir.path().join("flags.toml"));
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        store.remove("a").unwrap();
        store.remove("missing").unwrap();

        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_set_once_is_exclusive_across_handles() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("flags.toml");

        let handles: Vec<_> = (0..6)
            .map(|_| {
                let store = TomlFlagStore::with_path(path.clone());
                std::thread::spawn(move || store.set_once("momochao.candle_lit", "1").unwrap())
            })
            .collect();
        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|written| *written)
            .count();

        assert_eq!(winners, 1);
        let store = TomlFlagStore::with_path(path);
        assert!(!store.set_once("momochao.candle_lit", "1").unwrap());
    }

    #[test]
    fn test_corrupt_file_surfaces_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("flags.toml");
        std::fs::write(&path, "[flags\n").unwrap();

        let store = TomlFlagStore::with_path(path);
        assert!(store.get("a").unwrap_err().is_serialization());
    }
}
