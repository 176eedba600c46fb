//! In-memory flag store.

use std::collections::HashMap;
use std::sync::RwLock;

use super::repository::FlagStore;
use crate::error::{MomoError, Result};

/// Flag store that lives as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryFlagStore {
    flags: RwLock<HashMap<String, String>>,
}

impl InMemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for InMemoryFlagStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let flags = self
            .flags
            .read()
            .map_err(|e| MomoError::storage(format!("flag store poisoned: {}", e)))?;
        Ok(flags.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut flags = self
            .flags
            .write()
            .map_err(|e| MomoError::storage(format!("flag store poisoned: {}", e)))?;
        flags.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn set_once(&self, key: &str, value: &str) -> Result<bool> {
        let mut flags = self
            .flags
            .write()
            .map_err(|e| MomoError::storage(format!("flag store poisoned: {}", e)))?;
        if flags.get(key).map(String::as_str) == Some(value) {
            return Ok(false);
        }
        flags.insert(key.to_string(), value.to_string());
        Ok(true)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut flags = self
            .flags
            .write()
            .map_err(|e| MomoError::storage(format!("flag store poisoned: {}", e)))?;
        flags.remove(key);
        Ok(())
    }
}
