//! Durable flag store trait.

use crate::error::Result;

/// Minimal string key-value store for one-shot flags.
///
/// Implementations must make a successful `set` visible to every later `get`,
/// including across process restarts for durable stores.
pub trait FlagStore: Send + Sync {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Stores `value` under `key` unless it already holds exactly `value`.
    ///
    /// Returns `true` when this call wrote the value. The check and the write
    /// must happen as one step, so two concurrent callers never both see
    /// `true`.
    fn set_once(&self, key: &str, value: &str) -> Result<bool>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
