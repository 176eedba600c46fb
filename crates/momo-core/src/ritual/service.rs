//! Candle ritual.

use std::sync::Arc;
use std::time::Duration;

use super::repository::FlagStore;
use crate::config::{DEFAULT_CANDLE_FLAG_KEY, DEFAULT_OVERLAY_DURATION_MS, MomoConfig};
use crate::error::Result;
use crate::language::Language;
use crate::template::{TemplateId, TemplateStore};

const LIT_VALUE: &str = "1";

/// What the caller shows when the ritual actually runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayCue {
    pub message: String,
    pub duration: Duration,
}

/// Result of a light request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RitualOutcome {
    /// First lighting: show the overlay, then reveal `closing`.
    Lit { overlay: OverlayCue, closing: String },
    /// The flag was already set; only surface `notice`.
    AlreadyLit { notice: String },
}

impl RitualOutcome {
    pub fn is_lit(&self) -> bool {
        matches!(self, RitualOutcome::Lit { .. })
    }
}

/// One-shot "light the candle" ritual guarded by a durable flag.
///
/// The flag store is injected so the same ritual can run against a file,
/// browser storage or memory.
pub struct CandleRitual {
    store: Arc<dyn FlagStore>,
    templates: Arc<TemplateStore>,
    flag_key: String,
    overlay_duration: Duration,
}

impl CandleRitual {
    pub fn new(store: Arc<dyn FlagStore>, templates: Arc<TemplateStore>) -> Self {
        Self {
            store,
            templates,
            flag_key: DEFAULT_CANDLE_FLAG_KEY.to_string(),
            overlay_duration: Duration::from_millis(DEFAULT_OVERLAY_DURATION_MS),
        }
    }

    pub fn from_config(
        store: Arc<dyn FlagStore>,
        templates: Arc<TemplateStore>,
        config: &MomoConfig,
    ) -> Self {
        Self {
            store,
            templates,
            flag_key: config.candle_flag_key.clone(),
            overlay_duration: config.overlay_duration(),
        }
    }

    pub fn flag_key(&self) -> &str {
        &self.flag_key
    }

    /// Whether the ritual has already been performed.
    pub fn is_lit(&self) -> Result<bool> {
        Ok(self.store.get(&self.flag_key)?.as_deref() == Some(LIT_VALUE))
    }

    /// Invitation shown before the candle has been lit.
    pub fn prompt(&self, language: Language) -> &str {
        self.templates.text(TemplateId::CandlePrompt, language)
    }

    /// Lights the candle once.
    ///
    /// A repeat request changes nothing and returns `AlreadyLit`.
    ///
    /// # Errors
    ///
    /// Returns an error only when the flag store fails.
    pub fn light(&self, language: Language) -> Result<RitualOutcome> {
        if !self.store.set_once(&self.flag_key, LIT_VALUE)? {
            tracing::info!(key = %self.flag_key, "candle already lit; refusing replay");
            return Ok(RitualOutcome::AlreadyLit {
                notice: self
                    .templates
                    .text(TemplateId::CandleAlreadyLit, language)
                    .to_string(),
            });
        }

        tracing::info!(key = %self.flag_key, "candle lit");

        Ok(RitualOutcome::Lit {
            overlay: OverlayCue {
                message: self
                    .templates
                    .text(TemplateId::OverlayMessage, language)
                    .to_string(),
                duration: self.overlay_duration,
            },
            closing: self
                .templates
                .text(TemplateId::CandleClosing, language)
                .to_string(),
        })
    }

    /// Clears the flag so the ritual can run again.
    pub fn reset(&self) -> Result<()> {
        tracing::info!(key = %self.flag_key, "candle flag reset");
        self.store.remove(&self.flag_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MomoError;
    use crate::ritual::InMemoryFlagStore;

    fn ritual(store: Arc<dyn FlagStore>) -> CandleRitual {
        CandleRitual::new(store, Arc::new(TemplateStore::default()))
    }

    #[test]
    fn test_light_twice_is_idempotent() {
        let store = Arc::new(InMemoryFlagStore::new());
        let ritual = ritual(store.clone());

        let first = ritual.light(Language::Zh).unwrap();
        match &first {
            RitualOutcome::Lit { overlay, closing } => {
                assert_eq!(overlay.duration, Duration::from_millis(3000));
                assert!(overlay.message.contains("點亮自己的光"));
                assert!(closing.starts_with("燭光之約"));
            }
            other => panic!("expected Lit, got {:?}", other),
        }
        assert_eq!(store.get("momochao.candle_lit").unwrap().as_deref(), Some("1"));

        let second = ritual.light(Language::Zh).unwrap();
        assert_eq!(
            second,
            RitualOutcome::AlreadyLit {
                notice: "這盞燭光已經點亮過了。".to_string()
            }
        );
        assert!(!second.is_lit());
    }

    #[test]
    fn test_reset_allows_relight() {
        let ritual = ritual(Arc::new(InMemoryFlagStore::new()));
        assert!(ritual.light(Language::En).unwrap().is_lit());
        assert!(ritual.is_lit().unwrap());

        ritual.reset().unwrap();
        assert!(!ritual.is_lit().unwrap());
        assert!(ritual.light(Language::En).unwrap().is_lit());
    }

    #[test]
    fn test_foreign_flag_value_does_not_count_as_lit() {
        let store = Arc::new(InMemoryFlagStore::new());
        store.set("momochao.candle_lit", "0").unwrap();
        let ritual = ritual(store);
        assert!(!ritual.is_lit().unwrap());
    }

    #[test]
    fn test_concurrent_lights_succeed_once() {
        let ritual = Arc::new(ritual(Arc::new(InMemoryFlagStore::new())));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ritual = Arc::clone(&ritual);
                std::thread::spawn(move || ritual.light(Language::En).unwrap().is_lit())
            })
            .collect();
        let lit = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|lit| *lit)
            .count();
        assert_eq!(lit, 1);
    }

    #[test]
    fn test_prompt_follows_language() {
        let ritual = ritual(Arc::new(InMemoryFlagStore::new()));
        assert_eq!(ritual.prompt(Language::Zh), "點擊蠟燭,點亮你的承諾");
        assert!(!ritual.prompt(Language::En).is_empty());
    }

    #[test]
    fn test_config_sets_key_and_duration() {
        let mut config = MomoConfig::default();
        config.candle_flag_key = "custom.key".to_string();
        config.overlay_duration_ms = 10;
        let store = Arc::new(InMemoryFlagStore::new());
        let ritual =
            CandleRitual::from_config(store.clone(), Arc::new(TemplateStore::default()), &config);

        let outcome = ritual.light(Language::En).unwrap();
        match outcome {
            RitualOutcome::Lit { overlay, .. } => {
                assert_eq!(overlay.duration, Duration::from_millis(10))
            }
            other => panic!("expected Lit, got {:?}", other),
        }
        assert!(store.get("custom.key").unwrap().is_some());
    }

    struct FailingStore;

    impl FlagStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(MomoError::storage("disk full"))
        }
        fn set_once(&self, _key: &str, _value: &str) -> Result<bool> {
            Err(MomoError::storage("disk full"))
        }
        fn remove(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_store_failure_propagates() {
        let ritual = ritual(Arc::new(FailingStore));
        let err = ritual.light(Language::En).unwrap_err();
        assert!(err.to_string().contains("disk full"));
    }
}
