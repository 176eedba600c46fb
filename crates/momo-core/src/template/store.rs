//! Template store.

use std::collections::HashMap;
use std::sync::OnceLock;

use strum::IntoEnumIterator;

use super::builtin::BUILTIN_TEMPLATES;
use super::model::{TemplateEntry, TemplateId};
use crate::error::{MomoError, Result};
use crate::language::Language;

/// Closed `(TemplateId, Language) -> text` lookup table.
///
/// A store is complete by construction: every id has a non-empty text in
/// every language, so lookups never miss.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    entries: HashMap<(TemplateId, Language), String>,
}

static BUILTIN_STORE: OnceLock<TemplateStore> = OnceLock::new();

impl TemplateStore {
    /// The shipped bilingual table.
    pub fn builtin() -> &'static TemplateStore {
        BUILTIN_STORE.get_or_init(|| {
            let entries = BUILTIN_TEMPLATES
                .iter()
                .map(|(id, language, text)| ((*id, *language), text.to_string()))
                .collect();
            TemplateStore { entries }
        })
    }

    /// Builds a store from explicit entries.
    ///
    /// Later entries for the same key win.
    ///
    /// # Errors
    ///
    /// Returns `MomoError::Config` if an entry is blank or a
    /// `(TemplateId, Language)` pair is missing.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = TemplateEntry>,
    {
        let mut map = HashMap::new();
        for entry in entries {
            Self::check_text(&entry)?;
            map.insert((entry.id, entry.language), entry.text);
        }
        let store = Self { entries: map };
        store.check_complete()?;
        Ok(store)
    }

    /// Returns a copy of this store with `overrides` applied on top.
    pub fn with_overrides<I>(&self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = TemplateEntry>,
    {
        let mut store = self.clone();
        for entry in overrides {
            Self::check_text(&entry)?;
            tracing::debug!(template = %entry.id, language = %entry.language, "template override applied");
            store.entries.insert((entry.id, entry.language), entry.text);
        }
        Ok(store)
    }

    /// Text for `id` in `language`.
    pub fn text(&self, id: TemplateId, language: Language) -> &str {
        self.entries
            .get(&(id, language))
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// All entries, sorted by id then language.
    pub fn entries(&self) -> Vec<TemplateEntry> {
        let mut entries: Vec<TemplateEntry> = self
            .entries
            .iter()
            .map(|((id, language), text)| TemplateEntry::new(*id, *language, text.clone()))
            .collect();
        entries.sort_by_key(|e| (e.id, e.language));
        entries
    }

    fn check_text(entry: &TemplateEntry) -> Result<()> {
        if entry.text.trim().is_empty() {
            return Err(MomoError::config(format!(
                "template '{}' ({}) must not be empty",
                entry.id, entry.language
            )));
        }
        Ok(())
    }

    fn check_complete(&self) -> Result<()> {
        let missing: Vec<String> = TemplateId::iter()
            .flat_map(|id| Language::iter().map(move |language| (id, language)))
            .filter(|key| !self.entries.contains_key(key))
            .map(|(id, language)| format!("{}/{}", id, language))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(MomoError::config(format!(
                "missing templates: {}",
                missing.join(", ")
            )))
        }
    }
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_store_is_complete() {
        let store = TemplateStore::builtin();
        assert!(store.check_complete().is_ok());
        for id in TemplateId::iter() {
            for language in Language::iter() {
                assert!(
                    !store.text(id, language).trim().is_empty(),
                    "empty template {}/{}",
                    id,
                    language
                );
            }
        }
        assert_eq!(
            store.entries().len(),
            TemplateId::iter().count() * Language::iter().count()
        );
    }

    #[test]
    fn test_builtin_table_has_no_duplicate_rows() {
        let mut seen = std::collections::HashSet::new();
        for (id, language, _) in BUILTIN_TEMPLATES {
            assert!(seen.insert((*id, *language)), "duplicate {}/{}", id, language);
        }
    }

    #[test]
    fn test_from_entries_rejects_incomplete_table() {
        let err = TemplateStore::from_entries(vec![TemplateEntry::new(
            TemplateId::Greeting,
            Language::En,
            "hi",
        )])
        .unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("greeting/zh"));
    }

    #[test]
    fn test_from_entries_accepts_full_table() {
        let store = TemplateStore::from_entries(TemplateStore::builtin().entries()).unwrap();
        assert_eq!(
            store.text(TemplateId::Acknowledge, Language::En),
            "Got it. I'm listening."
        );
    }

    #[test]
    fn test_override_replaces_single_entry() {
        let store = TemplateStore::builtin()
            .with_overrides(vec![TemplateEntry::new(
                TemplateId::Acknowledge,
                Language::En,
                "Heard you.",
            )])
            .unwrap();
        assert_eq!(store.text(TemplateId::Acknowledge, Language::En), "Heard you.");
        assert_eq!(
            store.text(TemplateId::Acknowledge, Language::Zh),
            "好的,我聽見了。"
        );
    }

    #[test]
    fn test_override_rejects_blank_text() {
        let err = TemplateStore::builtin()
            .with_overrides(vec![TemplateEntry::new(
                TemplateId::Caution,
                Language::Zh,
                "   ",
            )])
            .unwrap_err();
        assert!(err.is_config());
    }
}
