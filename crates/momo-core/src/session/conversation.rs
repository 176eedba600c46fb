//! Conversation log.

use std::sync::Arc;

use super::message::{Speaker, Utterance};
use crate::language::Language;
use crate::template::{TemplateId, TemplateStore};

/// Ordered, append-only list of utterances for one page session.
///
/// A fresh log always starts with a single assistant greeting in the active
/// language. Switching language drops the history and re-seeds the greeting;
/// nothing is translated.
#[derive(Debug, Clone)]
pub struct Conversation {
    language: Language,
    utterances: Vec<Utterance>,
    templates: Arc<TemplateStore>,
}

impl Conversation {
    /// Creates a log seeded with the greeting for `language`.
    pub fn new(language: Language, templates: Arc<TemplateStore>) -> Self {
        let mut conversation = Self {
            language,
            utterances: Vec::new(),
            templates,
        };
        conversation.reset();
        conversation
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// All utterances in send order.
    pub fn utterances(&self) -> &[Utterance] {
        &self.utterances
    }

    pub fn last(&self) -> Option<&Utterance> {
        self.utterances.last()
    }

    pub fn len(&self) -> usize {
        self.utterances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utterances.is_empty()
    }

    pub fn push(&mut self, utterance: Utterance) {
        self.utterances.push(utterance);
    }

    /// Count of utterances from `speaker`.
    pub fn count_from(&self, speaker: Speaker) -> usize {
        self.utterances
            .iter()
            .filter(|u| u.speaker() == speaker)
            .count()
    }

    /// Switches language and resets the log to a single greeting.
    ///
    /// Returns the new greeting.
    pub fn switch_language(&mut self, language: Language) -> &Utterance {
        self.language = language;
        self.reset();
        &self.utterances[0]
    }

    fn reset(&mut self) {
        self.utterances.clear();
        let greeting = self.templates.text(TemplateId::Greeting, self.language);
        self.utterances.push(Utterance::assistant(greeting));
    }
}
