//! Chat session orchestration.
//!
//! `InteractionManager` sits between a renderer (REPL, web view, ...) and the
//! response selector: it owns the conversation log and guarantees that every
//! non-blank user utterance is answered by exactly one assistant utterance.

pub mod overlay;

use std::sync::Arc;

use momo_core::error::Result;
use momo_core::session::{Conversation, Utterance};
use momo_core::template::{TemplateId, TemplateStore};
use momo_core::{Language, MomoConfig, Reply, Responder};

pub use overlay::Overlay;

/// Outcome of a user action, for the renderer to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionResult {
    /// Blank input; nothing was recorded.
    NoOp,
    /// The assistant replied. The reply may carry an effect (overlay).
    NewMessage(Reply),
    /// The log was reset to a single greeting in `language`.
    LanguageChanged { language: Language, greeting: String },
}

/// Manages one chat session.
pub struct InteractionManager {
    conversation: Conversation,
    responder: Responder,
}

impl InteractionManager {
    pub fn new(language: Language, responder: Responder) -> Self {
        let conversation = Conversation::new(language, Arc::clone(responder.templates()));
        Self {
            conversation,
            responder,
        }
    }

    /// Session using the configured language, templates and keywords.
    pub fn from_config(config: &MomoConfig) -> Result<Self> {
        Ok(Self::new(
            config.default_language,
            Responder::from_config(config)?,
        ))
    }

    pub fn language(&self) -> Language {
        self.conversation.language()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn templates(&self) -> &Arc<TemplateStore> {
        self.responder.templates()
    }

    /// Records `input` and the single reply to it.
    pub fn handle_input(&mut self, input: &str) -> InteractionResult {
        let text = input.trim();
        if text.is_empty() {
            return InteractionResult::NoOp;
        }

        self.conversation.push(Utterance::user(text));
        let reply = self.responder.respond(text, self.language());
        let answer = Utterance::assistant(reply.text.clone());
        tracing::debug!(at = answer.timestamp(), overlay = reply.effect.is_some(), "assistant replied");
        self.conversation.push(answer);

        InteractionResult::NewMessage(reply)
    }

    /// Switches language; prior utterances are discarded.
    pub fn set_language(&mut self, language: Language) -> InteractionResult {
        tracing::info!(from = %self.language(), to = %language, "language changed");
        let greeting = self.conversation.switch_language(language).text().to_string();
        InteractionResult::LanguageChanged { language, greeting }
    }

    /// Persona prompt for wiring the same character to an LLM backend.
    pub fn system_prompt(&self) -> &str {
        self.templates()
            .text(TemplateId::SystemPrompt, self.language())
    }
}

impl Default for InteractionManager {
    fn default() -> Self {
        Self::new(Language::default(), Responder::default())
    }
}
