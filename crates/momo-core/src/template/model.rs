//! Template identifiers and entries.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::language::Language;

/// Key of a localized template.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TemplateId {
    /// First assistant message of every conversation
    Greeting,
    ThreeViewHeader,
    RationalView,
    EmotionalView,
    SystemicView,
    NextAction,
    Metric,
    ReviewWhen,
    /// Suffix appended to three-view replies on sensitive topics
    Caution,
    /// Reply to unrecognised slash input
    Acknowledge,
    TriLines,
    Challenge,
    Checklist,
    LightAck,
    /// Text shown on the transient full-screen overlay
    OverlayMessage,
    /// Persona prompt intended for an LLM backend
    SystemPrompt,
    CandlePrompt,
    CandleClosing,
    CandleAlreadyLit,
}

/// One `(id, language) -> text` row of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub id: TemplateId,
    pub language: Language,
    pub text: String,
}

impl TemplateEntry {
    pub fn new(id: TemplateId, language: Language, text: impl Into<String>) -> Self {
        Self {
            id,
            language,
            text: text.into(),
        }
    }
}
