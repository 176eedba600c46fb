//! Conversation message types.

use serde::{Deserialize, Serialize};

/// Who sent an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// Message typed by the user.
    User,
    /// Message produced by the scripted persona.
    Assistant,
}

/// A single message in the exchange.
///
/// Utterances are immutable once created and live only as long as the
/// conversation that holds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    text: String,
    speaker: Speaker,
    /// Timestamp when the message was created (RFC 3339).
    timestamp: String,
}

impl Utterance {
    /// Creates an utterance stamped with the current time.
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speaker,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Speaker::Assistant, text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_is_rfc3339() {
        let utterance = Utterance::user("hi");
        assert!(chrono::DateTime::parse_from_rfc3339(utterance.timestamp()).is_ok());
        assert_eq!(utterance.speaker(), Speaker::User);
    }
}
