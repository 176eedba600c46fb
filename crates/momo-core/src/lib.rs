//! MomoChao domain crate.
//!
//! The scripted companion persona behind the chat page: slash-command and
//! keyword dispatch to a bilingual template table, the conversation log, and
//! the one-shot candle ritual.

pub mod config;
pub mod error;
pub mod language;
pub mod responder;
pub mod ritual;
pub mod sensitivity;
pub mod session;
pub mod slash_command;
pub mod template;

// Re-export common types
pub use config::MomoConfig;
pub use error::MomoError;
pub use language::Language;
pub use responder::{Reply, ReplyEffect, Responder};
