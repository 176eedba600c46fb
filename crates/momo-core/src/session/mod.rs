//! Session domain module.
//!
//! - `message`: utterance types (`Speaker`, `Utterance`)
//! - `conversation`: the append-only conversation log (`Conversation`)

mod conversation;
mod message;

pub use conversation::Conversation;
pub use message::{Speaker, Utterance};
