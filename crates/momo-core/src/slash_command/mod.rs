//! Slash command recognition.
//!
//! Slash-prefixed input is resolved against a static table of builtin
//! commands by prefix match. Anything else is free text.

pub mod builtin;
pub mod model;

pub use builtin::{BuiltinSlashCommand, all_aliases, builtin_commands, parse_command};
pub use model::CommandName;
