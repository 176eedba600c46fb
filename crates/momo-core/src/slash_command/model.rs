//! Slash command domain models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Closed set of commands the responder recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CommandName {
    TriLines,
    Challenge,
    Checklist,
    Light,
    /// Slash input that matched no builtin prefix
    Unknown,
}
