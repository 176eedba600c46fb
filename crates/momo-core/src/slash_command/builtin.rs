//! Builtin slash commands understood by the responder.
//!
//! Every command has a Latin alias and, where the page offers one, a native
//! Chinese spelling. All aliases are accepted whatever the active language.

use serde::Serialize;
use std::sync::OnceLock;

use super::model::CommandName;

/// A builtin slash command and the prefixes that select it.
#[derive(Debug, Clone, Serialize)]
pub struct BuiltinSlashCommand {
    pub name: CommandName,
    /// Accepted spellings, including the leading `/`
    pub aliases: &'static [&'static str],
    /// Human-readable description
    pub description: &'static str,
}

impl BuiltinSlashCommand {
    pub const fn new(
        name: CommandName,
        aliases: &'static [&'static str],
        description: &'static str,
    ) -> Self {
        Self {
            name,
            aliases,
            description,
        }
    }

    /// Returns true when `text` begins with one of this command's aliases.
    pub fn matches(&self, text: &str) -> bool {
        self.aliases.iter().any(|alias| text.starts_with(alias))
    }
}

static BUILTIN_COMMANDS: OnceLock<Vec<BuiltinSlashCommand>> = OnceLock::new();

/// Returns all builtin slash commands in match order.
pub fn builtin_commands() -> &'static [BuiltinSlashCommand] {
    BUILTIN_COMMANDS.get_or_init(|| {
        vec![
            BuiltinSlashCommand::new(
                CommandName::TriLines,
                &["/三行收斂", "/tri-lines"],
                "Three-line convergence: next action, metric, review time",
            ),
            BuiltinSlashCommand::new(
                CommandName::Challenge,
                &["/挑戰模式", "/challenge"],
                "Challenge mode: risk of the 70% answer and a cheap tradeoff",
            ),
            BuiltinSlashCommand::new(
                CommandName::Checklist,
                &["/檢查表", "/checklist"],
                "The 120-point checklist",
            ),
            BuiltinSlashCommand::new(
                CommandName::Light,
                &["/light"],
                "Light ritual with a brief full-screen overlay",
            ),
        ]
    })
}

/// Every alias of every builtin command, in match order.
pub fn all_aliases() -> impl Iterator<Item = &'static str> {
    builtin_commands()
        .iter()
        .flat_map(|cmd| cmd.aliases.iter().copied())
}

/// Resolves slash input to a command.
///
/// Returns `None` for text without a leading `/`, and
/// `Some(CommandName::Unknown)` for slash input no builtin claims.
pub fn parse_command(text: &str) -> Option<CommandName> {
    let text = text.trim();
    if !text.starts_with('/') {
        return None;
    }

    let name = builtin_commands()
        .iter()
        .find(|cmd| cmd.matches(text))
        .map(|cmd| cmd.name)
        .unwrap_or(CommandName::Unknown);
    Some(name)
}
