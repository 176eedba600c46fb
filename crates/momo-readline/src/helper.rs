//! rustyline helper and REPL directives.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::str::FromStr;

use colored::Colorize;
use momo_core::Language;
use momo_core::slash_command::all_aliases;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Local REPL commands. These never reach the responder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Quit,
    Help,
    Prompt,
    Candle,
    /// `:lang` with a parsed language, or `None` for a bad/missing code
    Lang(Option<Language>),
}

const DIRECTIVES: &[&str] = &[":help", ":lang zh", ":lang en", ":candle", ":prompt"];

/// Parses a trimmed line as a directive.
///
/// Returns `None` for chat input, including text that merely starts with `:`
/// (`:) hello`), so only known directive names are intercepted.
pub fn parse_directive(line: &str) -> Option<Directive> {
    let line = line.trim();
    if line == "quit" || line == "exit" {
        return Some(Directive::Quit);
    }
    let rest = line.strip_prefix(':')?;

    let mut parts = rest.split_whitespace();
    let directive = match parts.next().unwrap_or_default() {
        "q" | "quit" => Directive::Quit,
        "help" => Directive::Help,
        "prompt" => Directive::Prompt,
        "candle" => Directive::Candle,
        "lang" => Directive::Lang(parts.next().and_then(|code| Language::from_str(code).ok())),
        _ => return None,
    };
    Some(directive)
}

/// Completion candidates for the text typed so far.
pub fn matching_commands(line: &str) -> Vec<&'static str> {
    if line.starts_with('/') {
        all_aliases().filter(|cmd| cmd.starts_with(line)).collect()
    } else if line.starts_with(':') {
        DIRECTIVES
            .iter()
            .copied()
            .filter(|cmd| cmd.starts_with(line))
            .collect()
    } else {
        Vec::new()
    }
}

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone, Default)]
pub struct ChatHelper;

impl Helper for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = matching_commands(&line[..pos])
            .into_iter()
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ChatHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else if line.starts_with(':') {
            Owned(line.bright_yellow().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ChatHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.contains(' ') && !line.starts_with(':') {
            return None;
        }
        matching_commands(line)
            .into_iter()
            .find(|cmd| cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for ChatHelper {}
