use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use momo_core::ritual::{CandleRitual, RitualOutcome};
use momo_core::slash_command::builtin_commands;
use momo_core::template::TemplateId;
use momo_infrastructure::{ConfigService, MomoPaths, TomlFlagStore};
use momo_interaction::{InteractionManager, InteractionResult, Overlay};

mod helper;

use helper::{ChatHelper, Directive, parse_directive};

/// Logs go to a daily file so they never interleave with the chat.
fn init_logging() -> Result<WorkerGuard> {
    let log_dir = MomoPaths::log_dir()?;
    std::fs::create_dir_all(&log_dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("momo-chat")
        .filename_suffix("log")
        .build(&log_dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

fn print_assistant(text: &str) {
    for line in text.lines() {
        println!("{}", line.bright_blue());
    }
    println!();
}

/// Prints the overlay text; `after` runs once the overlay dismisses itself.
fn flash_overlay<F>(overlay: &Overlay, message: &str, duration: Duration, after: F)
where
    F: FnOnce() + Send + 'static,
{
    println!("{}", format!("✦ {} ✦", message).bright_yellow().bold());
    overlay.show_then(duration, move || {
        println!("{}", "(the glow fades)".bright_black());
        after();
    });
}

fn print_help() {
    println!("{}", "Slash commands:".bright_magenta());
    for cmd in builtin_commands() {
        println!(
            "  {}  {}",
            cmd.aliases.join(" | ").bright_cyan(),
            cmd.description.bright_black()
        );
    }
    println!("{}", "Directives:".bright_magenta());
    println!("  {}  switch language (log restarts)", ":lang zh|en".bright_yellow());
    println!("  {}  light the candle ritual", ":candle".bright_yellow());
    println!("  {}  show the persona prompt", ":prompt".bright_yellow());
    println!("  {}  leave", "quit | exit".bright_yellow());
    println!();
}

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = init_logging()?;

    let config = ConfigService::new()?.load_or_default();
    let mut manager = InteractionManager::from_config(&config)?;
    let ritual = CandleRitual::from_config(
        Arc::new(TomlFlagStore::new()?),
        Arc::clone(manager.templates()),
        &config,
    );
    let overlay = Overlay::new();

    let mut rl: Editor<ChatHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ChatHelper));

    println!("{}", "=== MomoChao ===".bright_magenta().bold());
    println!("{}", "Type ':help' for commands, or 'quit' to exit.".bright_black());
    println!();
    if let Some(greeting) = manager.conversation().last() {
        print_assistant(greeting.text());
    }

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match parse_directive(trimmed) {
                    Some(Directive::Quit) => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    Some(Directive::Help) => print_help(),
                    Some(Directive::Prompt) => print_assistant(manager.system_prompt()),
                    Some(Directive::Lang(Some(language))) => {
                        if let InteractionResult::LanguageChanged { language, greeting } =
                            manager.set_language(language)
                        {
                            println!("{}", format!("[{}]", language.label()).bright_black());
                            print_assistant(&greeting);
                        }
                    }
                    Some(Directive::Lang(None)) => {
                        println!("{}", "Usage: :lang zh|en".yellow());
                    }
                    Some(Directive::Candle) => {
                        if let Ok(false) = ritual.is_lit() {
                            print_assistant(ritual.prompt(manager.language()));
                        }
                        match ritual.light(manager.language()) {
                            Ok(RitualOutcome::Lit { overlay: cue, closing }) => {
                                flash_overlay(&overlay, &cue.message, cue.duration, move || {
                                    print_assistant(&closing)
                                });
                            }
                            Ok(RitualOutcome::AlreadyLit { notice }) => print_assistant(&notice),
                            Err(e) => {
                                tracing::error!(error = %e, "candle ritual failed");
                                eprintln!("{}", format!("Error: {}", e).red());
                            }
                        }
                    }
                    None => {
                        println!("{}", format!("> {}", trimmed).green());
                        if let InteractionResult::NewMessage(reply) = manager.handle_input(trimmed) {
                            if let Some(duration) = reply.overlay_duration() {
                                let message = manager
                                    .templates()
                                    .text(TemplateId::OverlayMessage, manager.language());
                                flash_overlay(&overlay, message, duration, || {});
                            }
                            print_assistant(&reply.text);
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    tracing::info!(language = %manager.language(), utterances = manager.conversation().len(), "session closed");
    Ok(())
}
