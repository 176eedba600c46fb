use anyhow::Result;
use clap::{Parser, Subcommand};
use momo_core::Language;
use momo_infrastructure::ConfigService;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "momo")]
#[command(about = "MomoChao - a bilingual companion that answers in three views", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print MomoChao's reply to a single message
    Respond {
        /// Reply language (zh or en); defaults to the configured language
        #[arg(long)]
        lang: Option<Language>,
        /// Message text; words are joined with spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Print the persona system prompt
    Prompt {
        #[arg(long)]
        lang: Option<Language>,
    },
    /// Light the one-time candle, or reset it
    Candle {
        #[arg(long)]
        lang: Option<Language>,
        /// Forget that the candle was lit
        #[arg(long)]
        reset: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ConfigService::new()?.load_or_default();

    let output = match cli.command {
        Commands::Respond { lang, text } => {
            commands::respond::run(&config, lang, &text.join(" "))?
        }
        Commands::Prompt { lang } => commands::prompt::run(&config, lang)?,
        Commands::Candle { lang, reset } => {
            let store = commands::candle::default_store()?;
            if reset {
                commands::candle::reset(&config, store)?
            } else {
                commands::candle::light(&config, store, lang)?
            }
        }
    };
    println!("{}", output);

    Ok(())
}
