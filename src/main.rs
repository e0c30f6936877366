// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use textpulse::app_config::{self, Config, TranslationProvider};
use textpulse::app_controller::{Controller, OutputFormat};
use textpulse::input::InputSource;

/// CLI Wrapper for TranslationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationProvider {
    Ollama,
    OpenAI,
    Anthropic,
    LMStudio,
}

impl From<CliTranslationProvider> for TranslationProvider {
    fn from(cli_provider: CliTranslationProvider) -> Self {
        match cli_provider {
            CliTranslationProvider::Ollama => TranslationProvider::Ollama,
            CliTranslationProvider::OpenAI => TranslationProvider::OpenAI,
            CliTranslationProvider::Anthropic => TranslationProvider::Anthropic,
            CliTranslationProvider::LMStudio => TranslationProvider::LMStudio,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for textpulse
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// textpulse - translate a text, score its sentiment and count its words
#[derive(Parser, Debug)]
#[command(name = "textpulse")]
#[command(version)]
#[command(about = "Translate a text, score its sentiment and count its words")]
#[command(long_about = "textpulse translates a text with an LLM provider, scores the overall and per-sentence sentiment of the translation and lists the most frequent words.

EXAMPLES:
    textpulse --text \"Me gusta este producto. Es excelente.\"
    textpulse review.txt                        # Analyze an uploaded file (txt, csv, md)
    textpulse -p openai -m gpt-4o-mini notes.md # Use a specific provider and model
    textpulse -s fr -t en --json letter.txt     # French to English, JSON output
    textpulse completions bash > textpulse.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. If the file does not
    exist a default one is created.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text file to analyze (txt, csv or md)
    #[arg(value_name = "FILE", conflicts_with = "text")]
    input_path: Option<PathBuf>,

    /// Text to analyze
    #[arg(short = 'x', long)]
    text: Option<String>,

    /// Provider to use for translation and scoring
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Model name
    #[arg(short, long)]
    model: Option<String>,

    /// Source language code (e.g., 'es')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'en')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI colour for log level
    fn decoration(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "1;31"),
            Level::Warn => ("🚧", "1;33"),
            Level::Info => ("", "1;32"),
            Level::Debug => ("🔍", "1;36"),
            Level::Trace => ("📋", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, colour) = Self::decoration(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", colour, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Info until the config says otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "textpulse", &mut std::io::stdout());
        return Ok(());
    }

    run_analysis(cli).await
}

async fn run_analysis(options: CommandLineOptions) -> Result<()> {
    if let Some(level) = &options.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&options.config_path)?;
    apply_overrides(&mut config, &options);

    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let source = match (&options.input_path, &options.text) {
        (Some(path), _) => InputSource::File(path.clone()),
        (None, Some(text)) => InputSource::Text(text.clone()),
        (None, None) => return Err(anyhow!("Provide a FILE to analyze or use --text \"...\"")),
    };

    let format = if options.json { OutputFormat::Json } else { OutputFormat::Text };

    let controller = Controller::with_config(config)?;
    controller.run(source, format).await
}

// Override config with CLI options if provided
fn apply_overrides(config: &mut Config, options: &CommandLineOptions) {
    if let Some(provider) = &options.provider {
        config.translation.provider = provider.clone().into();
    }

    if let Some(model) = &options.model {
        config.translation.active_provider_config_mut().model = model.clone();
    }

    if let Some(source_lang) = &options.source_language {
        config.source_language = source_lang.clone();
    }

    if let Some(target_lang) = &options.target_language {
        config.target_language = target_lang.clone();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
}
