use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::time::Duration;

use crate::analysis::{AnalysisResult, TextAnalyzer};
use crate::app_config::Config;
use crate::errors::AnalysisError;
use crate::input::{self, InputSource};
use crate::providers::ProviderClient;
use crate::report;
use crate::sentiment::{ProviderScorer, SentimentScorer};
use crate::translation::{TranslationService, Translator};

// @module: Application controller for text analysis

/// How the result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyze one input with the configured provider and print the report
    pub async fn run(&self, source: InputSource, format: OutputFormat) -> Result<()> {
        let translation_config = self.config.translation.clone();
        let translator = TranslationService::new(translation_config.clone())
            .context("Failed to create translation service")?;
        let scorer = ProviderScorer::new(&translation_config)
            .context("Failed to create sentiment scorer")?;

        info!(
            "Using {} ({}) for {} -> {}",
            translation_config.provider.display_name(),
            translation_config.get_model(),
            self.config.source_language,
            self.config.target_language
        );

        self.preflight(translator.provider()).await?;

        let result = self.analyze_source(&source, &translator, &scorer).await?;
        println!("{}", self.render(&result, format)?);
        Ok(())
    }

    /// Fail fast when the configured provider cannot be reached
    pub async fn preflight(&self, provider: &ProviderClient) -> Result<()> {
        provider.test_connection().await
            .with_context(|| format!("{} provider is not reachable", provider.name()))?;
        debug!("{} provider is reachable", provider.name());
        Ok(())
    }

    /// Preview shown to the user for uploaded files, `None` for typed text
    pub fn file_preview(&self, source: &InputSource, content: &str) -> Option<String> {
        source.is_file()
            .then(|| input::preview(content, self.config.analysis.preview_chars))
    }

    /// Load the input, reject blank text and run the pipeline
    pub async fn analyze_source<T, S>(
        &self,
        source: &InputSource,
        translator: &T,
        scorer: &S,
    ) -> Result<AnalysisResult, AnalysisError>
    where
        T: Translator + ?Sized,
        S: SentimentScorer + ?Sized,
    {
        let content = source.load()?;
        // stderr keeps stdout clean for --json
        if let Some(preview) = self.file_preview(source, &content) {
            eprintln!("File content preview:\n{}\n", preview);
        }

        let text = match input::require_text(&content) {
            Ok(text) => text,
            Err(e) => {
                warn!("{}", e);
                return Err(e);
            }
        };

        let analyzer = TextAnalyzer::new(translator, scorer)
            .languages(&self.config.source_language, &self.config.target_language)
            .translation_timeout(Duration::from_secs(self.config.translation.get_timeout_secs()));

        let spinner = Self::spinner("Analyzing text...");
        let result = analyzer.analyze(text).await;
        spinner.finish_and_clear();

        result
    }

    /// Render a result in the requested format
    pub fn render(&self, result: &AnalysisResult, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => report::render_text(result, &self.config.analysis)
                .context("Failed to render text report"),
            OutputFormat::Json => report::render_json(result).context("Failed to serialize analysis result"),
        }
    }

    fn spinner(message: &'static str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner
    }
}
