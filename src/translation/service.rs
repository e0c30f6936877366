/*!
 * Provider-backed translation service.
 *
 * Sends the whole text to the configured LLM with a translation system
 * prompt. No retries and no caching: one analysis, one request.
 */

use async_trait::async_trait;
use log::debug;
use std::time::Instant;

use crate::app_config::TranslationConfig;
use crate::errors::{ProviderError, TranslationError};
use crate::language_utils;
use crate::providers::{Prompt, ProviderClient};
use super::Translator;

/// Main translation service
#[derive(Debug)]
pub struct TranslationService {
    /// Provider implementation
    provider: ProviderClient,

    /// Configuration for the translation service
    pub config: TranslationConfig,
}

impl TranslationService {
    /// Create a new translation service with the given configuration
    pub fn new(config: TranslationConfig) -> Result<Self, ProviderError> {
        let provider = ProviderClient::from_config(&config)?;
        Ok(Self { provider, config })
    }

    /// Create a service around an already built provider client
    pub fn with_provider(provider: ProviderClient, config: TranslationConfig) -> Self {
        Self { provider, config }
    }

    pub fn provider(&self) -> &ProviderClient {
        &self.provider
    }

    /// Render the system prompt for a language pair
    pub fn system_prompt(&self, source_language: &str, target_language: &str) -> String {
        let source_name = language_utils::get_language_name(source_language)
            .unwrap_or_else(|_| source_language.to_string());
        let target_name = language_utils::get_language_name(target_language)
            .unwrap_or_else(|_| target_language.to_string());

        self.config.common.system_prompt
            .replace("{source_language}", &source_name)
            .replace("{target_language}", &target_name)
    }
}

#[async_trait]
impl Translator for TranslationService {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        if language_codes_match_or_equal(source_language, target_language) {
            debug!("Source and target language are both {}, skipping translation", source_language);
            return Ok(text.to_string());
        }

        let prompt = Prompt {
            model: self.config.get_model(),
            system: self.system_prompt(source_language, target_language),
            user: text.to_string(),
            temperature: self.config.common.temperature,
            max_tokens: self.config.common.max_tokens,
        };

        let start_time = Instant::now();
        let completion = self.provider.prompt(&prompt).await?;
        debug!("{} translation received in {:?}", self.provider.name(), start_time.elapsed());

        if completion.truncated {
            return Err(TranslationError::Truncated { max_tokens: prompt.max_tokens });
        }

        let translated = completion.text.trim();
        if translated.is_empty() {
            return Err(TranslationError::EmptyResponse);
        }
        Ok(translated.to_string())
    }
}

fn language_codes_match_or_equal(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim()) || language_utils::language_codes_match(a, b)
}
