/*!
 * Translation capability used by the analysis pipeline.
 *
 * - `Translator`: the capability boundary, implemented by any provider that
 *   can translate free text from a source to a target language
 * - `service`: the provider-backed implementation
 * - `translate_or_fallback`: the degrade-gracefully adapter the pipeline uses
 */

use async_trait::async_trait;
use log::{debug, warn};
use std::time::Duration;

use crate::errors::TranslationError;

pub use self::service::TranslationService;

pub mod service;

/// Free-text translation from one language to another
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError>;
}

/// Text produced by the adapter, plus the failure that caused a fallback
#[derive(Debug)]
pub struct TranslationOutcome {
    /// Translated text, or the original text if translation failed
    pub text: String,
    pub failure: Option<TranslationError>,
}

impl TranslationOutcome {
    pub fn is_fallback(&self) -> bool {
        self.failure.is_some()
    }
}

/// Translate `text`, returning the original text unchanged on any failure.
///
/// `timeout` bounds the whole call; elapsing counts as a failure.
pub async fn translate_or_fallback<T: Translator + ?Sized>(
    translator: &T,
    text: &str,
    source_language: &str,
    target_language: &str,
    timeout: Option<Duration>,
) -> TranslationOutcome {
    let call = translator.translate(text, source_language, target_language);
    let result = match timeout {
        Some(limit) => match tokio::time::timeout(limit, call).await {
            Ok(result) => result,
            Err(_) => Err(TranslationError::Timeout(limit.as_secs())),
        },
        None => call.await,
    };

    match result {
        Ok(translated) => {
            debug!("Translated {} chars into {} chars", text.chars().count(), translated.chars().count());
            TranslationOutcome { text: translated, failure: None }
        }
        Err(e) => {
            warn!("Translation failed, using original text: {}", e);
            TranslationOutcome { text: text.to_string(), failure: Some(e) }
        }
    }
}
