/*!
 * Analysis orchestrator.
 *
 * Runs one analysis from raw text to `AnalysisResult`: translate, score the
 * whole translation, pair sentences, count words, score each sentence.
 * Holds no state between calls.
 */

use log::{debug, info, warn};
use std::time::Duration;

use crate::errors::{AnalysisError, SentimentError};
use crate::sentiment::{validate_score, SentimentScorer};
use crate::translation::{translate_or_fallback, Translator};
use super::frequency::count_words;
use super::model::{AnalysisResult, AnalysisWarning, SentimentScore};
use super::sentences::{pair_sentences, split_sentences};

/// Text analyzer over an injected translator and sentiment scorer
pub struct TextAnalyzer<'a, T: Translator + ?Sized, S: SentimentScorer + ?Sized> {
    translator: &'a T,
    scorer: &'a S,
    source_language: String,
    target_language: String,
    translation_timeout: Option<Duration>,
}

impl<'a, T: Translator + ?Sized, S: SentimentScorer + ?Sized> TextAnalyzer<'a, T, S> {
    /// Create an analyzer translating Spanish to English with no timeout
    pub fn new(translator: &'a T, scorer: &'a S) -> Self {
        Self {
            translator,
            scorer,
            source_language: "es".to_string(),
            target_language: "en".to_string(),
            translation_timeout: None,
        }
    }

    /// Set the language pair
    pub fn languages(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.source_language = source.into();
        self.target_language = target.into();
        self
    }

    /// Bound the translation call; elapsing falls back to the original text
    pub fn translation_timeout(mut self, timeout: Duration) -> Self {
        self.translation_timeout = Some(timeout);
        self
    }

    /// Analyze `raw_text`.
    ///
    /// Fails only on blank input or when the whole translated text cannot be
    /// scored. Translation failures fall back to the original text and are
    /// recorded in `warnings`; per-sentence scoring failures leave that
    /// sentence without a score.
    pub async fn analyze(&self, raw_text: &str) -> Result<AnalysisResult, AnalysisError> {
        if raw_text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let mut warnings = Vec::new();

        let outcome = translate_or_fallback(
            self.translator,
            raw_text,
            &self.source_language,
            &self.target_language,
            self.translation_timeout,
        )
        .await;
        if let Some(failure) = &outcome.failure {
            warnings.push(AnalysisWarning::TranslationFailed { message: failure.to_string() });
        }
        let translated_text = outcome.text;

        let sentiment = self.score(&translated_text).await?;

        let original_sentences = split_sentences(raw_text);
        let translated_sentences = split_sentences(&translated_text);
        if original_sentences.len() != translated_sentences.len() {
            warn!(
                "Sentence count mismatch: {} original vs {} translated, pairing the first {}",
                original_sentences.len(),
                translated_sentences.len(),
                original_sentences.len().min(translated_sentences.len())
            );
            warnings.push(AnalysisWarning::SentenceCountMismatch {
                original: original_sentences.len(),
                translated: translated_sentences.len(),
            });
        }
        let mut sentences = pair_sentences(&original_sentences, &translated_sentences);

        let (word_frequency, tokens) = count_words(&translated_text);

        for (index, pair) in sentences.iter_mut().enumerate() {
            match self.score(&pair.translated).await {
                Ok(score) => pair.sentiment = Some(score),
                Err(e) => debug!("Scoring sentence {} failed, leaving it unscored: {}", index + 1, e),
            }
        }

        info!(
            "Analysis complete: {} sentence pair(s), {} distinct word(s), polarity {:.2}",
            sentences.len(),
            word_frequency.len(),
            sentiment.polarity
        );

        Ok(AnalysisResult {
            sentiment,
            sentences,
            word_frequency,
            tokens,
            original_text: raw_text.to_string(),
            translated_text,
            warnings,
        })
    }

    async fn score(&self, text: &str) -> Result<SentimentScore, SentimentError> {
        let score = self.scorer.score(text).await?;
        validate_score(score.polarity, score.subjectivity)
    }
}
