use async_trait::async_trait;
use log::trace;
use serde::Deserialize;

use crate::analysis::SentimentScore;
use crate::app_config::TranslationConfig;
use crate::errors::{ProviderError, SentimentError};
use crate::providers::{Prompt, ProviderClient};
use super::{validate_score, SentimentScorer};

/// Scores are short JSON objects; no need for the full translation budget
const SCORE_MAX_TOKENS: u32 = 64;

/// Shape of the JSON object the model is asked to return
#[derive(Debug, Deserialize)]
struct RawScore {
    polarity: f64,
    subjectivity: f64,
}

/// Sentiment scorer backed by an LLM provider
#[derive(Debug)]
pub struct ProviderScorer {
    provider: ProviderClient,
    model: String,
    system_prompt: String,
    temperature: f32,
}

impl ProviderScorer {
    /// Create a scorer for the active provider of a config
    pub fn new(config: &TranslationConfig) -> Result<Self, ProviderError> {
        Ok(Self::with_provider(ProviderClient::from_config(config)?, config))
    }

    /// Create a scorer around an already built provider client
    pub fn with_provider(provider: ProviderClient, config: &TranslationConfig) -> Self {
        Self {
            provider,
            model: config.get_model(),
            system_prompt: config.common.sentiment_prompt.clone(),
            temperature: config.common.temperature,
        }
    }
}

#[async_trait]
impl SentimentScorer for ProviderScorer {
    async fn score(&self, text: &str) -> Result<SentimentScore, SentimentError> {
        let prompt = Prompt {
            model: self.model.clone(),
            system: self.system_prompt.clone(),
            user: text.to_string(),
            temperature: self.temperature,
            max_tokens: SCORE_MAX_TOKENS,
        };

        let reply = self.provider.prompt(&prompt).await?;
        trace!("Sentiment reply: {}", reply.text);
        if reply.truncated {
            return Err(SentimentError::Parse(format!("reply cut off at {} tokens", SCORE_MAX_TOKENS)));
        }
        parse_score(&reply.text)
    }
}

/// Read a `{"polarity": .., "subjectivity": ..}` object out of a model reply.
///
/// Models like to wrap JSON in prose or code fences, so only the outermost
/// braces are parsed.
pub fn parse_score(reply: &str) -> Result<SentimentScore, SentimentError> {
    let start = reply.find('{');
    let end = reply.rfind('}');
    let json = match (start, end) {
        (Some(start), Some(end)) if start < end => &reply[start..=end],
        _ => return Err(SentimentError::Parse(format!("no JSON object in reply: {:?}", reply))),
    };

    let raw: RawScore = serde_json::from_str(json)
        .map_err(|e| SentimentError::Parse(e.to_string()))?;

    validate_score(raw.polarity, raw.subjectivity)
}
