/*!
 * Sentiment scoring capability.
 *
 * The pipeline only depends on `SentimentScorer`; `ProviderScorer` asks the
 * configured LLM for a polarity/subjectivity pair.
 */

use async_trait::async_trait;

use crate::analysis::SentimentScore;
use crate::errors::SentimentError;

pub use self::provider_scorer::ProviderScorer;

pub mod provider_scorer;

/// General-purpose sentiment analysis of English-like text
#[async_trait]
pub trait SentimentScorer: Send + Sync {
    async fn score(&self, text: &str) -> Result<SentimentScore, SentimentError>;
}

/// Reject NaN or infinite values and clamp the rest into range
pub fn validate_score(polarity: f64, subjectivity: f64) -> Result<SentimentScore, SentimentError> {
    if !polarity.is_finite() || !subjectivity.is_finite() {
        return Err(SentimentError::InvalidScore { polarity, subjectivity });
    }
    Ok(SentimentScore::clamped(polarity, subjectivity))
}
