/*!
 * Tests for sentiment scoring
 */

use textpulse::app_config::TranslationConfig;
use textpulse::errors::SentimentError;
use textpulse::providers::mock::MockProvider;
use textpulse::providers::ProviderClient;
use textpulse::sentiment::{validate_score, ProviderScorer, SentimentScorer};

fn mock_scorer(provider: MockProvider) -> ProviderScorer {
    ProviderScorer::with_provider(ProviderClient::Mock(provider), &TranslationConfig::default())
}

/// A JSON reply becomes a score
#[tokio::test]
async fn test_providerScorer_withJsonReply_shouldParseScore() {
    let provider = MockProvider::working()
        .with_custom_response(|_| r#"{"polarity": 0.8, "subjectivity": 0.9}"#.to_string());
    let scorer = mock_scorer(provider.clone());

    let score = scorer.score("I like this product.").await.unwrap();
    assert_eq!(score.polarity, 0.8);
    assert_eq!(score.subjectivity, 0.9);
    assert_eq!(provider.request_count(), 1);
}

/// The scorer sends the sentiment prompt, not the translation prompt
#[tokio::test]
async fn test_providerScorer_shouldUseSentimentPrompt() {
    let provider = MockProvider::working().with_custom_response(|request| {
        if request.system.contains("sentiment") {
            r#"{"polarity": -0.4, "subjectivity": 0.2}"#.to_string()
        } else {
            "wrong prompt".to_string()
        }
    });
    let score = mock_scorer(provider).score("Terrible.").await.unwrap();
    assert_eq!(score.polarity, -0.4);
}

/// Prose replies are parse errors
#[tokio::test]
async fn test_providerScorer_withProseReply_shouldFail() {
    let provider = MockProvider::working().with_custom_response(|_| "It is positive.".to_string());
    let err = mock_scorer(provider).score("Nice").await.unwrap_err();
    assert!(matches!(err, SentimentError::Parse(_)));
}

/// Provider failures surface as provider errors
#[tokio::test]
async fn test_providerScorer_withFailingProvider_shouldReturnProviderError() {
    let err = mock_scorer(MockProvider::failing()).score("Nice").await.unwrap_err();
    assert!(matches!(err, SentimentError::Provider(_)));
}

/// A reply cut off at the token limit is not parsed
#[tokio::test]
async fn test_providerScorer_withTruncatedReply_shouldFail() {
    let provider = MockProvider::truncated()
        .with_custom_response(|_| r#"{"polarity": 0.8, "subjectivity": 0.9}"#.to_string());
    let err = mock_scorer(provider).score("Nice").await.unwrap_err();
    assert!(matches!(err, SentimentError::Parse(_)));
}

/// Non-finite values are rejected, others clamped
#[test]
fn test_validateScore_shouldRejectNonFiniteAndClamp() {
    assert!(matches!(validate_score(f64::NAN, 0.5), Err(SentimentError::InvalidScore { .. })));
    assert!(validate_score(0.1, f64::INFINITY).is_err());

    let score = validate_score(-1.5, 1.5).unwrap();
    assert_eq!(score.polarity, -1.0);
    assert_eq!(score.subjectivity, 1.0);
}
