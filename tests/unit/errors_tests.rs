/*!
 * Tests for error types and conversions
 */

use textpulse::errors::{AnalysisError, ProviderError, SentimentError, TranslationError};

/// Auth statuses map to authentication errors
#[test]
fn test_providerError_fromStatus_shouldClassifyAuthFailures() {
    assert!(matches!(ProviderError::from_status(401, "bad key"), ProviderError::AuthenticationError(_)));
    assert!(matches!(ProviderError::from_status(403, "forbidden"), ProviderError::AuthenticationError(_)));
    match ProviderError::from_status(500, "boom") {
        ProviderError::ApiError { status_code, message } => {
            assert_eq!(status_code, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

/// Provider errors convert into translation and sentiment errors
#[test]
fn test_providerError_conversion_shouldWrapInStageErrors() {
    let translation: TranslationError = ProviderError::ConnectionError("down".to_string()).into();
    assert_eq!(translation.to_string(), "Provider error: Connection error: down");

    let sentiment: SentimentError = ProviderError::ParseError("bad json".to_string()).into();
    assert!(matches!(sentiment, SentimentError::Provider(ProviderError::ParseError(_))));
}

/// Scoring failures abort the analysis
#[test]
fn test_sentimentError_conversion_shouldBecomeScoringError() {
    let err: AnalysisError = SentimentError::Parse("nope".to_string()).into();
    assert!(matches!(err, AnalysisError::Scoring(_)));
    assert_eq!(err.to_string(), "Sentiment scoring failed: Failed to parse sentiment score: nope");
}

/// Invalid UTF-8 converts into a decode error
#[test]
fn test_fromUtf8Error_conversion_shouldBecomeDecodeError() {
    let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
    let err: AnalysisError = utf8_err.into();
    assert!(matches!(err, AnalysisError::Decode(_)));
}

/// Truncated translations name the token limit
#[test]
fn test_translationError_truncated_shouldMentionLimit() {
    let err = TranslationError::Truncated { max_tokens: 2048 };
    assert_eq!(err.to_string(), "Translation was cut off at the 2048 token limit");
}
