/*!
 * End-to-end tests of the analysis pipeline with stub capabilities
 */

use std::time::Duration;

use textpulse::analysis::{AnalysisWarning, TextAnalyzer};
use textpulse::app_config::TranslationConfig;
use textpulse::errors::AnalysisError;
use textpulse::providers::mock::MockProvider;
use textpulse::providers::ProviderClient;
use textpulse::sentiment::ProviderScorer;
use textpulse::translation::TranslationService;
use crate::common::{self, KeywordScorer, StubScorer, StubTranslator};

/// Spanish review translated, scored and counted
#[tokio::test]
async fn test_analyze_withSpanishReview_shouldProduceFullResult() {
    common::init_logging();
    let translator = StubTranslator::fixed("I like this product. It's excellent.");
    let scorer = StubScorer::fixed(0.8, 0.75);

    let result = TextAnalyzer::new(&translator, &scorer)
        .analyze("Me gusta este producto. Es excelente.")
        .await
        .unwrap();

    assert_eq!(result.sentiment.polarity, 0.8);
    assert_eq!(result.sentences.len(), 2);
    assert_eq!(result.sentences[0].original, "Me gusta este producto");
    assert_eq!(result.sentences[0].translated, "I like this product");
    assert_eq!(result.sentences[1].original, "Es excelente");
    assert_eq!(result.sentences[1].translated, "It's excellent");
    assert!(result.sentences.iter().all(|p| p.sentiment.is_some()));

    assert_eq!(result.word_frequency.get("like"), Some(1));
    assert_eq!(result.word_frequency.get("product"), Some(1));
    assert_eq!(result.word_frequency.get("excellent"), Some(1));
    assert_eq!(result.word_frequency.get("this"), None);
    assert_eq!(result.tokens, vec!["like", "product", "excellent"]);

    assert!(result.warnings.is_empty());
    assert!(!result.translation_failed());
    // Whole text plus one call per sentence
    assert_eq!(scorer.calls(), 3);
}

/// Blank input is rejected before any provider call
#[tokio::test]
async fn test_analyze_withEmptyInput_shouldReturnEmptyInputError() {
    let translator = StubTranslator::fixed("unused");
    let scorer = StubScorer::fixed(0.0, 0.0);

    for input in ["", "   ", "\n\t"] {
        let err = TextAnalyzer::new(&translator, &scorer).analyze(input).await.unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyInput));
    }
    assert_eq!(scorer.calls(), 0);
}

/// Translation failure falls back to the original text
#[tokio::test]
async fn test_analyze_withFailingTranslator_shouldAnalyzeOriginalText() {
    common::init_logging();
    let translator = StubTranslator::Failing;
    let scorer = StubScorer::fixed(0.0, 0.2);

    let result = TextAnalyzer::new(&translator, &scorer).analyze("Hola mundo").await.unwrap();

    assert_eq!(result.translated_text, "Hola mundo");
    assert_eq!(result.original_text, "Hola mundo");
    assert!(result.translation_failed());
    assert!(matches!(result.warnings[0], AnalysisWarning::TranslationFailed { .. }));

    assert_eq!(result.word_frequency.get("hola"), Some(1));
    assert_eq!(result.word_frequency.get("mundo"), Some(1));
    assert_eq!(result.sentences.len(), 1);
    assert_eq!(result.sentences[0].original, result.sentences[0].translated);
}

/// One unscorable sentence is left without a score
#[tokio::test]
async fn test_analyze_withOneFailingSentence_shouldLeaveItUnscored() {
    let translator = StubTranslator::fixed("The food was good. The service was slow. We will return.");
    let scorer = StubScorer::fixed(0.3, 0.5).failing_on("The service was slow");

    let result = TextAnalyzer::new(&translator, &scorer)
        .analyze("La comida estaba buena. El servicio fue lento. Volveremos.")
        .await
        .unwrap();

    assert_eq!(result.sentences.len(), 3);
    assert!(result.sentences[0].sentiment.is_some());
    assert!(result.sentences[1].sentiment.is_none());
    assert!(result.sentences[2].sentiment.is_some());
    assert_eq!(result.sentiment.polarity, 0.3);
}

/// Failing to score the whole text aborts the analysis
#[tokio::test]
async fn test_analyze_withWholeTextScoringFailure_shouldReturnScoringError() {
    let translator = StubTranslator::fixed("Unscorable.");
    let scorer = StubScorer::fixed(0.0, 0.0).failing_on("Unscorable.");

    let err = TextAnalyzer::new(&translator, &scorer).analyze("Inevaluable.").await.unwrap_err();
    assert!(matches!(err, AnalysisError::Scoring(_)));
}

/// Differing sentence counts pair the shorter side and warn
#[tokio::test]
async fn test_analyze_withSentenceCountMismatch_shouldTruncateAndWarn() {
    let translator = StubTranslator::fixed("Good morning, how are you?");
    let scorer = StubScorer::fixed(0.1, 0.1);

    let result = TextAnalyzer::new(&translator, &scorer)
        .analyze("Buenos días. ¿Cómo estás?")
        .await
        .unwrap();

    assert_eq!(result.sentences.len(), 1);
    assert_eq!(
        result.warnings,
        vec![AnalysisWarning::SentenceCountMismatch { original: 2, translated: 1 }]
    );
}

/// Sentence scores follow each translated sentence
#[tokio::test]
async fn test_analyze_withMixedSentences_shouldScoreEachSentence() {
    let translator = StubTranslator::fixed("The hotel was terrible. The beach was excellent.");
    let scorer = KeywordScorer;

    let result = TextAnalyzer::new(&translator, &scorer)
        .analyze("El hotel fue terrible. La playa fue excelente.")
        .await
        .unwrap();

    let polarities: Vec<f64> = result.sentences.iter().filter_map(|p| p.sentiment).map(|s| s.polarity).collect();
    assert_eq!(polarities, vec![-0.7, 0.8]);
}

/// A slow translator is cut off by the timeout
#[tokio::test]
async fn test_analyze_withTranslationTimeout_shouldFallBack() {
    let translator = StubTranslator::Slow(Duration::from_millis(500), "Hello.".to_string());
    let scorer = StubScorer::fixed(0.0, 0.0);

    let result = TextAnalyzer::new(&translator, &scorer)
        .translation_timeout(Duration::from_millis(20))
        .analyze("Hola.")
        .await
        .unwrap();

    assert_eq!(result.translated_text, "Hola.");
    assert!(result.translation_failed());
}

/// Provider-backed translator and scorer over mock providers
#[tokio::test]
async fn test_analyze_withMockProviders_shouldRunThroughProviderClients() {
    let config = TranslationConfig::default();
    let translate_mock = MockProvider::working().with_custom_response(|_| "I like this product.".to_string());
    let score_mock = MockProvider::working()
        .with_custom_response(|_| r#"{"polarity": 0.5, "subjectivity": 0.4}"#.to_string());

    let translator = TranslationService::with_provider(ProviderClient::Mock(translate_mock.clone()), config.clone());
    let scorer = ProviderScorer::with_provider(ProviderClient::Mock(score_mock.clone()), &config);

    let result = TextAnalyzer::new(&translator, &scorer)
        .languages("es", "en")
        .analyze("Me gusta este producto.")
        .await
        .unwrap();

    assert_eq!(result.translated_text, "I like this product.");
    assert_eq!(result.sentiment.polarity, 0.5);
    assert_eq!(translate_mock.request_count(), 1);
    assert_eq!(score_mock.request_count(), 2);
}

/// A translation cut off at the token limit is not analyzed as complete
#[tokio::test]
async fn test_analyze_withTruncatedTranslation_shouldFallBackAndWarn() {
    common::init_logging();
    let config = TranslationConfig::default();
    let translate_mock = MockProvider::truncated()
        .with_custom_response(|_| "I like this product. It is exc".to_string());
    let translator = TranslationService::with_provider(ProviderClient::Mock(translate_mock), config);
    let scorer = StubScorer::fixed(0.4, 0.5);

    let result = TextAnalyzer::new(&translator, &scorer)
        .analyze("Me gusta este producto. Es excelente.")
        .await
        .unwrap();

    assert_eq!(result.translated_text, "Me gusta este producto. Es excelente.");
    assert!(result.translation_failed());
    assert_eq!(result.sentences.len(), 2);
    assert_eq!(result.word_frequency.get("excelente"), Some(1));
}
