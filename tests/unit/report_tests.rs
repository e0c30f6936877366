/*!
 * Tests for terminal and JSON report rendering
 */

use textpulse::analysis::{count_words, AnalysisResult, AnalysisWarning, SentencePair, SentimentScore};
use textpulse::app_config::AnalysisConfig;
use textpulse::report::{render_json, render_text, SentimentBand};

fn sample_result() -> AnalysisResult {
    let translated = "I like this product. It's excellent.";
    let (word_frequency, tokens) = count_words(translated);
    let mut first = SentencePair::new("Me gusta este producto", "I like this product");
    first.sentiment = Some(SentimentScore { polarity: 0.6, subjectivity: 0.7 });
    let second = SentencePair::new("Es excelente", "It's excellent");

    AnalysisResult {
        sentiment: SentimentScore { polarity: 0.8, subjectivity: 0.9 },
        sentences: vec![first, second],
        word_frequency,
        tokens,
        original_text: "Me gusta este producto. Es excelente.".to_string(),
        translated_text: translated.to_string(),
        warnings: Vec::new(),
    }
}

/// The text report has every section
#[test]
fn test_renderText_withFullResult_shouldContainAllSections() {
    let report = render_text(&sample_result(), &AnalysisConfig::default()).unwrap();

    assert!(report.contains("Positive (0.80)"));
    assert!(report.contains("High subjectivity (0.90)"));
    assert!(report.contains("product"));
    assert!(report.contains("Original:\nMe gusta este producto. Es excelente."));
    assert!(report.contains("1. 😊 Original: \"Me gusta este producto\""));
    assert!(report.contains("(Sentiment: 0.60)"));
    // Unscored sentence has no score line
    assert!(report.contains("2. Original: \"Es excelente\""));
}

/// Sentence and word lists honor the configured limits
#[test]
fn test_renderText_withSmallLimits_shouldTruncateLists() {
    let settings = AnalysisConfig { top_words: 1, max_sentences: 1, preview_chars: 10 };
    let report = render_text(&sample_result(), &settings).unwrap();

    assert!(report.contains("like     1  ####################"));
    assert!(!report.contains("product     1"));
    assert!(!report.contains("2. Original"));
    assert!(report.contains("... 1 more sentence(s)"));
}

/// Warnings are printed
#[test]
fn test_renderText_withWarnings_shouldListThem() {
    let mut result = sample_result();
    result.warnings.push(AnalysisWarning::SentenceCountMismatch { original: 3, translated: 2 });
    let report = render_text(&result, &AnalysisConfig::default()).unwrap();
    assert!(report.contains("Warning: Original has 3 sentence(s) but translation has 2"));
}

/// Empty sentence lists say so
#[test]
fn test_renderText_withNoSentences_shouldSayNoneDetected() {
    let mut result = sample_result();
    result.sentences.clear();
    let report = render_text(&result, &AnalysisConfig::default()).unwrap();
    assert!(report.contains("No sentences detected."));
}

/// JSON carries the raw result and its bands
#[test]
fn test_renderJson_shouldIncludeBandsAndFields() {
    let json = render_json(&sample_result()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["sentiment_band"], "positive");
    assert_eq!(value["subjectivity_band"], "high");
    assert_eq!(value["sentiment"]["polarity"], 0.8);
    assert_eq!(value["sentences"].as_array().unwrap().len(), 2);
    assert!(value["sentences"][1].get("sentiment").is_none());
    assert_eq!(value["word_frequency"][0][0], "like");
}

/// Bands use exclusive thresholds
#[test]
fn test_sentimentBand_fromPolarity_shouldBandScores() {
    assert_eq!(SentimentBand::from_polarity(0.8), SentimentBand::Positive);
    assert_eq!(SentimentBand::from_polarity(0.0), SentimentBand::Neutral);
    assert_eq!(SentimentBand::from_polarity(-0.3), SentimentBand::Negative);
}
