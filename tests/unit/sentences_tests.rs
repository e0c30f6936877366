/*!
 * Tests for sentence splitting and pairing
 */

use textpulse::analysis::{segment_and_pair, split_sentences};

/// Terminators are dropped and whitespace trimmed
#[test]
fn test_splitSentences_withMixedTerminators_shouldSplitAndTrim() {
    let parts = split_sentences("Me gusta este producto. Es excelente!  ¿Lo compras?");
    assert_eq!(parts, vec!["Me gusta este producto", "Es excelente", "¿Lo compras"]);
}

/// Empty and punctuation-only text has no sentences
#[test]
fn test_splitSentences_withNoContent_shouldReturnEmpty() {
    assert!(split_sentences("").is_empty());
    assert!(split_sentences(" ... !!! ?? ").is_empty());
}

/// Pairs are aligned by position
#[test]
fn test_segmentAndPair_withEqualCounts_shouldPairByPosition() {
    let pairs = segment_and_pair("Hola. Adiós.", "Hello. Goodbye.");
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].original, "Hola");
    assert_eq!(pairs[0].translated, "Hello");
    assert_eq!(pairs[1].original, "Adiós");
    assert_eq!(pairs[1].translated, "Goodbye");
    assert!(pairs.iter().all(|p| p.sentiment.is_none()));
}

/// Pairing stops at the shorter side
#[test]
fn test_segmentAndPair_withMismatchedCounts_shouldTruncateToShorter() {
    let pairs = segment_and_pair("Uno. Dos. Tres.", "One and two. Three.");
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[1].original, "Dos");
    assert_eq!(pairs[1].translated, "Three");

    assert!(segment_and_pair("Uno.", "").is_empty());
}
