/*!
 * Result types produced by an analysis run.
 *
 * Everything here is plain data: built once by the pipeline, then handed
 * to the presentation layer read-only.
 */

use serde::{Deserialize, Serialize};

/// Polarity and subjectivity of a span of text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// -1.0 (very negative) to 1.0 (very positive)
    pub polarity: f64,
    /// 0.0 (very objective) to 1.0 (very subjective)
    pub subjectivity: f64,
}

impl SentimentScore {
    pub const POLARITY_RANGE: (f64, f64) = (-1.0, 1.0);
    pub const SUBJECTIVITY_RANGE: (f64, f64) = (0.0, 1.0);

    /// Create a score, clamping both values into their documented ranges
    pub fn clamped(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(Self::POLARITY_RANGE.0, Self::POLARITY_RANGE.1),
            subjectivity: subjectivity.clamp(Self::SUBJECTIVITY_RANGE.0, Self::SUBJECTIVITY_RANGE.1),
        }
    }
}

/// An original sentence aligned with its translation by position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentencePair {
    pub original: String,
    pub translated: String,
    /// Score of the translated side; `None` when scoring that sentence failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentScore>,
}

impl SentencePair {
    pub fn new(original: impl Into<String>, translated: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            translated: translated.into(),
            sentiment: None,
        }
    }
}

/// Word counts ordered by descending count.
///
/// Ties keep the order in which words first appeared in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordFrequencyTable {
    entries: Vec<(String, usize)>,
}

impl WordFrequencyTable {
    /// Build a table from counts in first-occurrence order
    pub(crate) fn from_first_seen(mut entries: Vec<(String, usize)>) -> Self {
        // sort_by is stable, so equal counts stay in first-seen order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// The `n` most frequent words
    pub fn top(&self, n: usize) -> &[(String, usize)] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Count for a single word, if present
    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries.iter().find(|(w, _)| w == word).map(|(_, c)| *c)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }
}

/// Non-fatal conditions noticed while analyzing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisWarning {
    /// Translation failed and the original text was used instead
    TranslationFailed { message: String },
    /// Sentence counts differed; trailing sentences were dropped from pairing
    SentenceCountMismatch { original: usize, translated: usize },
}

impl std::fmt::Display for AnalysisWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TranslationFailed { message } => {
                write!(f, "Translation failed, analyzing the original text: {}", message)
            }
            Self::SentenceCountMismatch { original, translated } => write!(
                f,
                "Original has {} sentence(s) but translation has {}; only {} pair(s) shown",
                original,
                translated,
                original.min(translated)
            ),
        }
    }
}

/// Complete output of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Score of the full translated text
    pub sentiment: SentimentScore,
    pub sentences: Vec<SentencePair>,
    pub word_frequency: WordFrequencyTable,
    /// Filtered tokens in text order
    pub tokens: Vec<String>,
    pub original_text: String,
    pub translated_text: String,
    #[serde(default)]
    pub warnings: Vec<AnalysisWarning>,
}

impl AnalysisResult {
    /// True when the translation step fell back to the original text
    pub fn translation_failed(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, AnalysisWarning::TranslationFailed { .. }))
    }
}
