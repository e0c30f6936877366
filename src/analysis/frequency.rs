//! Tokenization and word frequency counting

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use super::model::WordFrequencyTable;
use super::stopwords::StopwordSet;

/// Tokens of this many characters or fewer are ignored
pub const MIN_WORD_CHARS: usize = 2;

// Letters, numbers and underscore. Combining marks are not word characters,
// so a decomposed accent splits the word.
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("valid word pattern"));

/// Lowercase `text` and yield its runs of word characters
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Whether a lowercase token should be counted
pub fn is_countable(token: &str, stopwords: &StopwordSet) -> bool {
    token.chars().count() > MIN_WORD_CHARS && !stopwords.contains(token)
}

/// Count words of `text` against the combined stopword set.
///
/// Returns the frequency table and the filtered tokens in text order.
pub fn count_words(text: &str) -> (WordFrequencyTable, Vec<String>) {
    count_words_with(text, StopwordSet::combined())
}

/// Count words of `text` against a specific stopword set
pub fn count_words_with(text: &str, stopwords: &StopwordSet) -> (WordFrequencyTable, Vec<String>) {
    let tokens: Vec<String> = tokenize(text)
        .into_iter()
        .filter(|t| is_countable(t, stopwords))
        .collect();

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for token in &tokens {
        match index.get(token.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token.as_str(), counts.len());
                counts.push((token.clone(), 1));
            }
        }
    }

    (WordFrequencyTable::from_first_seen(counts), tokens)
}
