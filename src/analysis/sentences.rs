//! Sentence segmentation and original/translation pairing

use once_cell::sync::Lazy;
use regex::Regex;

use super::model::SentencePair;

static TERMINATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("valid terminator pattern"));

/// Split on runs of `.`, `!` and `?`, trimming and dropping empty fragments
pub fn split_sentences(text: &str) -> Vec<&str> {
    TERMINATOR_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split both texts independently and pair them by position.
///
/// Pairs stop at the shorter of the two sentence lists.
pub fn segment_and_pair(original: &str, translated: &str) -> Vec<SentencePair> {
    pair_sentences(&split_sentences(original), &split_sentences(translated))
}

pub(crate) fn pair_sentences(original: &[&str], translated: &[&str]) -> Vec<SentencePair> {
    original
        .iter()
        .zip(translated.iter())
        .map(|(o, t)| SentencePair::new(*o, *t))
        .collect()
}
