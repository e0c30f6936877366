/*!
 * Text analysis pipeline.
 *
 * - `stopwords`: the combined Spanish + English stopword set
 * - `frequency`: tokenization and word frequency counting
 * - `sentences`: sentence segmentation and original/translation pairing
 * - `model`: result types handed to the presentation layer
 * - `pipeline`: the orchestrator tying translation, scoring and counting together
 */

pub use self::frequency::{count_words, tokenize};
pub use self::model::{AnalysisResult, AnalysisWarning, SentencePair, SentimentScore, WordFrequencyTable};
pub use self::pipeline::TextAnalyzer;
pub use self::sentences::{segment_and_pair, split_sentences};
pub use self::stopwords::StopwordSet;

pub mod frequency;
pub mod model;
pub mod pipeline;
pub mod sentences;
pub mod stopwords;
