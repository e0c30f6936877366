/*!
 * # textpulse - translate, score and count text
 *
 * A Rust library for quick analysis of short texts written in one language
 * and scored in another.
 *
 * ## Features
 *
 * - Translate the text with an LLM provider (Ollama, OpenAI, Anthropic, LM Studio)
 * - Overall and per-sentence sentiment (polarity and subjectivity)
 * - Original/translated sentence pairing
 * - Stopword-filtered word frequency
 * - Typed text or `txt`/`csv`/`md` uploads
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `analysis`: the pipeline (tokenizing, counting, sentence pairing, orchestration)
 * - `translation`: the `Translator` capability and its provider-backed service
 * - `sentiment`: the `SentimentScorer` capability and its provider-backed scorer
 * - `providers`: Client implementations for the LLM providers
 * - `input`: Reading typed text and uploaded files
 * - `report`: Terminal and JSON rendering
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![cfg_attr(test, allow(non_snake_case))]

// Public modules
pub mod analysis;
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod input;
pub mod language_utils;
pub mod providers;
pub mod report;
pub mod sentiment;
pub mod translation;

// Re-export main types for easier usage
pub use analysis::{AnalysisResult, SentencePair, SentimentScore, TextAnalyzer, WordFrequencyTable};
pub use app_config::Config;
pub use errors::{AnalysisError, ProviderError, SentimentError, TranslationError};
pub use sentiment::SentimentScorer;
pub use translation::{TranslationService, Translator};
