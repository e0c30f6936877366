/*!
 * Terminal and JSON rendering of an analysis result.
 *
 * Banding lives here, not in the pipeline: the result carries raw scores and
 * each renderer decides how to label them.
 */

use serde::Serialize;
use std::fmt::{self, Write};

use crate::analysis::{AnalysisResult, SentimentScore};
use crate::app_config::AnalysisConfig;

const POLARITY_THRESHOLD: f64 = 0.05;
const SUBJECTIVITY_THRESHOLD: f64 = 0.5;
const GAUGE_WIDTH: usize = 20;

/// Polarity label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentBand {
    Positive,
    Negative,
    Neutral,
}

impl SentimentBand {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POLARITY_THRESHOLD {
            Self::Positive
        } else if polarity < -POLARITY_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Positive => "😊",
            Self::Negative => "😟",
            Self::Neutral => "😐",
        }
    }
}

/// Subjectivity label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectivityBand {
    High,
    Low,
}

impl SubjectivityBand {
    pub fn from_subjectivity(subjectivity: f64) -> Self {
        if subjectivity > SUBJECTIVITY_THRESHOLD {
            Self::High
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High subjectivity",
            Self::Low => "Low subjectivity",
        }
    }
}

/// Map polarity from [-1, 1] onto [0, 1] for a progress gauge
pub fn normalized_polarity(polarity: f64) -> f64 {
    ((polarity + 1.0) / 2.0).clamp(0.0, 1.0)
}

fn gauge(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * GAUGE_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(GAUGE_WIDTH - filled))
}

fn score_badge(score: &SentimentScore) -> String {
    let band = SentimentBand::from_polarity(score.polarity);
    format!("{} {} ({:.2})", band.emoji(), band.label(), score.polarity)
}

/// Render a human-readable report
pub fn render_text(result: &AnalysisResult, settings: &AnalysisConfig) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_text(&mut out, result, settings)?;
    Ok(out)
}

fn write_text(out: &mut impl Write, result: &AnalysisResult, settings: &AnalysisConfig) -> fmt::Result {
    let score = &result.sentiment;
    let subjectivity = SubjectivityBand::from_subjectivity(score.subjectivity);

    writeln!(out, "== Sentiment and subjectivity ==")?;
    writeln!(out, "Sentiment:    {} {}", gauge(normalized_polarity(score.polarity)), score_badge(score))?;
    writeln!(
        out,
        "Subjectivity: {} {} ({:.2})",
        gauge(score.subjectivity),
        subjectivity.label(),
        score.subjectivity
    )?;

    for warning in &result.warnings {
        writeln!(out, "Warning: {}", warning)?;
    }

    writeln!(out)?;
    writeln!(out, "== Most frequent words ==")?;
    let top = result.word_frequency.top(settings.top_words);
    if top.is_empty() {
        writeln!(out, "(no words counted)")?;
    } else {
        let width = top.iter().map(|(w, _)| w.chars().count()).max().unwrap_or(0);
        let max_count = top.first().map(|(_, c)| *c).unwrap_or(1).max(1);
        for (word, count) in top {
            let bar = "#".repeat((count * GAUGE_WIDTH).div_ceil(max_count));
            writeln!(out, "{:<width$}  {:>4}  {}", word, count, bar, width = width)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "== Translated text ==")?;
    writeln!(out, "Original:\n{}", result.original_text.trim_end())?;
    writeln!(out, "Translation:\n{}", result.translated_text.trim_end())?;

    writeln!(out)?;
    writeln!(out, "== Sentence analysis ==")?;
    if result.sentences.is_empty() {
        writeln!(out, "No sentences detected.")?;
    }
    for (i, pair) in result.sentences.iter().take(settings.max_sentences).enumerate() {
        match &pair.sentiment {
            Some(sentence_score) => {
                let band = SentimentBand::from_polarity(sentence_score.polarity);
                writeln!(out, "{}. {} Original: \"{}\"", i + 1, band.emoji(), pair.original)?;
                writeln!(
                    out,
                    "   Translation: \"{}\" (Sentiment: {:.2})",
                    pair.translated, sentence_score.polarity
                )?;
            }
            None => {
                writeln!(out, "{}. Original: \"{}\"", i + 1, pair.original)?;
                writeln!(out, "   Translation: \"{}\"", pair.translated)?;
            }
        }
    }
    if result.sentences.len() > settings.max_sentences {
        writeln!(out, "... {} more sentence(s)", result.sentences.len() - settings.max_sentences)?;
    }

    Ok(())
}

/// JSON view of a result with the bands a UI would show
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a AnalysisResult,
    sentiment_band: SentimentBand,
    subjectivity_band: SubjectivityBand,
}

/// Render the result as pretty JSON
pub fn render_json(result: &AnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        result,
        sentiment_band: SentimentBand::from_polarity(result.sentiment.polarity),
        subjectivity_band: SubjectivityBand::from_subjectivity(result.sentiment.subjectivity),
    })
}
