//! Extractive summarization: segmentation, frequency scoring, selection.

pub mod frequency;
pub mod segment;
pub mod selector;

use tracing::debug;

use crate::config::SummarizeConfig;
use frequency::{DocumentFrequencies, Stopwords};

/// Returned for empty or whitespace-only input instead of an error.
pub const NO_CONTENT: &str = "No content available";

/// Facade over the summarization pipeline.
pub struct Summarizer {
    target_sentences: usize,
    stopwords: Stopwords,
}

impl Summarizer {
    pub fn new(config: &SummarizeConfig) -> Self {
        Self {
            target_sentences: config.target_sentences,
            stopwords: Stopwords::with_extras(&config.extra_stopwords),
        }
    }

    /// Override the configured sentence target.
    pub fn with_target(mut self, target: usize) -> Self {
        self.target_sentences = target;
        self
    }

    /// Produce an extractive summary of `text`.
    ///
    /// Total over its domain: degenerate input maps to [`NO_CONTENT`],
    /// never an error.
    pub fn summarize(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return NO_CONTENT.to_string();
        }

        let clean = normalize_whitespace(text);
        let sentences = segment::split_sentences(&clean);
        if sentences.is_empty() {
            return NO_CONTENT.to_string();
        }

        let freqs = DocumentFrequencies::build(&clean, &self.stopwords);
        let summary = selector::select(&sentences, &freqs, &self.stopwords, self.target_sentences);

        debug!(
            input_chars = clean.chars().count(),
            summary_chars = summary.chars().count(),
            "summary generated"
        );

        summary
    }
}

/// Collapse whitespace runs to single spaces and trim.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarizer(target: usize) -> Summarizer {
        Summarizer::new(&SummarizeConfig {
            target_sentences: target,
            extra_stopwords: Vec::new(),
        })
    }

    #[test]
    fn empty_input_yields_sentinel() {
        assert_eq!(summarizer(10).summarize(""), NO_CONTENT);
        assert_eq!(summarizer(10).summarize("   \n\t "), NO_CONTENT);
    }

    #[test]
    fn whitespace_is_normalized_before_segmentation() {
        let summary = summarizer(10).summarize("Cats  sleep.\n\nDogs\tbark.");
        assert_eq!(summary, "Cats sleep. Dogs bark.");
    }

    #[test]
    fn target_override_applies() {
        let text = "Cats sleep. Cats hunt at night. Cats are independent animals that need little care.";
        let summary = summarizer(10).with_target(1).summarize(text);
        assert_eq!(summary, "Cats are independent animals that need little care.");
    }

    #[test]
    fn summarization_is_idempotent() {
        let text = "Travel is cheap. Flights drop in summer. Deals appear online every day.";
        let s = summarizer(2);
        assert_eq!(s.summarize(text), s.summarize(text));
    }
}
