//! Deterministic rule-based translation engine, the terminal cascade
//! stage.
//!
//! Per sentence: probe the phrase table, otherwise translate word by word
//! with n-gram context lookups and nudge the result toward SOV order.
//! Terminal punctuation is rewritten to the Urdu full stop. The engine is
//! total: every input produces a non-empty output.

pub mod phrase;
pub mod reorder;
pub mod word;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::summarize::segment::{split_sentences, Sentence};
use crate::summarize::normalize_whitespace;
use super::{Stage, TranslationStage};

use word::SentenceContext;

pub struct LocalEngine {
    lexicon: Lexicon,
}

impl LocalEngine {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Translate `text` sentence by sentence. Never fails; unknown tokens
    /// pass through unchanged.
    pub fn translate(&self, text: &str) -> String {
        let normalized = normalize_whitespace(text);
        let mut sentences = split_sentences(&normalized);
        if sentences.is_empty() {
            return text.to_string();
        }

        // The splitter drops a trailing fragment without a terminator; for
        // translation every token still needs an output counterpart, so
        // the tail comes back as a final sentence.
        if let Some(tail) = unterminated_tail(&normalized) {
            sentences.push(Sentence {
                text: tail.to_string(),
                index: sentences.len(),
            });
        }

        let mut context = SentenceContext::default();
        let mut translated_sentences = Vec::with_capacity(sentences.len());

        for sentence in &sentences {
            let (body, terminals) = detach_terminals(&sentence.text);

            let units: Vec<String> = match phrase::match_phrase(&self.lexicon, body) {
                Some(translation) => {
                    debug!(sentence = sentence.index, "phrase table hit");
                    vec![translation.to_string()]
                }
                None => {
                    let words: Vec<&str> = body.split_whitespace().collect();
                    let translated = word::translate_words(&self.lexicon, &words, &context);
                    reorder::reorder(&self.lexicon, translated)
                }
            };

            context = SentenceContext::from_translated_tokens(&units, &self.lexicon);

            translated_sentences.push(format!("{}{}", units.join(" "), urduize_terminals(terminals)));
        }

        translated_sentences.join(" ")
    }
}

/// Text after the last terminal punctuation mark, if any remains.
fn unterminated_tail(text: &str) -> Option<&str> {
    let last = text.rfind(['.', '!', '?'])?;
    let tail = text[last + 1..].trim();
    (!tail.is_empty()).then_some(tail)
}

/// Split a sentence into its body and its trailing terminal-punctuation
/// run.
fn detach_terminals(sentence: &str) -> (&str, &str) {
    let body = sentence.trim_end_matches(['.', '!', '?']);
    (body.trim_end(), &sentence[body.len()..])
}

/// Rewrite `.`, `!` and `?` to the Urdu full stop, keeping anything else.
fn urduize_terminals(terminals: &str) -> String {
    terminals
        .chars()
        .map(|c| if matches!(c, '.' | '!' | '?') { '۔' } else { c })
        .collect()
}

/// Cascade adapter around [`LocalEngine`].
pub struct LocalStage {
    engine: LocalEngine,
}

impl LocalStage {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            engine: LocalEngine::new(lexicon),
        }
    }
}

#[async_trait]
impl TranslationStage for LocalStage {
    fn stage(&self) -> Stage {
        Stage::Local
    }

    async fn attempt(&self, text: &str) -> Result<String> {
        Ok(self.engine.translate(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Lexicon {
        Lexicon::new(
            &[("travel tips", "سفری تجاویز")],
            &[],
            &[],
            &[
                ("the", "یہ"),
                ("travel", "سفر"),
                ("is", "ہے"),
                ("cheap", "سستا"),
                ("cat", "بلی"),
            ],
            &["ہے"],
            &["یہ"],
            &[],
        )
    }

    #[test]
    fn unknown_word_passes_through_and_terminator_is_rewritten() {
        let engine = LocalEngine::new(Lexicon::new(
            &[],
            &[],
            &[],
            &[("the", "یہ")],
            &[],
            &[],
            &[],
        ));
        let translated = engine.translate("The cat sat.");
        assert_eq!(translated, "یہ cat sat۔");
    }

    #[test]
    fn phrase_hit_replaces_the_whole_sentence() {
        let engine = LocalEngine::new(fixture());
        assert_eq!(engine.translate("Travel tips."), "سفری تجاویز۔");
    }

    #[test]
    fn terminator_runs_are_rewritten_per_character() {
        let engine = LocalEngine::new(fixture());
        assert_eq!(engine.translate("The cat?!"), "یہ بلی۔۔");
    }

    #[test]
    fn verb_cue_bleeds_into_the_next_sentence() {
        // Sentence one ends in a verb-suffixed token; the next sentence's
        // subject-translating token receives the ergative marker.
        let engine = LocalEngine::new(fixture());
        let translated = engine.translate("Travel is cheap. The cat slept.");
        assert!(translated.contains("یہ نے"), "got: {}", translated);
    }

    #[test]
    fn local_translation_is_idempotent_over_invocations() {
        let engine = LocalEngine::new(fixture());
        let text = "Travel is cheap. The cat slept well.";
        assert_eq!(engine.translate(text), engine.translate(text));
    }

    #[test]
    fn output_is_never_empty_for_non_empty_input() {
        let engine = LocalEngine::new(Lexicon::new(&[], &[], &[], &[], &[], &[], &[]));
        let translated = engine.translate("completely unknown words here.");
        assert!(!translated.trim().is_empty());
    }

    #[test]
    fn trailing_fragment_after_a_terminated_sentence_is_translated() {
        let engine = LocalEngine::new(fixture());
        let translated = engine.translate("The cat sat. the tail is cheap");
        assert_eq!(translated, "یہ بلی sat۔ یہ tail سستا ہے");
    }

    #[test]
    fn no_terminator_input_still_translates() {
        let engine = LocalEngine::new(fixture());
        assert_eq!(engine.translate("the cat"), "یہ بلی");
    }
}
