//! Per-token translation with n-gram context lookups and cross-sentence
//! case marking.

use crate::lexicon::Lexicon;

/// Urdu subject case marker (ergative).
const SUBJECT_MARKER: &str = "نے";
/// Urdu object case marker (accusative/dative).
const OBJECT_MARKER: &str = "کو";

/// Verb cue carried over from the previous sentence.
///
/// Built from the previous sentence's translated tokens and passed into
/// each sentence-translation call, so the context bleed is an explicit
/// accumulator rather than mutable state.
#[derive(Debug, Clone, Default)]
pub struct SentenceContext {
    pub verb: Option<String>,
}

impl SentenceContext {
    /// Scan a sentence's translated tokens backward; the first hit wins.
    /// A verb-suffixed token becomes the cue, while a subject indicator
    /// nearer the end ends the scan with no cue at all.
    pub fn from_translated_tokens(tokens: &[String], lexicon: &Lexicon) -> Self {
        for token in tokens.iter().rev() {
            if lexicon.is_subject_indicator(&clean_token(token)) {
                return Self::default();
            }
            if lexicon.has_verb_suffix(token) {
                return Self {
                    verb: Some(token.clone()),
                };
            }
        }
        Self::default()
    }
}

/// Lowercase a token and drop everything that is not alphanumeric.
pub(super) fn clean_token(word: &str) -> String {
    word.to_lowercase().chars().filter(|c| c.is_alphanumeric()).collect()
}

/// The non-alphanumeric characters of a token, in order.
fn punctuation_of(word: &str) -> String {
    word.chars().filter(|c| !c.is_alphanumeric()).collect()
}

/// Translate every token of a sentence.
///
/// Emits exactly one output unit per input token; a unit may contain
/// several Urdu words. Unknown tokens pass through with their original
/// surface form.
pub fn translate_words(
    lexicon: &Lexicon,
    words: &[&str],
    context: &SentenceContext,
) -> Vec<String> {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let prev = if i > 0 { Some(words[i - 1]) } else { None };
            let next = words.get(i + 1).copied();
            translate_token(lexicon, word, prev, next, context.verb.is_some())
        })
        .collect()
}

/// Resolve one token: 3-gram context rule, then 2-gram, then unigram
/// dictionary, then pass-through. Punctuation is stripped for the lookup
/// and reattached to the translation.
fn translate_token(
    lexicon: &Lexicon,
    word: &str,
    prev: Option<&str>,
    next: Option<&str>,
    verb_context: bool,
) -> String {
    let cleaned = clean_token(word);
    let punctuation = punctuation_of(word);
    let prev_clean = prev.map(clean_token).unwrap_or_default();
    let next_clean = next.map(clean_token).unwrap_or_default();

    let trigram: String = [prev_clean.as_str(), cleaned.as_str(), next_clean.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if let Some(translation) = lexicon.context_rule(&trigram) {
        return format!("{}{}", translation, punctuation);
    }

    if !prev_clean.is_empty() {
        let bigram = format!("{} {}", prev_clean, cleaned);
        if let Some(translation) = lexicon.two_word(&bigram) {
            return format!("{}{}", translation, punctuation);
        }
    }

    match lexicon.word(&cleaned) {
        Some(translation) => {
            if verb_context {
                if lexicon.is_subject_indicator(translation) {
                    return format!("{} {}{}", translation, SUBJECT_MARKER, punctuation);
                }
                if lexicon.is_object_indicator(translation) {
                    return format!("{} {}{}", translation, OBJECT_MARKER, punctuation);
                }
            }
            format!("{}{}", translation, punctuation)
        }
        None => word.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Lexicon {
        Lexicon::new(
            &[],
            &[("you can", "آپ کر سکتے ہیں"), ("was going home", "گھر جا رہا تھا")],
            &[("best way", "بہترین طریقہ")],
            &[
                ("the", "یہ"),
                ("cat", "بلی"),
                ("best", "بہترین"),
                ("you", "آپ"),
                ("can", "سکتا ہے"),
                ("travel", "سفر"),
            ],
            &["ہے"],
            &["یہ", "آپ"],
            &["سفر"],
        )
    }

    #[test]
    fn trigram_beats_shorter_lookups() {
        let lexicon = fixture();
        let units = translate_words(
            &lexicon,
            &["was", "going", "home"],
            &SentenceContext::default(),
        );
        assert_eq!(units[1], "گھر جا رہا تھا");
    }

    #[test]
    fn bigram_applies_when_trigram_misses() {
        let lexicon = fixture();
        let units = translate_words(&lexicon, &["best", "way"], &SentenceContext::default());
        assert_eq!(units[1], "بہترین طریقہ");
    }

    #[test]
    fn sentence_initial_context_rule_still_fires() {
        // The trigram key for the first token has no phantom neighbor from
        // the previous sentence's subject.
        let lexicon = fixture();
        let units = translate_words(&lexicon, &["you", "can"], &SentenceContext::default());
        assert_eq!(units[0], "آپ کر سکتے ہیں");
    }

    #[test]
    fn unknown_tokens_pass_through_with_punctuation_intact() {
        let lexicon = fixture();
        let units = translate_words(&lexicon, &["the", "dog,", "barked"], &SentenceContext::default());
        assert_eq!(units, vec!["یہ", "dog,", "barked"]);
    }

    #[test]
    fn output_unit_count_equals_input_token_count() {
        let lexicon = fixture();
        let words = ["the", "cat", "sat", "on", "the", "mat."];
        let units = translate_words(&lexicon, &words, &SentenceContext::default());
        assert_eq!(units.len(), words.len());
    }

    #[test]
    fn verb_context_appends_subject_marker() {
        let lexicon = fixture();
        let context = SentenceContext {
            verb: Some("رہا ہے".to_string()),
        };
        let units = translate_words(&lexicon, &["the", "cat"], &context);
        assert_eq!(units[0], "یہ نے");
    }

    #[test]
    fn verb_context_appends_object_marker() {
        let lexicon = fixture();
        let context = SentenceContext {
            verb: Some("ہے".to_string()),
        };
        let units = translate_words(&lexicon, &["travel", "word"], &context);
        assert_eq!(units[0], "سفر کو");
    }

    #[test]
    fn no_markers_without_verb_context() {
        let lexicon = fixture();
        let units = translate_words(&lexicon, &["the", "cat"], &SentenceContext::default());
        assert_eq!(units, vec!["یہ", "بلی"]);
    }

    #[test]
    fn context_accumulator_finds_trailing_verb() {
        let lexicon = fixture();
        let tokens = vec!["سفر".to_string(), "رہا ہے".to_string()];
        let context = SentenceContext::from_translated_tokens(&tokens, &lexicon);
        assert_eq!(context.verb.as_deref(), Some("رہا ہے"));
    }

    #[test]
    fn later_subject_indicator_clears_the_verb_cue() {
        let lexicon = fixture();
        let tokens = vec!["رہا ہے".to_string(), "یہ".to_string()];
        let context = SentenceContext::from_translated_tokens(&tokens, &lexicon);
        assert!(context.verb.is_none());
    }
}
