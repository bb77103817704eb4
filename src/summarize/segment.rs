//! Sentence segmentation over whitespace-normalized text.

use once_cell::sync::Lazy;
use regex::Regex;

/// One sentence of the source document.
///
/// `index` is the position in the original document and is the sole
/// ordering key when a summary is reassembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    pub index: usize,
}

/// A run of characters ending in `.`, `!` or `?` followed by whitespace or
/// end of input.
static SENTENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.?!]+[.?!]+(\s|$)").expect("sentence pattern is valid"));

/// Split normalized text into ordered sentences.
///
/// If the text carries no terminal punctuation at all, the whole text is
/// one sentence. A trailing fragment without a terminator after at least
/// one terminated sentence is the tail of a truncated document and is
/// dropped. Returns an empty vec only for empty or whitespace-only input.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let sentences: Vec<Sentence> = SENTENCE
        .find_iter(trimmed)
        .enumerate()
        .map(|(index, m)| Sentence {
            text: m.as_str().trim().to_string(),
            index,
        })
        .collect();

    if sentences.is_empty() {
        return vec![Sentence {
            text: trimmed.to_string(),
            index: 0,
        }];
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminal_punctuation() {
        let sentences = split_sentences("Cats sleep. Cats hunt at night! Do cats dream?");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].text, "Cats sleep.");
        assert_eq!(sentences[1].text, "Cats hunt at night!");
        assert_eq!(sentences[2].text, "Do cats dream?");
        let indices: Vec<usize> = sentences.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn keeps_terminator_runs_together() {
        let sentences = split_sentences("Wait... what?! Done.");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].text, "Wait...");
        assert_eq!(sentences[1].text, "what?!");
    }

    #[test]
    fn whole_text_without_terminator_is_one_sentence() {
        let sentences = split_sentences("no punctuation here at all");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, "no punctuation here at all");
        assert_eq!(sentences[0].index, 0);
    }

    #[test]
    fn trailing_unterminated_fragment_is_dropped() {
        let sentences = split_sentences("Complete sentence. truncated tail without an end");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, "Complete sentence.");
    }

    #[test]
    fn empty_input_yields_no_sentences() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }
}
