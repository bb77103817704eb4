//! Whole-phrase lookup with fuzzy word-overlap matching.

use crate::lexicon::Lexicon;

/// Minimum word-overlap ratio for a fuzzy phrase match.
const OVERLAP_THRESHOLD: f64 = 0.5;

/// Probe the phrase table for the whole sentence.
///
/// Exact lookup on the lowercased sentence first. Otherwise the table
/// entry with the highest word overlap wins, provided the overlap exceeds
/// the threshold. Ties break deterministically: more words in the English
/// key wins, then the lexically smaller key (the table iterates keys in
/// ascending order and later equal candidates never replace the
/// incumbent). `None` means no phrase translation; the caller proceeds to
/// word-level translation.
pub fn match_phrase<'a>(lexicon: &'a Lexicon, sentence: &str) -> Option<&'a str> {
    let lowered = sentence.to_lowercase();
    let lowered = lowered.trim();

    if let Some(translation) = lexicon.phrase(lowered) {
        return Some(translation);
    }

    let query_words: Vec<&str> = lowered.split_whitespace().collect();
    if query_words.is_empty() {
        return None;
    }

    let mut best: Option<(f64, usize, &str)> = None;

    for (english, urdu) in lexicon.phrases() {
        let entry_words: Vec<&str> = english.split_whitespace().collect();
        let common = query_words
            .iter()
            .filter(|w| entry_words.contains(*w))
            .count();
        let overlap = common as f64 / query_words.len().max(entry_words.len()) as f64;

        if overlap <= OVERLAP_THRESHOLD {
            continue;
        }

        let better = match best {
            None => true,
            Some((best_overlap, best_len, _)) => {
                overlap > best_overlap || (overlap == best_overlap && entry_words.len() > best_len)
            }
        };
        if better {
            best = Some((overlap, entry_words.len(), urdu));
        }
    }

    best.map(|(_, _, urdu)| urdu)
}
