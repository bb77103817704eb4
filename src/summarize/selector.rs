//! Frequency-and-diversity sentence scoring and selection.

use tracing::debug;

use super::frequency::{qualifying_tokens, DocumentFrequencies, Stopwords};
use super::segment::Sentence;

/// Score boost per distinct topic token a sentence covers.
const DIVERSITY_BONUS: u32 = 10;

#[derive(Debug, Clone)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    pub score: u32,
}

/// Score one sentence: summed document frequency of every qualifying token
/// occurrence, plus the diversity bonus for each distinct topic token.
pub fn score_sentence(
    sentence: &Sentence,
    freqs: &DocumentFrequencies,
    stopwords: &Stopwords,
) -> u32 {
    let tokens = qualifying_tokens(&sentence.text, stopwords);

    let base: u32 = tokens.iter().map(|t| freqs.frequency(t)).sum();

    let mut seen: Vec<&str> = Vec::new();
    for token in &tokens {
        if freqs.is_topic(token) && !seen.contains(&token.as_str()) {
            seen.push(token);
        }
    }

    base + DIVERSITY_BONUS * seen.len() as u32
}

/// Pick `min(target, N)` unique sentences by descending score and return
/// them re-joined in original document order.
pub fn select(
    sentences: &[Sentence],
    freqs: &DocumentFrequencies,
    stopwords: &Stopwords,
    target: usize,
) -> String {
    let mut scored: Vec<ScoredSentence> = sentences
        .iter()
        .map(|s| ScoredSentence {
            sentence: s.clone(),
            score: score_sentence(s, freqs, stopwords),
        })
        .collect();

    // Stable sort keeps document order among equal scores.
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    let take = target.min(sentences.len());
    let mut chosen: Vec<&ScoredSentence> = Vec::new();

    // Sentence indices are unique, so one pass over the ranking fills
    // every slot.
    for candidate in &scored {
        if chosen.len() >= take {
            break;
        }
        if !chosen.iter().any(|c| c.sentence.index == candidate.sentence.index) {
            chosen.push(candidate);
        }
    }

    chosen.sort_by_key(|c| c.sentence.index);

    debug!(
        selected = chosen.len(),
        available = sentences.len(),
        "sentence selection complete"
    );

    let summary = chosen
        .iter()
        .map(|c| c.sentence.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    if summary.is_empty() {
        sentences
            .iter()
            .take(take)
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarize::segment::split_sentences;

    fn run(text: &str, target: usize) -> String {
        let stopwords = Stopwords::default();
        let sentences = split_sentences(text);
        let freqs = DocumentFrequencies::build(text, &stopwords);
        select(&sentences, &freqs, &stopwords, target)
    }

    #[test]
    fn cats_document_picks_two_highest_in_original_order() {
        let text = "Cats sleep. Cats hunt at night. Cats are independent animals that need little care.";
        let stopwords = Stopwords::default();
        let freqs = DocumentFrequencies::build(text, &stopwords);
        assert_eq!(freqs.frequency("cats"), 3);

        // The two longer sentences cover more topics and outscore "Cats sleep."
        let summary = run(text, 2);
        assert_eq!(
            summary,
            "Cats hunt at night. Cats are independent animals that need little care."
        );
    }

    #[test]
    fn selection_never_exceeds_available_sentences() {
        let summary = run("One sentence. Two sentences.", 10);
        assert_eq!(summary, "One sentence. Two sentences.");
    }

    #[test]
    fn chosen_indices_are_strictly_increasing() {
        let text = "Alpha beta gamma. Delta epsilon. Zeta eta theta iota. Kappa lambda. Mu nu xi omicron.";
        let stopwords = Stopwords::default();
        let sentences = split_sentences(text);
        let freqs = DocumentFrequencies::build(text, &stopwords);

        let summary = select(&sentences, &freqs, &stopwords, 3);
        let mut last_pos = 0;
        let mut count = 0;
        for sentence in &sentences {
            if let Some(pos) = summary.find(&sentence.text) {
                assert!(pos >= last_pos);
                last_pos = pos;
                count += 1;
            }
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn diversity_bonus_outweighs_repeated_high_frequency_words() {
        // Every content word occurs exactly once except "terms", repeated in
        // one sentence. The sentence covering four distinct words must rank
        // at or above the repetitive one.
        let text = "terms terms terms terms. Rivers mountains valleys forests.";
        let stopwords = Stopwords::default();
        let sentences = split_sentences(text);
        let freqs = DocumentFrequencies::build(text, &stopwords);

        let repetitive = score_sentence(&sentences[0], &freqs, &stopwords);
        let diverse = score_sentence(&sentences[1], &freqs, &stopwords);
        assert!(diverse >= repetitive);
    }

    #[test]
    fn selection_is_deterministic() {
        let text = "Cats sleep. Dogs bark. Birds sing. Fish swim.";
        let first = run(text, 2);
        let second = run(text, 2);
        assert_eq!(first, second);
    }
}
