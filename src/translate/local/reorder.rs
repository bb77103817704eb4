//! Heuristic repositioning of translated tokens toward SOV order.

use crate::lexicon::Lexicon;

use super::word::clean_token;

/// Nudge a translated token sequence toward subject-object-verb order.
///
/// Each unit is classified once, verb taking precedence over subject over
/// object. The last verb unit moves to the end of the sentence when not
/// already there; an object unit lying between the first subject and that
/// verb is relocated to immediately follow the subject. No-op for fewer
/// than three units or when no verb+subject pair exists. Best-effort
/// approximation, not a grammar.
pub fn reorder(lexicon: &Lexicon, units: Vec<String>) -> Vec<String> {
    if units.len() < 3 {
        return units;
    }

    let mut verbs: Vec<usize> = Vec::new();
    let mut subjects: Vec<usize> = Vec::new();
    let mut objects: Vec<usize> = Vec::new();

    for (index, unit) in units.iter().enumerate() {
        let cleaned = clean_token(unit);
        if lexicon.is_verb_indicator(&cleaned) || lexicon.has_verb_suffix(unit) {
            verbs.push(index);
        } else if lexicon.is_subject_indicator(&cleaned) {
            subjects.push(index);
        } else if lexicon.is_object_indicator(&cleaned) {
            objects.push(index);
        }
    }

    let (Some(&main_verb), Some(&first_subject)) = (verbs.last(), subjects.first()) else {
        return units;
    };

    let mut reordered = units;
    if main_verb < reordered.len() - 1 {
        let verb = reordered.remove(main_verb);
        reordered.push(verb);
    }

    // The guard keeps the original indices valid after the verb splice:
    // everything below main_verb is unshifted.
    if let Some(&first_object) = objects.first() {
        if first_object > first_subject && first_object < main_verb {
            let object = reordered.remove(first_object);
            reordered.insert(first_subject + 1, object);
        }
    }

    reordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Lexicon {
        Lexicon::new(
            &[],
            &[],
            &[],
            &[],
            &["ہے", "کرتا"],
            &["یہ", "وہ"],
            &["کو", "زندگی"],
        )
    }

    fn units(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn verb_moves_to_sentence_end() {
        let lexicon = fixture();
        let reordered = reorder(&lexicon, units(&["یہ", "ہے", "اچھا"]));
        assert_eq!(reordered, units(&["یہ", "اچھا", "ہے"]));
    }

    #[test]
    fn verb_already_last_is_untouched() {
        let lexicon = fixture();
        let reordered = reorder(&lexicon, units(&["یہ", "اچھا", "ہے"]));
        assert_eq!(reordered, units(&["یہ", "اچھا", "ہے"]));
    }

    #[test]
    fn object_between_subject_and_verb_relocates_after_subject() {
        let lexicon = fixture();
        let reordered = reorder(&lexicon, units(&["یہ", "بہت", "زندگی", "ہے", "اب"]));
        assert_eq!(reordered, units(&["یہ", "زندگی", "بہت", "اب", "ہے"]));
    }

    #[test]
    fn verb_suffix_counts_as_verb() {
        let lexicon = fixture();
        let reordered = reorder(&lexicon, units(&["یہ", "جا رہا ہے", "اب"]));
        assert_eq!(reordered, units(&["یہ", "اب", "جا رہا ہے"]));
    }

    #[test]
    fn short_sequences_are_untouched() {
        let lexicon = fixture();
        assert_eq!(reorder(&lexicon, units(&["یہ", "ہے"])), units(&["یہ", "ہے"]));
    }

    #[test]
    fn no_verb_subject_pair_is_a_no_op() {
        let lexicon = fixture();
        let unchanged = units(&["سڑک", "پر", "دنیا"]);
        assert_eq!(reorder(&lexicon, unchanged.clone()), unchanged);
    }
}
