//! Document-wide term frequencies and the first-occurrence topic set.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Common function words excluded from scoring.
const STOPWORDS: &[&str] = &[
    "the", "is", "in", "and", "to", "of", "a", "for", "on", "with", "that", "as", "at", "by",
    "from", "an", "be", "this", "it", "are", "was", "or", "we", "his", "her", "their", "our",
    "but", "not", "have", "has", "had", "been", "will", "can", "could", "should", "would",
];

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// The stopword set used by the qualifying-token filter.
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Built-in set extended with caller-supplied words.
    pub fn with_extras(extras: &[String]) -> Self {
        let mut words: HashSet<String> = STOPWORDS.iter().map(|s| (*s).to_string()).collect();
        words.extend(extras.iter().map(|s| s.to_lowercase()));
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::with_extras(&[])
    }
}

/// Lowercased tokens of `text` that qualify for scoring: longer than two
/// characters and not a stopword.
pub fn qualifying_tokens(text: &str, stopwords: &Stopwords) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|w| w.chars().count() > 2 && !stopwords.contains(w))
        .collect()
}

/// Term-frequency table and topic set built in one pass over the whole
/// document. The topic set holds every token whose count was 1 at first
/// sight, which is every distinct qualifying token.
#[derive(Debug, Clone)]
pub struct DocumentFrequencies {
    freq: HashMap<String, u32>,
    topics: HashSet<String>,
}

impl DocumentFrequencies {
    pub fn build(text: &str, stopwords: &Stopwords) -> Self {
        let mut freq: HashMap<String, u32> = HashMap::new();
        let mut topics: HashSet<String> = HashSet::new();

        for token in qualifying_tokens(text, stopwords) {
            let count = freq.entry(token.clone()).or_insert(0);
            *count += 1;
            if *count == 1 {
                topics.insert(token);
            }
        }

        Self { freq, topics }
    }

    pub fn frequency(&self, token: &str) -> u32 {
        self.freq.get(token).copied().unwrap_or(0)
    }

    pub fn is_topic(&self, token: &str) -> bool {
        self.topics.contains(token)
    }
}
