//! Exact-match cache of pinned translations, keyed by a normalized hash.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use crate::config::TranslationPin;
use crate::error::{KhulasaError, Result};
use crate::summarize::normalize_whitespace;
use super::{Stage, TranslationStage};

/// Cascade stage serving translations pinned up front in configuration.
///
/// Keys are hashes of the whitespace-normalized source text, so a pin
/// still hits when the input differs only in spacing.
pub struct PinnedCache {
    entries: HashMap<String, String>,
}

impl PinnedCache {
    pub fn new(pins: &[TranslationPin]) -> Self {
        let entries = pins
            .iter()
            .map(|pin| (cache_key(&pin.source), pin.translation.clone()))
            .collect();

        Self { entries }
    }
}

/// Hash of the normalized source text, rendered as fixed-width hex.
fn cache_key(source_text: &str) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    normalize_whitespace(source_text).hash(&mut hasher);

    format!("{:016x}", hasher.finish())
}

#[async_trait]
impl TranslationStage for PinnedCache {
    fn stage(&self) -> Stage {
        Stage::Cache
    }

    async fn attempt(&self, text: &str) -> Result<String> {
        let key = cache_key(text);
        match self.entries.get(&key) {
            Some(translation) => {
                debug!(key = %key, "pinned translation hit");
                Ok(translation.clone())
            }
            None => Err(KhulasaError::Translation(
                "no pinned translation for this text".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pins() -> Vec<TranslationPin> {
        vec![TranslationPin {
            source: "Out there on the road was where life happened.".to_string(),
            translation: "وہاں سڑک پر زندگی واقع ہوتی تھی۔".to_string(),
        }]
    }

    #[tokio::test]
    async fn exact_match_hits() {
        let cache = PinnedCache::new(&pins());
        let translated = cache
            .attempt("Out there on the road was where life happened.")
            .await
            .unwrap();
        assert_eq!(translated, "وہاں سڑک پر زندگی واقع ہوتی تھی۔");
    }

    #[tokio::test]
    async fn whitespace_differences_still_hit() {
        let cache = PinnedCache::new(&pins());
        let translated = cache
            .attempt("  Out there on   the road was where life happened. ")
            .await
            .unwrap();
        assert_eq!(translated, "وہاں سڑک پر زندگی واقع ہوتی تھی۔");
    }

    #[tokio::test]
    async fn unknown_text_misses() {
        let cache = PinnedCache::new(&pins());
        assert!(cache.attempt("a different text entirely.").await.is_err());
    }

    #[tokio::test]
    async fn empty_pin_list_always_misses() {
        let cache = PinnedCache::new(&[]);
        assert!(cache.attempt("anything").await.is_err());
    }
}
