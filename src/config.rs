use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::error::{KhulasaError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub summarize: SummarizeConfig,
    pub translate: TranslateConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeConfig {
    /// Number of sentences the summary aims for
    pub target_sentences: usize,
    /// Extra stopwords merged into the built-in set
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Source language code
    pub source_lang: String,
    /// Target language code
    pub target_lang: String,
    /// MyMemory-compatible endpoint (remote stage A)
    pub mymemory_endpoint: String,
    /// LibreTranslate-compatible endpoint (remote stage B)
    pub libretranslate_endpoint: String,
    /// Contact email forwarded to MyMemory for a raised rate limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// Timeout for a single remote request, in seconds
    pub request_timeout_secs: u64,
    /// Delay between items during batch translation, in milliseconds
    pub batch_delay_ms: u64,
    /// Pinned source -> translation pairs served by the cache stage
    #[serde(default)]
    pub pins: Vec<TranslationPin>,
}

/// A source text whose translation is fixed up front
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationPin {
    pub source: String,
    pub translation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Upper bound on characters handed to the core pipeline
    pub max_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summarize: SummarizeConfig {
                target_sentences: 10,
                extra_stopwords: Vec::new(),
            },
            translate: TranslateConfig {
                source_lang: "en".to_string(),
                target_lang: "ur".to_string(),
                mymemory_endpoint: "https://api.mymemory.translated.net".to_string(),
                libretranslate_endpoint: "https://libretranslate.de".to_string(),
                contact_email: None,
                request_timeout_secs: 10,
                batch_delay_ms: 100,
                pins: Vec::new(),
            },
            input: InputConfig { max_chars: 5000 },
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| KhulasaError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| KhulasaError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| KhulasaError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| KhulasaError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_production_values() {
        let config = Config::default();
        assert_eq!(config.summarize.target_sentences, 10);
        assert_eq!(config.translate.source_lang, "en");
        assert_eq!(config.translate.target_lang, "ur");
        assert_eq!(config.translate.batch_delay_ms, 100);
        assert_eq!(config.input.max_chars, 5000);
        assert!(config.translate.pins.is_empty());
    }

    #[test]
    fn config_round_trips_through_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.summarize.target_sentences = 5;
        config.translate.pins.push(TranslationPin {
            source: "travel tips".to_string(),
            translation: "سفری تجاویز".to_string(),
        });
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.summarize.target_sentences, 5);
        assert_eq!(loaded.translate.pins.len(), 1);
        assert_eq!(loaded.translate.pins[0].translation, "سفری تجاویز");
    }

    #[test]
    fn malformed_config_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        assert!(matches!(
            Config::from_file(&path),
            Err(KhulasaError::Config(_))
        ));
    }
}
