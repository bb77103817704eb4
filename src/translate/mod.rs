// Cascading translation architecture
//
// An ordered list of stages is tried in sequence, first success wins:
// - Cache: exact-match lookup of pinned source/translation pairs
// - RemoteA: MyMemory-shaped translation service
// - RemoteB: LibreTranslate-shaped translation service
// - Local: deterministic rule-based engine, which cannot fail

pub mod cache;
pub mod local;
pub mod remote;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::config::TranslateConfig;
use crate::error::{KhulasaError, Result};
use crate::lexicon::Lexicon;

/// Which cascade stage produced a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Cache,
    RemoteA,
    RemoteB,
    Local,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Cache => write!(f, "cache"),
            Stage::RemoteA => write!(f, "remote_a"),
            Stage::RemoteB => write!(f, "remote_b"),
            Stage::Local => write!(f, "local"),
        }
    }
}

/// A translation together with its provenance.
#[derive(Debug, Clone)]
pub struct TranslationOutcome {
    pub text: String,
    pub stage: Stage,
}

/// One attempt in the fallback cascade.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranslationStage: Send + Sync {
    /// Provenance tag recorded when this stage succeeds.
    fn stage(&self) -> Stage;

    /// Try to translate `text`. An error means fall through to the next
    /// stage; an empty result is treated the same way by the orchestrator.
    async fn attempt(&self, text: &str) -> Result<String>;
}

/// Drives the stage list with first-success-wins semantics.
pub struct Orchestrator {
    stages: Vec<Box<dyn TranslationStage>>,
    batch_delay: Duration,
}

impl Orchestrator {
    /// Standard cascade assembly: cache, remote A, remote B, local.
    pub fn new(config: &TranslateConfig, lexicon: Lexicon) -> Self {
        let stages: Vec<Box<dyn TranslationStage>> = vec![
            Box::new(cache::PinnedCache::new(&config.pins)),
            Box::new(remote::MyMemoryStage::new(config)),
            Box::new(remote::LibreTranslateStage::new(config)),
            Box::new(local::LocalStage::new(lexicon)),
        ];

        Self {
            stages,
            batch_delay: Duration::from_millis(config.batch_delay_ms),
        }
    }

    /// Assemble a cascade from an explicit stage list.
    pub fn with_stages(stages: Vec<Box<dyn TranslationStage>>, batch_delay: Duration) -> Self {
        Self { stages, batch_delay }
    }

    /// Run the cascade on one text.
    ///
    /// With the standard stage list this cannot fail: the local stage
    /// always returns a translation. An error is only possible when a
    /// caller assembles a cascade without a terminal stage.
    pub async fn translate(&self, text: &str) -> Result<TranslationOutcome> {
        if text.trim().chars().count() < 2 {
            debug!("input below translatable length, returning unchanged");
            return Ok(TranslationOutcome {
                text: text.to_string(),
                stage: Stage::Local,
            });
        }

        for stage in &self.stages {
            match stage.attempt(text).await {
                Ok(translated) if !translated.trim().is_empty() => {
                    info!(stage = %stage.stage(), "translation stage succeeded");
                    return Ok(TranslationOutcome {
                        text: translated,
                        stage: stage.stage(),
                    });
                }
                Ok(_) => {
                    warn!(stage = %stage.stage(), "translation stage returned empty text");
                }
                Err(e) => {
                    warn!(stage = %stage.stage(), error = %e, "translation stage failed");
                }
            }
        }

        Err(KhulasaError::Translation(
            "all translation stages failed".to_string(),
        ))
    }

    /// Translate several independent texts strictly one at a time, waiting
    /// the configured delay between items to respect provider rate limits.
    pub async fn translate_batch(&self, texts: &[String]) -> Vec<Result<TranslationOutcome>> {
        let mut results = Vec::with_capacity(texts.len());

        for (i, text) in texts.iter().enumerate() {
            results.push(self.translate(text).await);
            if i + 1 < texts.len() {
                tokio::time::sleep(self.batch_delay).await;
            }
        }

        results
    }
}
