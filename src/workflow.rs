use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{KhulasaError, Result};
use crate::lexicon::Lexicon;
use crate::summarize::{normalize_whitespace, Summarizer};
use crate::translate::{Orchestrator, Stage, TranslationOutcome};

/// JSON artifact written per processed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestRecord {
    pub id: Uuid,
    pub source: PathBuf,
    pub summary: String,
    pub translation: String,
    pub stage: Stage,
    pub created_at: DateTime<Utc>,
}

pub struct Workflow {
    config: Config,
    orchestrator: Orchestrator,
}

impl Workflow {
    pub fn new(config: Config) -> Result<Self> {
        let orchestrator = Orchestrator::new(&config.translate, Lexicon::builtin().clone());
        Ok(Self {
            config,
            orchestrator,
        })
    }

    /// Summarize and translate a single text file, print both strings and
    /// write a digest record next to the input (or under `output_dir`).
    pub async fn process_file(
        &self,
        input_path: &Path,
        output_dir: Option<&Path>,
        target_sentences: Option<usize>,
    ) -> Result<()> {
        info!("Processing file: {}", input_path.display());

        let text = self.read_input(input_path)?;
        let summary = self.summarizer(target_sentences).summarize(&text);
        let outcome = self.translate_with_retry(&summary).await?;

        println!("Summary:\n{}\n", summary);
        println!("Urdu translation ({}):\n{}", outcome.stage, outcome.text);

        let output_dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => input_path
                .parent()
                .ok_or_else(|| KhulasaError::Config("Cannot determine output directory".to_string()))?
                .to_path_buf(),
        };
        std::fs::create_dir_all(&output_dir)?;

        let record = DigestRecord {
            id: Uuid::new_v4(),
            source: input_path.to_path_buf(),
            summary,
            translation: outcome.text,
            stage: outcome.stage,
            created_at: Utc::now(),
        };
        let record_path = self.write_digest(&record, input_path, &output_dir)?;
        info!("Digest record written to {}", record_path.display());

        Ok(())
    }

    /// Process every `.txt` file under a directory, skipping files that
    /// fail with a warning.
    pub async fn process_directory(
        &self,
        input_dir: &Path,
        output_dir: Option<&Path>,
    ) -> Result<()> {
        if !input_dir.is_dir() {
            return Err(KhulasaError::Config(
                "Input path is not a directory".to_string(),
            ));
        }

        let mut text_files = Vec::new();
        for entry in WalkDir::new(input_dir).into_iter().filter_map(|e| e.ok()) {
            if entry.path().extension().and_then(|e| e.to_str()) == Some("txt") {
                text_files.push(entry.path().to_path_buf());
            }
        }

        info!("Found {} text files to process", text_files.len());

        let progress = ProgressBar::new(text_files.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("progress template is valid")
                .progress_chars("#>-"),
        );

        for path in text_files {
            progress.set_message(path.display().to_string());
            match self.process_file(&path, output_dir, None).await {
                Ok(()) => info!("Successfully processed: {}", path.display()),
                Err(e) => warn!("Failed to process {}: {}", path.display(), e),
            }
            progress.inc(1);
        }
        progress.finish_with_message("done");

        Ok(())
    }

    /// Produce the extractive summary of a file without translating it.
    pub async fn summarize_file(
        &self,
        input_path: &Path,
        target_sentences: Option<usize>,
    ) -> Result<String> {
        let text = self.read_input(input_path)?;
        Ok(self.summarizer(target_sentences).summarize(&text))
    }

    /// Run the translation cascade directly on a file's content.
    pub async fn translate_file(&self, input_path: &Path) -> Result<TranslationOutcome> {
        let text = self.read_input(input_path)?;
        self.translate_with_retry(&text).await
    }

    /// Re-invoke the whole orchestration once on failure. With the
    /// standard cascade the first attempt already cannot fail.
    async fn translate_with_retry(&self, text: &str) -> Result<TranslationOutcome> {
        match self.orchestrator.translate(text).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                warn!("Translation failed, retrying once: {}", e);
                self.orchestrator.translate(text).await
            }
        }
    }

    fn summarizer(&self, target_override: Option<usize>) -> Summarizer {
        let summarizer = Summarizer::new(&self.config.summarize);
        match target_override {
            Some(target) => summarizer.with_target(target),
            None => summarizer,
        }
    }

    /// Read, whitespace-normalize and truncate an input file.
    fn read_input(&self, input_path: &Path) -> Result<String> {
        if !input_path.exists() {
            return Err(KhulasaError::FileNotFound(
                input_path.display().to_string(),
            ));
        }

        let raw = std::fs::read_to_string(input_path)?;
        Ok(self.normalize_input(&raw))
    }

    /// Collapse whitespace and truncate to the configured character bound.
    fn normalize_input(&self, raw: &str) -> String {
        let normalized = normalize_whitespace(raw);
        normalized
            .chars()
            .take(self.config.input.max_chars)
            .collect()
    }

    /// Write the digest record atomically: a temp file in the target
    /// directory, persisted into place.
    fn write_digest(
        &self,
        record: &DigestRecord,
        input_path: &Path,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        let stem = input_path
            .file_stem()
            .ok_or_else(|| KhulasaError::Config("Invalid input filename".to_string()))?
            .to_string_lossy();
        let record_path = output_dir.join(format!("{}.digest.json", stem));

        let content = serde_json::to_string_pretty(record)?;

        let mut temp = tempfile::NamedTempFile::new_in(output_dir)?;
        temp.write_all(content.as_bytes())?;
        temp.persist(&record_path)
            .map_err(|e| KhulasaError::Io(e.error))?;

        Ok(record_path)
    }
}
