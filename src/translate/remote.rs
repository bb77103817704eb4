//! Remote translation service clients.
//!
//! Two wire shapes, normalized to one success/failure signal: a
//! MyMemory-shaped GET endpoint (remote A) and a LibreTranslate-shaped
//! POST endpoint (remote B). Any transport error, non-OK status or empty
//! translated text is a failure, which makes the orchestrator fall
//! through to the next stage.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TranslateConfig;
use crate::error::{KhulasaError, Result};
use super::{Stage, TranslationStage};

fn build_client(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .expect("HTTP client creation should not fail")
}

/// MyMemory-shaped response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct MyMemoryResponse {
    #[serde(rename = "responseStatus")]
    pub response_status: i64,
    #[serde(rename = "responseData")]
    pub response_data: MyMemoryData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MyMemoryData {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
    /// Match quality figure, surfaced in debug logging only.
    #[serde(rename = "match", default)]
    pub match_quality: Option<f64>,
}

/// Remote stage A: `GET {endpoint}/get?q=...&langpair=en|ur`.
pub struct MyMemoryStage {
    client: Client,
    endpoint: String,
    source_lang: String,
    target_lang: String,
    contact_email: Option<String>,
}

impl MyMemoryStage {
    pub fn new(config: &TranslateConfig) -> Self {
        Self {
            client: build_client(config.request_timeout_secs),
            endpoint: config.mymemory_endpoint.clone(),
            source_lang: config.source_lang.clone(),
            target_lang: config.target_lang.clone(),
            contact_email: config.contact_email.clone(),
        }
    }
}

#[async_trait]
impl TranslationStage for MyMemoryStage {
    fn stage(&self) -> Stage {
        Stage::RemoteA
    }

    async fn attempt(&self, text: &str) -> Result<String> {
        let url = format!("{}/get", self.endpoint);
        let langpair = format!("{}|{}", self.source_lang, self.target_lang);

        let mut query: Vec<(&str, &str)> = vec![("q", text), ("langpair", &langpair)];
        if let Some(email) = &self.contact_email {
            query.push(("de", email));
        }

        debug!(url = %url, "sending MyMemory translation request");

        let response = self.client.get(&url).query(&query).send().await?;

        if !response.status().is_success() {
            return Err(KhulasaError::Translation(format!(
                "MyMemory API error: HTTP {}",
                response.status()
            )));
        }

        let body: MyMemoryResponse = response
            .json()
            .await
            .map_err(|e| KhulasaError::Translation(format!("malformed MyMemory response: {}", e)))?;

        if body.response_status != 200 {
            return Err(KhulasaError::Translation(format!(
                "MyMemory translation failed: status {}",
                body.response_status
            )));
        }

        let translated = body.response_data.translated_text.trim().to_string();
        if translated.is_empty() {
            return Err(KhulasaError::Translation(
                "empty MyMemory translation".to_string(),
            ));
        }

        if let Some(quality) = body.response_data.match_quality {
            debug!(match_quality = quality, "MyMemory match quality");
        }

        Ok(translated)
    }
}

#[derive(Debug, Clone, Serialize)]
struct LibreTranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LibreTranslateResponse {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// Remote stage B: `POST {endpoint}/translate` with a JSON body.
pub struct LibreTranslateStage {
    client: Client,
    endpoint: String,
    source_lang: String,
    target_lang: String,
}

impl LibreTranslateStage {
    pub fn new(config: &TranslateConfig) -> Self {
        Self {
            client: build_client(config.request_timeout_secs),
            endpoint: config.libretranslate_endpoint.clone(),
            source_lang: config.source_lang.clone(),
            target_lang: config.target_lang.clone(),
        }
    }
}

#[async_trait]
impl TranslationStage for LibreTranslateStage {
    fn stage(&self) -> Stage {
        Stage::RemoteB
    }

    async fn attempt(&self, text: &str) -> Result<String> {
        let url = format!("{}/translate", self.endpoint);
        let request = LibreTranslateRequest {
            q: text,
            source: &self.source_lang,
            target: &self.target_lang,
            format: "text",
        };

        debug!(url = %url, "sending LibreTranslate translation request");

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(KhulasaError::Translation(format!(
                "LibreTranslate API error: HTTP {}",
                response.status()
            )));
        }

        let body: LibreTranslateResponse = response.json().await.map_err(|e| {
            KhulasaError::Translation(format!("malformed LibreTranslate response: {}", e))
        })?;

        let translated = body.translated_text.trim().to_string();
        if translated.is_empty() {
            return Err(KhulasaError::Translation(
                "empty LibreTranslate translation".to_string(),
            ));
        }

        Ok(translated)
    }
}
