use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::keyphrase::KeyphraseExtractor;
use crate::models::{Keyphrase, KeyphraseParams};

/// Client for a KeyBERT service exposing `/health` and `/keywords`.
pub struct KeyBertServiceExtractor {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct KeywordRequest<'a> {
    text: &'a str,
    keyphrase_ngram_range: (usize, usize),
    stop_words: Option<&'a str>,
    top_n: usize,
}

#[derive(Deserialize)]
struct KeywordResponse {
    keywords: Vec<(String, f32)>,
}

impl KeyBertServiceExtractor {
    pub async fn connect(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let extractor = Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        };

        let response = extractor
            .client
            .get(format!("{}/health", extractor.base_url))
            .send()
            .await
            .map_err(|e| Error::Capability(format!("Keyphrase service unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Capability(format!(
                "Keyphrase service not ready ({})",
                response.status()
            )));
        }

        Ok(extractor)
    }
}

fn parse_keywords(body: &str, top_n: usize) -> Result<Vec<Keyphrase>> {
    let parsed: KeywordResponse = serde_json::from_str(body)
        .map_err(|e| Error::ParseError(format!("Invalid keyword response: {}", e)))?;

    Ok(parsed
        .keywords
        .into_iter()
        .take(top_n)
        .map(|(phrase, score)| Keyphrase::new(phrase, score))
        .collect())
}

#[async_trait]
impl KeyphraseExtractor for KeyBertServiceExtractor {
    async fn extract_keyphrases(&self, text: &str, params: &KeyphraseParams) -> Result<Vec<Keyphrase>> {
        let request = KeywordRequest {
            text,
            keyphrase_ngram_range: (params.min_ngram, params.max_ngram),
            stop_words: params.stop_words.as_deref(),
            top_n: params.top_n,
        };

        let response = self
            .client
            .post(format!("{}/keywords", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Capability(format!(
                "Keyphrase service error ({}): {}",
                status, body
            )));
        }

        let body = response.text().await?;
        parse_keywords(&body, params.top_n)
    }

    fn name(&self) -> &str {
        "KeyBERT service"
    }
}
