use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::models::PhraseSpan;
use crate::nlp::NounPhraseParser;

/// Client for a spaCy-backed parsing service exposing `/health` and `/noun_chunks`.
pub struct SpacyServiceParser {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct ChunkRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct ChunkResponse {
    noun_chunks: Vec<PhraseSpan>,
}

impl SpacyServiceParser {
    /// Builds the client and confirms the service has a model loaded.
    pub async fn connect(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let parser = Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        };

        let response = parser
            .client
            .get(format!("{}/health", parser.base_url))
            .send()
            .await
            .map_err(|e| Error::Capability(format!("NLP service unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Capability(format!(
                "NLP service not ready ({})",
                response.status()
            )));
        }

        Ok(parser)
    }
}

#[async_trait]
impl NounPhraseParser for SpacyServiceParser {
    async fn noun_chunks(&self, text: &str) -> Result<Vec<PhraseSpan>> {
        tracing::debug!("Requesting noun chunks for {} bytes of text", text.len());

        let response = self
            .client
            .post(format!("{}/noun_chunks", self.base_url))
            .json(&ChunkRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Capability(format!(
                "NLP service error ({}): {}",
                status, body
            )));
        }

        let body = response.text().await?;
        let parsed: ChunkResponse = serde_json::from_str(&body)
            .map_err(|e| Error::ParseError(format!("Invalid noun chunk response: {}", e)))?;

        Ok(parsed.noun_chunks)
    }

    fn name(&self) -> &str {
        "spaCy service"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_response_tolerates_missing_offsets() {
        let body = r#"{"noun_chunks": [{"text": "machine learning", "start": 4, "end": 20}, {"text": "SQL"}]}"#;
        let parsed: ChunkResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.noun_chunks.len(), 2);
        assert_eq!(parsed.noun_chunks[0], PhraseSpan::new("machine learning", 4, 20));
        assert_eq!(parsed.noun_chunks[1].text, "SQL");
    }

    #[tokio::test]
    async fn test_connect_fails_when_service_is_down() {
        // Nothing listens on the discard port.
        let result = SpacyServiceParser::connect("http://127.0.0.1:9", Duration::from_millis(500)).await;
        assert!(matches!(result, Err(Error::Capability(_))));
    }
}
