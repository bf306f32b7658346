use std::sync::Arc;
use std::time::Duration;

use crate::capability::{Capability, LazyCapability};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::keyphrase::{FrequencyKeyphraseExtractor, KeyBertServiceExtractor, KeyphraseExtractor};
use crate::nlp::{HeuristicChunker, NounPhraseParser, SpacyServiceParser};

/// Process-wide handles to the optional extraction collaborators.
///
/// Build one per process and share it behind an `Arc`; each handle initializes
/// on first use and is reused by every later extraction call.
pub struct ExtractionContext {
    pub nlp: LazyCapability<dyn NounPhraseParser>,
    pub keyphrase: LazyCapability<dyn KeyphraseExtractor>,
}

impl ExtractionContext {
    pub fn new(
        nlp: LazyCapability<dyn NounPhraseParser>,
        keyphrase: LazyCapability<dyn KeyphraseExtractor>,
    ) -> Self {
        Self { nlp, keyphrase }
    }

    /// Both optional passes disabled; only exact matching runs.
    pub fn exact_only() -> Self {
        Self::new(
            LazyCapability::unavailable("nlp"),
            LazyCapability::unavailable("keyphrase"),
        )
    }

    pub fn with_parts(
        nlp: Option<Arc<dyn NounPhraseParser>>,
        keyphrase: Option<Arc<dyn KeyphraseExtractor>>,
    ) -> Self {
        let nlp = match nlp {
            Some(handle) => Capability::Available(handle),
            None => Capability::Unavailable,
        };
        let keyphrase = match keyphrase {
            Some(handle) => Capability::Available(handle),
            None => Capability::Unavailable,
        };
        Self::new(
            LazyCapability::ready("nlp", nlp),
            LazyCapability::ready("keyphrase", keyphrase),
        )
    }

    pub fn from_config(config: &Config) -> Self {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        Self::new(
            nlp_capability(config.nlp_service_url.clone(), config.use_builtin_extractors, timeout),
            keyphrase_capability(
                config.keyphrase_service_url.clone(),
                config.use_builtin_extractors,
                timeout,
            ),
        )
    }

    pub fn without_nlp(mut self) -> Self {
        self.nlp = LazyCapability::unavailable("nlp");
        self
    }

    pub fn without_keyphrase(mut self) -> Self {
        self.keyphrase = LazyCapability::unavailable("keyphrase");
        self
    }
}

fn nlp_capability(
    service_url: Option<String>,
    use_builtin: bool,
    timeout: Duration,
) -> LazyCapability<dyn NounPhraseParser> {
    match service_url {
        Some(url) => LazyCapability::new("nlp", move || {
            let url = url.clone();
            async move { connect_spacy(&url, timeout).await }
        }),
        None if use_builtin => LazyCapability::new("nlp", || async {
            Ok::<_, Error>(Arc::new(HeuristicChunker::new()) as Arc<dyn NounPhraseParser>)
        }),
        None => LazyCapability::unavailable("nlp"),
    }
}

fn keyphrase_capability(
    service_url: Option<String>,
    use_builtin: bool,
    timeout: Duration,
) -> LazyCapability<dyn KeyphraseExtractor> {
    match service_url {
        Some(url) => LazyCapability::new("keyphrase", move || {
            let url = url.clone();
            async move { connect_keybert(&url, timeout).await }
        }),
        None if use_builtin => LazyCapability::new("keyphrase", || async {
            Ok::<_, Error>(
                Arc::new(FrequencyKeyphraseExtractor::new()) as Arc<dyn KeyphraseExtractor>
            )
        }),
        None => LazyCapability::unavailable("keyphrase"),
    }
}

async fn connect_spacy(url: &str, timeout: Duration) -> Result<Arc<dyn NounPhraseParser>> {
    let parser = SpacyServiceParser::connect(url, timeout).await?;
    Ok(Arc::new(parser))
}

async fn connect_keybert(url: &str, timeout: Duration) -> Result<Arc<dyn KeyphraseExtractor>> {
    let extractor = KeyBertServiceExtractor::connect(url, timeout).await?;
    Ok(Arc::new(extractor))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(nlp_url: Option<&str>, use_builtin: bool) -> Config {
        Config {
            database_path: "unused.db".to_string(),
            ontology_table: "ontology".to_string(),
            ontology_column: "skill".to_string(),
            nlp_service_url: nlp_url.map(String::from),
            keyphrase_service_url: None,
            use_builtin_extractors: use_builtin,
            request_timeout_secs: 1,
            keyphrase_top_n: 20,
        }
    }

    #[tokio::test]
    async fn test_builtin_fallbacks_are_available() {
        let context = ExtractionContext::from_config(&config(None, true));

        let nlp = context.nlp.get().await;
        assert_eq!(nlp.handle().unwrap().name(), "heuristic chunker");

        let keyphrase = context.keyphrase.get().await;
        assert_eq!(keyphrase.handle().unwrap().name(), "frequency ranker");
    }

    #[tokio::test]
    async fn test_no_service_and_no_builtin_is_unavailable() {
        let context = ExtractionContext::from_config(&config(None, false));
        assert!(!context.nlp.get().await.is_available());
        assert!(!context.keyphrase.get().await.is_available());
    }

    #[tokio::test]
    async fn test_unreachable_service_degrades_to_unavailable() {
        let context = ExtractionContext::from_config(&config(Some("http://127.0.0.1:9"), true));
        assert!(!context.nlp.get().await.is_available());
    }

    #[tokio::test]
    async fn test_disabling_passes() {
        let context = ExtractionContext::from_config(&config(None, true))
            .without_nlp()
            .without_keyphrase();
        assert!(!context.nlp.get().await.is_available());
        assert!(!context.keyphrase.get().await.is_available());
    }
}
