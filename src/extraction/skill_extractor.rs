use chrono::Utc;
use std::sync::Arc;

use crate::capability::ExtractionContext;
use crate::error::Result;
use crate::extraction::{chunk_matcher, exact_matcher, keyphrase_matcher, merger};
use crate::models::{ExtractionReport, KeyphraseParams, Pass, PassReport, PassStatus, SkillFinding};
use crate::ontology::OntologySource;

pub struct SkillExtractor<O> {
    ontology: O,
    context: Arc<ExtractionContext>,
    keyphrase_params: KeyphraseParams,
}

impl<O: OntologySource> SkillExtractor<O> {
    pub fn new(ontology: O, context: Arc<ExtractionContext>) -> Self {
        Self {
            ontology,
            context,
            keyphrase_params: KeyphraseParams::default(),
        }
    }

    pub fn with_keyphrase_params(mut self, params: KeyphraseParams) -> Self {
        self.keyphrase_params = params;
        self
    }

    pub fn ontology(&self) -> &O {
        &self.ontology
    }

    /// One finding per detected skill, each carrying its highest-confidence method.
    pub async fn extract(&self, normalized_text: &str, raw_text: &str) -> Result<Vec<SkillFinding>> {
        Ok(self.extract_report(normalized_text, raw_text).await?.findings)
    }

    pub async fn extract_report(&self, normalized_text: &str, raw_text: &str) -> Result<ExtractionReport> {
        // The only fatal step: nothing is matched without a vocabulary.
        let ontology = self.ontology.load()?;
        tracing::info!("Loaded {} ontology skills", ontology.len());

        let exact = exact_matcher::match_exact(normalized_text, &ontology);

        let ((chunk_status, chunk), (keyphrase_status, keyphrase)) = futures::join!(
            async {
                let capability = self.context.nlp.get().await;
                chunk_matcher::run_pass(capability, raw_text, &ontology).await
            },
            async {
                let capability = self.context.keyphrase.get().await;
                keyphrase_matcher::run_pass(capability, raw_text, &ontology, &self.keyphrase_params).await
            },
        );

        let passes = vec![
            PassReport {
                pass: Pass::Exact,
                status: PassStatus::Completed,
                candidates: exact.len(),
            },
            PassReport {
                pass: Pass::PhraseChunk,
                status: chunk_status,
                candidates: chunk.len(),
            },
            PassReport {
                pass: Pass::Keyphrase,
                status: keyphrase_status,
                candidates: keyphrase.len(),
            },
        ];

        let findings = merger::merge([exact, chunk, keyphrase]);
        tracing::info!("Extracted {} unique skills", findings.len());

        Ok(ExtractionReport {
            extracted_at: Utc::now(),
            ontology_size: ontology.len(),
            passes,
            findings,
        })
    }
}
