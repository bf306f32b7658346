use crate::capability::Capability;
use crate::keyphrase::KeyphraseExtractor;
use crate::models::{ExtractionMethod, Keyphrase, KeyphraseParams, PassStatus, SkillFinding};

/// Exact (case-insensitive) keyphrase matches only. Keyphrases are too noisy for
/// substring matching.
pub fn match_keyphrases(keyphrases: &[Keyphrase], ontology: &[String]) -> Vec<SkillFinding> {
    let mut findings = Vec::new();

    for keyphrase in keyphrases {
        let phrase = keyphrase.phrase.to_lowercase();
        let phrase = phrase.trim();

        findings.extend(
            ontology
                .iter()
                .filter(|skill| skill.to_lowercase() == phrase)
                .map(|skill| SkillFinding::new(skill.as_str(), ExtractionMethod::KeybertExact)),
        );
    }

    findings
}

pub async fn run_pass(
    capability: &Capability<dyn KeyphraseExtractor>,
    raw_text: &str,
    ontology: &[String],
    params: &KeyphraseParams,
) -> (PassStatus, Vec<SkillFinding>) {
    let Some(extractor) = capability.handle() else {
        return (PassStatus::Unavailable, Vec::new());
    };

    match extractor.extract_keyphrases(raw_text, params).await {
        Ok(keyphrases) => {
            let findings = match_keyphrases(&keyphrases, ontology);
            tracing::debug!(
                "{} returned {} keyphrases, {} candidate findings",
                extractor.name(),
                keyphrases.len(),
                findings.len()
            );
            (PassStatus::Completed, findings)
        }
        Err(e) => {
            tracing::warn!("Keyphrase pass skipped, {} failed: {}", extractor.name(), e);
            (PassStatus::Degraded, Vec::new())
        }
    }
}
