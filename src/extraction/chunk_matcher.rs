use crate::capability::Capability;
use crate::models::{ExtractionMethod, PassStatus, PhraseSpan, SkillFinding};
use crate::nlp::NounPhraseParser;

/// Chunks this short (in characters, after trimming) are too noisy to match.
pub const MAX_SKIPPED_CHUNK_CHARS: usize = 2;

/// Compares each noun-phrase chunk against every ontology skill.
pub fn match_chunks(chunks: &[PhraseSpan], ontology: &[String]) -> Vec<SkillFinding> {
    let lowered: Vec<(&String, String)> = ontology
        .iter()
        .map(|skill| (skill, skill.to_lowercase()))
        .collect();

    let mut findings = Vec::new();

    for chunk in chunks {
        let chunk_lower = chunk.text.to_lowercase();
        let chunk_text = chunk_lower.trim();
        if chunk_text.chars().count() <= MAX_SKIPPED_CHUNK_CHARS {
            continue;
        }

        for (skill, skill_lower) in &lowered {
            if skill_lower == chunk_text {
                findings.push(SkillFinding::new(skill.as_str(), ExtractionMethod::NlpChunkExact));
            } else if chunk_text.contains(skill_lower.as_str()) {
                findings.push(SkillFinding::new(skill.as_str(), ExtractionMethod::NlpChunkSubstring));
            }
        }
    }

    findings
}

/// Runs the phrase-chunk pass. Parser failures never escape; they yield no findings.
pub async fn run_pass(
    capability: &Capability<dyn NounPhraseParser>,
    raw_text: &str,
    ontology: &[String],
) -> (PassStatus, Vec<SkillFinding>) {
    let Some(parser) = capability.handle() else {
        return (PassStatus::Unavailable, Vec::new());
    };

    match parser.noun_chunks(raw_text).await {
        Ok(chunks) => {
            let findings = match_chunks(&chunks, ontology);
            tracing::debug!(
                "{} produced {} chunks, {} candidate findings",
                parser.name(),
                chunks.len(),
                findings.len()
            );
            (PassStatus::Completed, findings)
        }
        Err(e) => {
            tracing::warn!("Phrase-chunk pass skipped, {} failed: {}", parser.name(), e);
            (PassStatus::Degraded, Vec::new())
        }
    }
}
