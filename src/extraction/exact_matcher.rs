use regex::{Regex, RegexBuilder};

use crate::models::{ExtractionMethod, SkillFinding};

/// Whole-word, case-insensitive scan of the normalized text for every ontology skill.
pub fn match_exact(normalized_text: &str, ontology: &[String]) -> Vec<SkillFinding> {
    let haystack = normalized_text.to_lowercase();

    ontology
        .iter()
        .filter(|skill| match whole_word_pattern(skill) {
            Ok(pattern) => pattern.is_match(&haystack),
            Err(e) => {
                tracing::warn!("Skipping skill {:?}, pattern failed to compile: {}", skill, e);
                false
            }
        })
        .map(|skill| SkillFinding::new(skill.clone(), ExtractionMethod::ExactRegex))
        .collect()
}

fn whole_word_pattern(skill: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(&skill.to_lowercase())))
        .case_insensitive(true)
        .build()
}
