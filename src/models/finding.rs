use serde::{Deserialize, Serialize};

/// A single detection of an ontology skill in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillFinding {
    pub skill: String,
    pub confidence: f32,
    pub method: ExtractionMethod,
}

impl SkillFinding {
    pub fn new(skill: impl Into<String>, method: ExtractionMethod) -> Self {
        Self {
            skill: skill.into(),
            confidence: method.confidence(),
            method,
        }
    }
}

/// Strategy that produced a finding, in descending order of trust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    ExactRegex,
    NlpChunkExact,
    KeybertExact,
    NlpChunkSubstring,
}

impl ExtractionMethod {
    pub fn confidence(&self) -> f32 {
        match self {
            ExtractionMethod::ExactRegex => 0.95,
            ExtractionMethod::NlpChunkExact => 0.90,
            ExtractionMethod::KeybertExact => 0.85,
            ExtractionMethod::NlpChunkSubstring => 0.70,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMethod::ExactRegex => "exact_regex",
            ExtractionMethod::NlpChunkExact => "nlp_chunk_exact",
            ExtractionMethod::KeybertExact => "keybert_exact",
            ExtractionMethod::NlpChunkSubstring => "nlp_chunk_substring",
        }
    }
}

impl std::fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_ordering() {
        assert!(ExtractionMethod::ExactRegex.confidence() > ExtractionMethod::NlpChunkExact.confidence());
        assert!(ExtractionMethod::NlpChunkExact.confidence() > ExtractionMethod::KeybertExact.confidence());
        assert!(ExtractionMethod::KeybertExact.confidence() > ExtractionMethod::NlpChunkSubstring.confidence());
    }

    #[test]
    fn test_finding_serializes_as_flat_object() {
        let finding = SkillFinding::new("SQL", ExtractionMethod::ExactRegex);
        let json = serde_json::to_value(&finding).unwrap();

        assert_eq!(json["skill"], "SQL");
        assert_eq!(json["method"], "exact_regex");
        assert!((json["confidence"].as_f64().unwrap() - 0.95).abs() < 1e-6);
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_display_matches_wire_name() {
        let method = ExtractionMethod::NlpChunkSubstring;
        let json = serde_json::to_string(&method).unwrap();
        assert_eq!(json, format!("\"{}\"", method));
    }
}
