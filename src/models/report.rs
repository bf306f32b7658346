use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::finding::SkillFinding;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub extracted_at: DateTime<Utc>,
    pub ontology_size: usize,
    pub passes: Vec<PassReport>,
    pub findings: Vec<SkillFinding>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassReport {
    pub pass: Pass,
    pub status: PassStatus,
    /// Findings produced before merging.
    pub candidates: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pass {
    Exact,
    PhraseChunk,
    Keyphrase,
}

impl std::fmt::Display for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pass::Exact => write!(f, "exact"),
            Pass::PhraseChunk => write!(f, "phrase-chunk"),
            Pass::Keyphrase => write!(f, "keyphrase"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassStatus {
    Completed,
    /// The capability was present but failed during this call.
    Degraded,
    Unavailable,
}

impl std::fmt::Display for PassStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PassStatus::Completed => write!(f, "completed"),
            PassStatus::Degraded => write!(f, "degraded"),
            PassStatus::Unavailable => write!(f, "unavailable"),
        }
    }
}

impl ExtractionReport {
    pub fn pass(&self, pass: Pass) -> Option<&PassReport> {
        self.passes.iter().find(|p| p.pass == pass)
    }
}
