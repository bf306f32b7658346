use std::collections::HashMap;

use crate::models::SkillFinding;

/// Keeps one finding per skill: the one with the strictly highest confidence seen.
#[derive(Debug, Default)]
pub struct FindingMerger {
    findings: Vec<SkillFinding>,
    index: HashMap<String, usize>,
}

impl FindingMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the candidate was inserted or replaced the stored finding.
    pub fn offer(&mut self, candidate: SkillFinding) -> bool {
        match self.index.get(&candidate.skill) {
            Some(&i) => {
                if candidate.confidence > self.findings[i].confidence {
                    self.findings[i] = candidate;
                    true
                } else {
                    false
                }
            }
            None => {
                self.index.insert(candidate.skill.clone(), self.findings.len());
                self.findings.push(candidate);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Findings in order of first detection.
    pub fn into_findings(self) -> Vec<SkillFinding> {
        self.findings
    }
}

impl Extend<SkillFinding> for FindingMerger {
    fn extend<I: IntoIterator<Item = SkillFinding>>(&mut self, iter: I) {
        for finding in iter {
            self.offer(finding);
        }
    }
}

/// Folds pass results, in the order given, into one finding per skill.
pub fn merge<I>(passes: I) -> Vec<SkillFinding>
where
    I: IntoIterator<Item = Vec<SkillFinding>>,
{
    let mut merger = FindingMerger::new();
    for pass in passes {
        merger.extend(pass);
    }
    merger.into_findings()
}
