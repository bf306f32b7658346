//! Built-in keyphrase ranking by n-gram frequency.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::Result;
use crate::keyphrase::KeyphraseExtractor;
use crate::models::{Keyphrase, KeyphraseParams};
use crate::text::{self, StopwordFilter};

#[derive(Debug, Clone, Default)]
pub struct FrequencyKeyphraseExtractor;

impl FrequencyKeyphraseExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn rank(&self, text: &str, params: &KeyphraseParams) -> Vec<Keyphrase> {
        let stopwords = match &params.stop_words {
            Some(language) => StopwordFilter::new(language),
            None => StopwordFilter::empty(),
        };
        let min_n = params.min_ngram.max(1);
        let max_n = params.max_ngram.max(min_n);

        // phrase -> (count, first position)
        let mut candidates: HashMap<String, (usize, usize)> = HashMap::new();
        let mut position = 0;

        for clause in text::clauses(text) {
            let words: Vec<String> = clause.iter().map(|t| t.text.to_lowercase()).collect();
            let usable: Vec<bool> = clause
                .iter()
                .map(|t| !t.is_numeric() && !stopwords.is_stopword(t.text))
                .collect();

            for start in 0..words.len() {
                for n in min_n..=max_n {
                    let end = start + n;
                    if end > words.len() || !usable[start..end].iter().all(|u| *u) {
                        continue;
                    }
                    let phrase = words[start..end].join(" ");
                    let entry = candidates.entry(phrase).or_insert((0, position));
                    entry.0 += 1;
                    position += 1;
                }
            }
        }

        let max_count = candidates.values().map(|(count, _)| *count).max().unwrap_or(1) as f32;

        let mut ranked: Vec<(String, usize, usize)> = candidates
            .into_iter()
            .map(|(phrase, (count, first))| (phrase, count, first))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        ranked
            .into_iter()
            .take(params.top_n)
            .map(|(phrase, count, _)| Keyphrase::new(phrase, count as f32 / max_count))
            .collect()
    }
}

#[async_trait]
impl KeyphraseExtractor for FrequencyKeyphraseExtractor {
    async fn extract_keyphrases(&self, text: &str, params: &KeyphraseParams) -> Result<Vec<Keyphrase>> {
        Ok(self.rank(text, params))
    }

    fn name(&self) -> &str {
        "frequency ranker"
    }
}
