//! Built-in phrase chunker used when no parsing service is configured.
//!
//! Without a part-of-speech model, noun phrases are approximated as maximal runs
//! of content words inside a clause: stop words, numbers and punctuation end a
//! chunk. This keeps "machine learning" and "project management" intact while
//! dropping the verbs and function words around them often enough to be useful.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::PhraseSpan;
use crate::nlp::NounPhraseParser;
use crate::text::{self, StopwordFilter, Token};

#[derive(Debug, Clone)]
pub struct HeuristicChunker {
    stopwords: StopwordFilter,
    max_length: usize,
}

impl Default for HeuristicChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicChunker {
    pub fn new() -> Self {
        Self {
            stopwords: StopwordFilter::default(),
            max_length: 4,
        }
    }

    /// Maximum number of tokens in a chunk; longer runs are split.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length.max(1);
        self
    }

    pub fn chunk(&self, text: &str) -> Vec<PhraseSpan> {
        let mut chunks = Vec::new();

        for clause in text::clauses(text) {
            let mut run: Vec<Token<'_>> = Vec::new();
            for token in clause {
                if token.is_numeric() || self.stopwords.is_stopword(token.text) {
                    self.flush(text, &mut run, &mut chunks);
                } else {
                    run.push(token);
                    if run.len() == self.max_length {
                        self.flush(text, &mut run, &mut chunks);
                    }
                }
            }
            self.flush(text, &mut run, &mut chunks);
        }

        chunks
    }

    fn flush(&self, text: &str, run: &mut Vec<Token<'_>>, chunks: &mut Vec<PhraseSpan>) {
        if let (Some(first), Some(last)) = (run.first(), run.last()) {
            chunks.push(PhraseSpan::new(&text[first.start..last.end], first.start, last.end));
        }
        run.clear();
    }
}

#[async_trait]
impl NounPhraseParser for HeuristicChunker {
    async fn noun_chunks(&self, text: &str) -> Result<Vec<PhraseSpan>> {
        Ok(self.chunk(text))
    }

    fn name(&self) -> &str {
        "heuristic chunker"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk_texts(chunker: &HeuristicChunker, text: &str) -> Vec<String> {
        chunker.chunk(text).into_iter().map(|c| c.text).collect()
    }

    #[test]
    fn test_stop_words_split_chunks() {
        let chunker = HeuristicChunker::new();
        let chunks = chunk_texts(&chunker, "Kubernetes clusters and Terraform modules.");
        assert_eq!(chunks, vec!["Kubernetes clusters", "Terraform modules"]);
    }

    #[test]
    fn test_chunks_do_not_cross_punctuation() {
        let chunker = HeuristicChunker::new();
        let chunks = chunk_texts(&chunker, "Python, Docker, Kubernetes");
        assert_eq!(chunks, vec!["Python", "Docker", "Kubernetes"]);
    }

    #[test]
    fn test_numbers_break_chunks() {
        let chunker = HeuristicChunker::new();
        let chunks = chunk_texts(&chunker, "Kubernetes 5 Terraform");
        assert_eq!(chunks, vec!["Kubernetes", "Terraform"]);
    }

    #[test]
    fn test_max_length_splits_long_runs() {
        let chunker = HeuristicChunker::new().with_max_length(2);
        let chunks = chunk_texts(&chunker, "rust tokio axum serde");
        assert_eq!(chunks, vec!["rust tokio", "axum serde"]);
    }

    #[test]
    fn test_spans_keep_original_casing_and_offsets() {
        let chunker = HeuristicChunker::new();
        let text = "Experience: PostgreSQL";
        let chunks = chunker.chunk(text);

        let last = chunks.last().unwrap();
        assert_eq!(last.text, "PostgreSQL");
        assert_eq!(&text[last.start..last.end], "PostgreSQL");
    }

    #[tokio::test]
    async fn test_empty_text_has_no_chunks() {
        let chunker = HeuristicChunker::new();
        assert!(chunker.noun_chunks("").await.unwrap().is_empty());
    }
}
