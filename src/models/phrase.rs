use serde::{Deserialize, Serialize};

/// A noun-phrase span produced by a parser, with byte offsets into the source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseSpan {
    pub text: String,
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub end: usize,
}

impl PhraseSpan {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyphrase {
    pub phrase: String,
    pub score: f32,
}

impl Keyphrase {
    pub fn new(phrase: impl Into<String>, score: f32) -> Self {
        Self {
            phrase: phrase.into(),
            score,
        }
    }
}

/// Parameters handed to a keyphrase extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyphraseParams {
    pub min_ngram: usize,
    pub max_ngram: usize,
    /// Stop-word list to filter with, `None` disables filtering.
    pub stop_words: Option<String>,
    pub top_n: usize,
}

impl Default for KeyphraseParams {
    fn default() -> Self {
        Self {
            min_ngram: 1,
            max_ngram: 2,
            stop_words: Some("english".to_string()),
            top_n: 20,
        }
    }
}
