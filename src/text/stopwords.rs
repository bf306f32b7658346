//! Stop-word filtering backed by the `stop-words` crate.

use std::collections::HashSet;
use stop_words::{get, LANGUAGE};

#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Lower-cased stop words.
    stopwords: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("english")
    }
}

impl StopwordFilter {
    /// Accepts the language names keyphrase services use (`english`) or ISO codes (`en`).
    /// Unknown names fall back to English.
    pub fn new(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            _ => LANGUAGE::English,
        };

        Self {
            stopwords: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            stopwords: HashSet::new(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::default();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("And"));
        assert!(!filter.is_stopword("python"));
        assert!(!filter.is_stopword("kubernetes"));
    }

    #[test]
    fn test_iso_code_alias() {
        let by_code = StopwordFilter::new("en");
        assert!(by_code.is_stopword("with"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();
        assert!(filter.is_empty());
        assert!(!filter.is_stopword("the"));
    }
}
