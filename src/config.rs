use crate::error::{Error, Result};
use crate::models::KeyphraseParams;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub ontology_table: String,
    pub ontology_column: String,
    pub nlp_service_url: Option<String>,
    pub keyphrase_service_url: Option<String>,
    pub use_builtin_extractors: bool,
    pub request_timeout_secs: u64,
    pub keyphrase_top_n: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database_path = env::var("DATABASE_PATH")
            .unwrap_or_else(|_| "skillgenome.db".to_string());

        let ontology_table = env::var("ONTOLOGY_TABLE").unwrap_or_else(|_| "ontology".to_string());
        validate_identifier("ONTOLOGY_TABLE", &ontology_table)?;

        let ontology_column = env::var("ONTOLOGY_COLUMN").unwrap_or_else(|_| "skill".to_string());
        validate_identifier("ONTOLOGY_COLUMN", &ontology_column)?;

        let nlp_service_url = env::var("NLP_SERVICE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let keyphrase_service_url = env::var("KEYPHRASE_SERVICE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let use_builtin_extractors = env::var("USE_BUILTIN_EXTRACTORS")
            .ok()
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let keyphrase_top_n = env::var("KEYPHRASE_TOP_N")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(20);

        Ok(Self {
            database_path,
            ontology_table,
            ontology_column,
            nlp_service_url,
            keyphrase_service_url,
            use_builtin_extractors,
            request_timeout_secs,
            keyphrase_top_n,
        })
    }

    pub fn keyphrase_params(&self) -> KeyphraseParams {
        KeyphraseParams {
            top_n: self.keyphrase_top_n,
            ..KeyphraseParams::default()
        }
    }
}

/// Table and column names are interpolated into SQL, so only plain identifiers pass.
pub fn validate_identifier(var: &str, value: &str) -> Result<()> {
    let mut chars = value.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(Error::Config(format!("{} is not a valid SQL identifier: {:?}", var, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("T", "ontology").is_ok());
        assert!(validate_identifier("T", "_skills_v2").is_ok());
        assert!(validate_identifier("T", "").is_err());
        assert!(validate_identifier("T", "2skills").is_err());
        assert!(validate_identifier("T", "skill; DROP TABLE users").is_err());
    }
}
