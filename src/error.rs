use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Ontology store error: {0}")]
    Ontology(#[from] rusqlite::Error),

    #[error("Capability error: {0}")]
    Capability(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Only a missing vocabulary aborts an extraction call.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Ontology(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_ontology_errors_are_fatal() {
        let err = Error::Ontology(rusqlite::Error::QueryReturnedNoRows);
        assert!(err.is_fatal());
        assert!(!Error::Capability("model missing".to_string()).is_fatal());
        assert!(!Error::ParseError("bad json".to_string()).is_fatal());
    }
}
