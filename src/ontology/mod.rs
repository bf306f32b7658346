pub mod sqlite;

pub use sqlite::SqliteOntology;

use crate::error::Result;

/// Supplies the canonical skill vocabulary. Loaded fresh for every extraction call.
pub trait OntologySource: Send + Sync {
    fn load(&self) -> Result<Vec<String>>;
}
