pub mod config;
pub mod error;
pub mod models;
pub mod ontology;
pub mod capability;
pub mod nlp;
pub mod keyphrase;
pub mod text;
pub mod extraction;

pub use config::Config;
pub use error::{Error, Result};
pub use capability::{Capability, ExtractionContext, LazyCapability};
pub use extraction::SkillExtractor;
pub use models::{ExtractionMethod, ExtractionReport, SkillFinding};
pub use ontology::{OntologySource, SqliteOntology};
