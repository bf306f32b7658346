pub mod heuristic;
pub mod http;

pub use heuristic::HeuristicChunker;
pub use http::SpacyServiceParser;

use async_trait::async_trait;
use crate::error::Result;
use crate::models::PhraseSpan;

#[async_trait]
pub trait NounPhraseParser: Send + Sync {
    async fn noun_chunks(&self, text: &str) -> Result<Vec<PhraseSpan>>;
    fn name(&self) -> &str;
}
