pub mod frequency;
pub mod http;

pub use frequency::FrequencyKeyphraseExtractor;
pub use http::KeyBertServiceExtractor;

use async_trait::async_trait;
use crate::error::Result;
use crate::models::{Keyphrase, KeyphraseParams};

#[async_trait]
pub trait KeyphraseExtractor: Send + Sync {
    /// Returns at most `params.top_n` keyphrases, best first.
    async fn extract_keyphrases(&self, text: &str, params: &KeyphraseParams) -> Result<Vec<Keyphrase>>;
    fn name(&self) -> &str;
}
