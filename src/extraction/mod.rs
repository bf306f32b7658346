pub mod chunk_matcher;
pub mod exact_matcher;
pub mod keyphrase_matcher;
pub mod merger;
pub mod skill_extractor;

pub use merger::{merge, FindingMerger};
pub use skill_extractor::SkillExtractor;
