//! Match scoring: attribute extraction, geographic distance, scoring,
//! and candidate ranking.

pub mod extractor;
pub mod geo;
pub mod scorer;
pub mod service;

pub use extractor::{AttributeExtractor, ExtractedAttributes};
pub use scorer::MatchScorer;
pub use service::MatchingService;
