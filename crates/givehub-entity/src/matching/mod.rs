//! Matching value objects.

pub mod candidate;

pub use candidate::MatchCandidate;
