//! EduPath Engine - career and stream recommendations for students
//!
//! This library scores a student's RIASEC interests and aptitude against a
//! small static catalog of careers and academic streams, and serves a
//! linear aptitude quiz. All operations are pure functions over request data
//! and an immutable, shared catalog.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{cosine_similarity, Catalog, Engine};
pub use error::EngineError;
pub use models::{
    AptitudeScores, CareerRecommendation, InterestProfile, NextQuestion, ScoringWeights,
    StreamRecommendation,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let engine = Engine::default();
        let streams = engine.recommend_streams(&InterestProfile::default(), None, 10);
        assert_eq!(streams.len(), 3);
    }
}
