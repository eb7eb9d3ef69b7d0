use crate::core::{aptitude, careers, normalizer, streams, catalog::Catalog};
use crate::error::{EngineError, Result};
use crate::models::{
    AptitudeReport, AptitudeResponse, AptitudeScores, CareerRecommendation, InterestProfile,
    InterestResponse, NextQuestion, NormalizedInterests, PersonalityTraits, ScoringWeights,
    StreamRecommendation,
};
use std::sync::Arc;

/// Entry point for every engine operation
///
/// Cheap to clone: the catalog is shared behind an `Arc` and never mutated,
/// so clones can serve requests concurrently without locking.
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Arc<Catalog>,
    weights: ScoringWeights,
}

impl Engine {
    /// Build an engine over a validated catalog
    pub fn new(catalog: Catalog, weights: ScoringWeights) -> Result<Self> {
        catalog.validate()?;
        validate_weights(&weights)?;

        tracing::info!(
            "Engine initialized: {} careers, {} streams, {} aptitude items",
            catalog.careers.len(),
            catalog.streams.len(),
            catalog.aptitude_items.len()
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            weights,
        })
    }

    /// Built-in catalog with default weights
    pub fn with_defaults() -> Self {
        Self {
            catalog: Arc::new(Catalog::builtin()),
            weights: ScoringWeights::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Raw survey ratings -> profile, top interests and interpretation
    pub fn normalize_interests(&self, responses: &[InterestResponse]) -> NormalizedInterests {
        let result = normalizer::normalize_interests(responses);
        tracing::debug!(
            "Normalized {} interest responses, top: {:?}",
            responses.len(),
            result.primary_interests.first().map(|(c, _)| *c)
        );
        result
    }

    /// Next unanswered question, or the terminal state
    pub fn next_aptitude_question(&self, answered_ids: &[String], difficulty: u8) -> NextQuestion {
        let next = aptitude::next_question(&self.catalog.aptitude_items, answered_ids, difficulty);
        tracing::debug!(
            "Next aptitude question after {} answers: {:?}",
            answered_ids.len(),
            next.state()
        );
        next
    }

    /// Scores, levels and strengths for a finished assessment
    pub fn score_aptitude(&self, responses: &[AptitudeResponse]) -> AptitudeReport {
        let report = aptitude::score_aptitude(responses);
        tracing::debug!(
            "Scored {} aptitude responses, strengths: {:?}",
            responses.len(),
            report.strengths
        );
        report
    }

    /// Ranked careers, at most `max_recommendations`
    pub fn recommend_careers(
        &self,
        interests: &InterestProfile,
        aptitude: Option<&AptitudeScores>,
        personality: Option<&PersonalityTraits>,
        class_level: u8,
    ) -> Vec<CareerRecommendation> {
        let result = careers::recommend_careers(
            &self.catalog,
            &self.weights,
            interests,
            aptitude,
            personality,
            class_level,
        );
        tracing::debug!(
            "Recommended {} careers (class {}, aptitude: {})",
            result.len(),
            class_level,
            aptitude.is_some()
        );
        result
    }

    /// Every stream, ranked
    pub fn recommend_streams(
        &self,
        interests: &InterestProfile,
        aptitude: Option<&AptitudeScores>,
        class_level: u8,
    ) -> Vec<StreamRecommendation> {
        let result = streams::recommend_streams(&self.catalog, interests, aptitude, class_level);
        tracing::debug!(
            "Recommended {} streams (class {}, aptitude: {})",
            result.len(),
            class_level,
            aptitude.is_some()
        );
        result
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn validate_weights(weights: &ScoringWeights) -> Result<()> {
    let values = [weights.interest, weights.aptitude, weights.early_access_bonus];
    if values.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(EngineError::InvalidWeights(format!(
            "weights must be finite and non-negative: {:?}",
            weights
        )));
    }
    if weights.max_recommendations == 0 {
        return Err(EngineError::InvalidWeights(
            "max_recommendations must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Engine>();
    }

    #[test]
    fn test_new_rejects_invalid_weights() {
        let weights = ScoringWeights {
            interest: f64::NAN,
            ..ScoringWeights::default()
        };
        assert!(Engine::new(Catalog::builtin(), weights).is_err());

        let weights = ScoringWeights {
            max_recommendations: 0,
            ..ScoringWeights::default()
        };
        assert!(Engine::new(Catalog::builtin(), weights).is_err());
    }

    #[test]
    fn test_new_with_custom_catalog() {
        let mut catalog = Catalog::builtin();
        catalog.careers.truncate(2);

        let engine = Engine::new(catalog, ScoringWeights::default()).unwrap();
        let result = engine.recommend_careers(&InterestProfile::default(), None, None, 10);

        assert_eq!(result.len(), 2);
    }
}
