use crate::core::catalog::Catalog;
use crate::core::scoring::{generate_reasons, score_career};
use crate::core::similarity::round_to_tenth;
use crate::models::{
    AptitudeScores, CareerRecommendation, InterestProfile, PersonalityTraits, ScoringWeights,
};
use std::cmp::Ordering;

/// Rank every catalog career for a student
///
/// # Pipeline
/// 1. Interest cosine similarity against the career's ideal profile
/// 2. Aptitude match against the career's requirements (0.5 without aptitude)
/// 3. Weighted blend plus early-access bonus
/// 4. Reasons, sorting by fit score and truncation
///
/// Personality traits are accepted but not scored yet.
pub fn recommend_careers(
    catalog: &Catalog,
    weights: &ScoringWeights,
    interests: &InterestProfile,
    aptitude: Option<&AptitudeScores>,
    personality: Option<&PersonalityTraits>,
    class_level: u8,
) -> Vec<CareerRecommendation> {
    if personality.is_some() {
        tracing::trace!("Personality traits supplied; passthrough only");
    }

    let mut recommendations: Vec<CareerRecommendation> = catalog
        .careers
        .iter()
        .map(|career| {
            let score = score_career(career, interests, aptitude, class_level, weights);

            CareerRecommendation {
                career: career.clone(),
                fit_score: round_to_tenth(score.combined * 100.0),
                interest_match: round_to_tenth(score.interest_similarity * 100.0),
                aptitude_match: round_to_tenth(score.aptitude_match * 100.0),
                reasons: generate_reasons(interests, career, score.interest_similarity),
            }
        })
        .collect();

    // Stable: equal scores keep catalog order
    recommendations.sort_by(|a, b| {
        b.fit_score
            .partial_cmp(&a.fit_score)
            .unwrap_or(Ordering::Equal)
    });

    recommendations.truncate(weights.max_recommendations);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(recommendations: &[CareerRecommendation]) -> Vec<&str> {
        recommendations.iter().map(|r| r.career.id.as_str()).collect()
    }

    #[test]
    fn test_all_careers_ranked() {
        let catalog = Catalog::builtin();
        let interests = InterestProfile::from_array([20.0, 100.0, 30.0, 20.0, 40.0, 70.0]);

        let result = recommend_careers(&catalog, &ScoringWeights::default(), &interests, None, None, 12);

        assert_eq!(result.len(), 5);
        assert!(result.windows(2).all(|w| w[0].fit_score >= w[1].fit_score));
        assert!(matches!(ids(&result)[0], "software_engineer" | "data_scientist"));
    }

    #[test]
    fn test_identical_profile_is_full_interest_match() {
        let catalog = Catalog::builtin();
        let teacher = catalog.careers.iter().find(|c| c.id == "teacher").unwrap();
        let aptitude = AptitudeScores::from_array([70.0, 60.0, 30.0, 90.0]);

        let result = recommend_careers(
            &catalog,
            &ScoringWeights::default(),
            &teacher.riasec_profile,
            Some(&aptitude),
            None,
            12,
        );

        assert_eq!(result[0].career.id, "teacher");
        assert_eq!(result[0].interest_match, 100.0);
        assert_eq!(result[0].aptitude_match, 100.0);
        assert_eq!(result[0].fit_score, 100.0);
    }

    #[test]
    fn test_bonus_can_exceed_100() {
        let catalog = Catalog::builtin();
        let teacher = catalog.careers.iter().find(|c| c.id == "teacher").unwrap();
        let aptitude = AptitudeScores::from_array([70.0, 60.0, 30.0, 90.0]);

        let result = recommend_careers(
            &catalog,
            &ScoringWeights::default(),
            &teacher.riasec_profile,
            Some(&aptitude),
            None,
            9,
        );

        assert_eq!(result[0].career.id, "teacher");
        assert_eq!(result[0].fit_score, 110.0);
    }

    #[test]
    fn test_respects_max_recommendations() {
        let catalog = Catalog::builtin();
        let weights = ScoringWeights {
            max_recommendations: 2,
            ..ScoringWeights::default()
        };

        let result = recommend_careers(&catalog, &weights, &InterestProfile::default(), None, None, 10);

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = Catalog::builtin();
        // Zero interests: similarity 0 everywhere, aptitude neutral
        let result = recommend_careers(
            &catalog,
            &ScoringWeights::default(),
            &InterestProfile::default(),
            None,
            None,
            12,
        );

        assert!(result.iter().all(|r| r.fit_score == 15.0));
        assert_eq!(
            ids(&result),
            vec!["software_engineer", "data_scientist", "graphic_designer", "teacher", "business_analyst"]
        );
    }
}
