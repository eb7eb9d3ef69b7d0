use crate::core::similarity::{aptitude_match, interest_similarity};
use crate::models::{AptitudeScores, CareerCatalogEntry, InterestProfile, ScoringWeights};

/// Student and ideal scores above this count as a shared interest
const ALIGNMENT_THRESHOLD: f64 = 60.0;

/// Similarity tiers for the overall-fit reason
const EXCELLENT_SIMILARITY: f64 = 0.8;
const GOOD_SIMILARITY: f64 = 0.6;

/// Maximum reasons attached to a recommendation
pub const MAX_REASONS: usize = 3;

/// Raw (0-1 scale) scores for one career
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CareerScore {
    pub interest_similarity: f64,
    pub aptitude_match: f64,
    /// Weighted blend plus any contextual bonus; may exceed 1.0
    pub combined: f64,
}

/// Score a career against a student profile
///
/// combined = interest_similarity * w_interest + aptitude_match * w_aptitude,
/// plus the early-access bonus for young students on approachable careers.
pub fn score_career(
    career: &CareerCatalogEntry,
    interests: &InterestProfile,
    aptitude: Option<&AptitudeScores>,
    class_level: u8,
    weights: &ScoringWeights,
) -> CareerScore {
    let interest_similarity = interest_similarity(interests, &career.riasec_profile);
    let aptitude_match = aptitude_match(aptitude, &career.required_aptitude);

    let mut combined = interest_similarity * weights.interest + aptitude_match * weights.aptitude;

    if weights.is_early_access(&career.id, class_level) {
        combined += weights.early_access_bonus;
    }

    CareerScore {
        interest_similarity,
        aptitude_match,
        combined,
    }
}

/// Human-readable reasons for a career, at most [`MAX_REASONS`]
///
/// Shared strong interests come first (in category order), followed by the
/// overall similarity tier.
pub fn generate_reasons(
    interests: &InterestProfile,
    career: &CareerCatalogEntry,
    similarity: f64,
) -> Vec<String> {
    let mut reasons: Vec<String> = interests
        .iter()
        .filter(|(category, student_score)| {
            *student_score > ALIGNMENT_THRESHOLD
                && career.riasec_profile.get(*category) > ALIGNMENT_THRESHOLD
        })
        .map(|(category, _)| format!("Your {} interests align well with this career", category))
        .collect();

    if similarity > EXCELLENT_SIMILARITY {
        reasons.push("Excellent overall personality match".to_string());
    } else if similarity > GOOD_SIMILARITY {
        reasons.push("Good personality fit for this role".to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}
