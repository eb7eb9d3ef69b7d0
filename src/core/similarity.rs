use crate::models::{AptitudeScores, InterestProfile, RequiredAptitude};

/// Match ratio used when there is nothing to compare
pub const NEUTRAL_MATCH: f64 = 0.5;

/// Cosine similarity between two vectors
///
/// Returns 0.0 for empty or mismatched inputs and when either vector has zero
/// magnitude.
#[inline]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|y| y * y).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Cosine similarity between a student's interests and a career's ideal profile
#[inline]
pub fn interest_similarity(student: &InterestProfile, ideal: &InterestProfile) -> f64 {
    cosine_similarity(&student.to_array(), &ideal.to_array())
}

/// How closely a student's aptitude matches a career's requirements (0-1)
///
/// Each required domain scores `1 - |student - required|` on a 0-1 scale and
/// the result is the mean. Returns [`NEUTRAL_MATCH`] without aptitude data or
/// when the career requires nothing.
pub fn aptitude_match(student: Option<&AptitudeScores>, required: &RequiredAptitude) -> f64 {
    let Some(student) = student else {
        return NEUTRAL_MATCH;
    };

    let (total, count) = required
        .iter()
        .map(|(domain, level)| 1.0 - (student.get(domain) / 100.0 - level / 100.0).abs())
        .fold((0.0, 0usize), |(sum, n), m| (sum + m, n + 1));

    if count == 0 {
        NEUTRAL_MATCH
    } else {
        total / count as f64
    }
}

/// Round to one decimal place
///
/// Rounds the exact binary value, ties to even, so `6.25` becomes `6.2` and
/// `0.35` (stored just below) becomes `0.3`.
pub fn round_to_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical_vectors() {
        let v = [20.0, 90.0, 30.0, 20.0, 40.0, 60.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_cosine_is_scale_invariant() {
        let a = [1.0, 2.0, 3.0];
        let b = [10.0, 20.0, 30.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn test_aptitude_match_without_aptitude() {
        let required = RequiredAptitude::all(85.0, 70.0, 60.0, 50.0);
        assert_eq!(aptitude_match(None, &required), NEUTRAL_MATCH);
    }

    #[test]
    fn test_aptitude_match_exact() {
        let required = RequiredAptitude::all(85.0, 70.0, 60.0, 50.0);
        let student = AptitudeScores::from_array([85.0, 70.0, 60.0, 50.0]);
        assert!((aptitude_match(Some(&student), &required) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_aptitude_match_gap() {
        // Gaps of 0.2 and 0.4 on two domains -> (0.8 + 0.6) / 2
        let required = RequiredAptitude {
            logical: Some(80.0),
            verbal: Some(60.0),
            ..Default::default()
        };
        let student = AptitudeScores::from_array([60.0, 0.0, 0.0, 100.0]);
        assert!((aptitude_match(Some(&student), &required) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_aptitude_match_no_requirements() {
        let student = AptitudeScores::neutral();
        assert_eq!(aptitude_match(Some(&student), &RequiredAptitude::default()), NEUTRAL_MATCH);
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(66.666), 66.7);
        assert_eq!(round_to_tenth(100.0), 100.0);
        assert_eq!(round_to_tenth(33.34), 33.3);
    }

    #[test]
    fn test_round_to_tenth_ties_to_even() {
        assert_eq!(round_to_tenth(6.25), 6.2);
        assert_eq!(round_to_tenth(6.75), 6.8);
        assert_eq!(round_to_tenth(0.35), 0.3);
        assert_eq!(round_to_tenth(-0.25), -0.2);
        assert_eq!(round_to_tenth(110.0), 110.0);
    }
}
