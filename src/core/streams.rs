use crate::core::catalog::Catalog;
use crate::core::similarity::round_to_tenth;
use crate::models::{AptitudeScores, InterestProfile, StreamCatalogEntry, StreamRecommendation};
use std::cmp::Ordering;

/// Interest or aptitude levels above these add a reason
const INTEREST_REASON_THRESHOLD: f64 = 0.6;
const APTITUDE_REASON_THRESHOLD: f64 = 0.7;

/// Rank every catalog stream for a student
///
/// Each stream sums the student's 0-1 interest level over its suitable
/// categories and, when aptitude is known, one aptitude term (mean of the
/// stream's domains). The sum is divided by the number of terms.
/// `class_level` is accepted for parity with career recommendations and
/// does not affect the ranking.
pub fn recommend_streams(
    catalog: &Catalog,
    interests: &InterestProfile,
    aptitude: Option<&AptitudeScores>,
    _class_level: u8,
) -> Vec<StreamRecommendation> {
    let mut recommendations: Vec<StreamRecommendation> = catalog
        .streams
        .iter()
        .map(|stream| {
            let (fit, reasons) = score_stream(stream, interests, aptitude);

            StreamRecommendation {
                stream: stream.name.clone(),
                info: stream.clone(),
                fit_score: round_to_tenth(fit * 100.0),
                reasons,
                career_examples: catalog.example_careers(&stream.name),
            }
        })
        .collect();

    recommendations.sort_by(|a, b| {
        b.fit_score
            .partial_cmp(&a.fit_score)
            .unwrap_or(Ordering::Equal)
    });

    recommendations
}

/// Normalized (roughly 0-1) fit of one stream and its reasons
pub fn score_stream(
    stream: &StreamCatalogEntry,
    interests: &InterestProfile,
    aptitude: Option<&AptitudeScores>,
) -> (f64, Vec<String>) {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    for &category in &stream.suitable_interests {
        let value = interests.get(category);
        let level = value / 100.0;
        score += level;
        if level > INTEREST_REASON_THRESHOLD {
            reasons.push(format!("High {} interest ({:.0}%)", category, value));
        }
    }

    if let Some(aptitude) = aptitude {
        let term = aptitude_term(stream, aptitude);
        score += term;
        if term > APTITUDE_REASON_THRESHOLD {
            if let Some(reason) = &stream.aptitude_reason {
                reasons.push(reason.clone());
            }
        }
    }

    let divisor = stream.suitable_interests.len() + usize::from(aptitude.is_some());
    if divisor == 0 {
        return (0.0, reasons);
    }

    (score / divisor as f64, reasons)
}

/// Mean of the stream's aptitude domains on a 0-1 scale; 0 when it has none
fn aptitude_term(stream: &StreamCatalogEntry, aptitude: &AptitudeScores) -> f64 {
    if stream.aptitude_domains.is_empty() {
        return 0.0;
    }

    let sum: f64 = stream
        .aptitude_domains
        .iter()
        .map(|domain| aptitude.get(*domain))
        .sum();

    sum / (stream.aptitude_domains.len() as f64 * 100.0)
}
