use crate::models::{
    AptitudeDomain, AptitudeInterpretation, AptitudeItem, AptitudeLevel, AptitudeQuestion,
    AptitudeReport, AptitudeResponse, AptitudeScores, NextQuestion,
};
use crate::core::similarity::round_to_tenth;
use std::collections::HashSet;

/// Score at or above which a domain counts as a strength
pub const STRENGTH_THRESHOLD: f64 = 70.0;

/// Maximum number of strengths reported
pub const MAX_STRENGTHS: usize = 3;

/// Pick the next question from the item bank
///
/// Items are scanned in bank order and the first one not yet answered is
/// returned. `difficulty` is echoed back on the question but does not filter
/// the bank. Once every item has been answered the assessment is
/// [`NextQuestion::Done`].
pub fn next_question(items: &[AptitudeItem], answered_ids: &[String], difficulty: u8) -> NextQuestion {
    let answered: HashSet<&str> = answered_ids.iter().map(String::as_str).collect();

    items
        .iter()
        .find(|item| !answered.contains(item.id.as_str()))
        .map(|item| NextQuestion::InProgress(AptitudeQuestion::from_item(item, difficulty)))
        .unwrap_or(NextQuestion::Done)
}

/// Per-domain percentage of correct answers
///
/// Domains without responses get the neutral score of 50.0. Responses for
/// unknown domains are ignored.
pub fn calculate_scores(responses: &[AptitudeResponse]) -> AptitudeScores {
    let mut correct = [0u32; 4];
    let mut total = [0u32; 4];

    for response in responses {
        let Some(domain) = response.parsed_domain() else {
            continue;
        };
        total[domain.index()] += 1;
        if response.is_correct() {
            correct[domain.index()] += 1;
        }
    }

    AptitudeScores::from_array(std::array::from_fn(|i| {
        if total[i] > 0 {
            round_to_tenth(100.0 * correct[i] as f64 / total[i] as f64)
        } else {
            AptitudeScores::NEUTRAL
        }
    }))
}

/// Qualitative level for every domain
pub fn interpret_scores(scores: &AptitudeScores) -> AptitudeInterpretation {
    AptitudeInterpretation {
        logical: AptitudeLevel::from_score(scores.logical),
        numerical: AptitudeLevel::from_score(scores.numerical),
        spatial: AptitudeLevel::from_score(scores.spatial),
        verbal: AptitudeLevel::from_score(scores.verbal),
    }
}

/// Up to three domains scoring at least 70, in domain order
pub fn identify_strengths(scores: &AptitudeScores) -> Vec<AptitudeDomain> {
    scores
        .iter()
        .filter(|(_, score)| *score >= STRENGTH_THRESHOLD)
        .map(|(domain, _)| domain)
        .take(MAX_STRENGTHS)
        .collect()
}

/// Score a finished assessment
pub fn score_aptitude(responses: &[AptitudeResponse]) -> AptitudeReport {
    let scores = calculate_scores(responses);

    AptitudeReport {
        scores,
        interpretation: interpret_scores(&scores),
        strengths: identify_strengths(&scores),
    }
}
