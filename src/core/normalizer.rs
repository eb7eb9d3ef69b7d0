use crate::core::interpreter::{interpret_interests, top_categories, TOP_INTERESTS};
use crate::models::{InterestProfile, InterestResponse, NormalizedInterests};

/// Turn raw survey ratings into a 0-100 interest profile
///
/// Ratings are averaged per category and rescaled so the strongest category
/// reads 100. When no category mean is positive the raw means are kept as-is.
/// Responses with an unknown category or a non-numeric rating are skipped.
pub fn normalize_interests(responses: &[InterestResponse]) -> NormalizedInterests {
    let profile = interest_profile(responses);

    NormalizedInterests {
        profile,
        primary_interests: top_categories(profile.iter(), TOP_INTERESTS),
        interpretation: interpret_interests(profile.iter()),
    }
}

/// Normalized profile only
pub fn interest_profile(responses: &[InterestResponse]) -> InterestProfile {
    let mut sums = [0.0f64; 6];
    let mut counts = [0usize; 6];
    let mut skipped = 0usize;

    for response in responses {
        match response.parsed() {
            Some((category, rating)) => {
                sums[category.index()] += rating;
                counts[category.index()] += 1;
            }
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!("Skipped {} malformed interest responses", skipped);
    }

    let means: [f64; 6] = std::array::from_fn(|i| {
        if counts[i] > 0 {
            sums[i] / counts[i] as f64
        } else {
            0.0
        }
    });

    let max = means.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max <= 0.0 {
        return InterestProfile::from_array(means);
    }

    InterestProfile::from_array(means.map(|mean| mean / max * 100.0))
}
