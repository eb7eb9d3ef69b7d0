use crate::models::RiasecCategory;
use std::cmp::Ordering;

/// Sentence used when there is nothing to interpret
pub const BALANCED_PROFILE: &str =
    "Balanced profile; explore multiple streams to discover preferences.";

/// Number of categories reported as primary interests
pub const TOP_INTERESTS: usize = 3;

/// Explanatory sentence for a category
pub fn category_insight(category: RiasecCategory) -> &'static str {
    match category {
        RiasecCategory::Investigative => {
            "Enjoys problem-solving and analysis; STEM and research pathways may fit well."
        }
        RiasecCategory::Realistic => {
            "Prefers hands-on, practical tasks; engineering, operations, or technical trades can fit."
        }
        RiasecCategory::Artistic => {
            "Values creativity and expression; design, media, or content roles may suit."
        }
        RiasecCategory::Social => {
            "Likes helping and collaborating; teaching, counseling, or community roles can align."
        }
        RiasecCategory::Enterprising => {
            "Enjoys leading and influencing; business, entrepreneurship, or management paths may fit."
        }
        RiasecCategory::Conventional => {
            "Organized and detail-focused; finance, analysis, or administrative roles may suit."
        }
    }
}

/// Highest-scoring `n` categories, ties kept in input order
pub fn top_categories<I>(scores: I, n: usize) -> Vec<(RiasecCategory, f64)>
where
    I: IntoIterator<Item = (RiasecCategory, f64)>,
{
    let mut ranked: Vec<_> = scores.into_iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    ranked
}

/// Explain the top interests of a profile in plain sentences
pub fn interpret_interests<I>(scores: I) -> Vec<String>
where
    I: IntoIterator<Item = (RiasecCategory, f64)>,
{
    let tips: Vec<String> = top_categories(scores, TOP_INTERESTS)
        .into_iter()
        .map(|(category, _)| category_insight(category).to_string())
        .collect();

    if tips.is_empty() {
        vec![BALANCED_PROFILE.to_string()]
    } else {
        tips
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InterestProfile;

    #[test]
    fn test_top_categories_order() {
        let profile = InterestProfile::from_array([10.0, 100.0, 40.0, 80.0, 0.0, 0.0]);
        let top = top_categories(profile.iter(), 3);

        assert_eq!(
            top.iter().map(|(c, _)| *c).collect::<Vec<_>>(),
            vec![RiasecCategory::Investigative, RiasecCategory::Social, RiasecCategory::Artistic]
        );
    }

    #[test]
    fn test_top_categories_ties_keep_order() {
        let top = top_categories(InterestProfile::default().iter(), 3);

        assert_eq!(
            top.iter().map(|(c, _)| *c).collect::<Vec<_>>(),
            vec![RiasecCategory::Realistic, RiasecCategory::Investigative, RiasecCategory::Artistic]
        );
    }

    #[test]
    fn test_interpretation_sentences() {
        let profile = InterestProfile::from_array([0.0, 0.0, 90.0, 100.0, 80.0, 0.0]);
        let tips = interpret_interests(profile.iter());

        assert_eq!(tips.len(), 3);
        assert!(tips[0].starts_with("Likes helping"));
        assert!(tips[1].starts_with("Values creativity"));
        assert!(tips[2].starts_with("Enjoys leading"));
    }

    #[test]
    fn test_empty_profile_fallback() {
        let tips = interpret_interests(Vec::<(RiasecCategory, f64)>::new());
        assert_eq!(tips, vec![BALANCED_PROFILE.to_string()]);
    }
}
