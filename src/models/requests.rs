use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{AptitudeScores, InterestProfile, PersonalityTraits};

/// Student profile submitted for recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StudentProfile {
    pub interests: InterestProfile,
    #[serde(default)]
    pub aptitude: Option<AptitudeScores>,
    #[serde(default)]
    pub personality: Option<PersonalityTraits>,
    #[validate(range(min = 1, max = 12))]
    #[serde(alias = "classLevel")]
    pub class_level: u8,
    #[serde(default)]
    pub location: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub constraints: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Request to recommend careers or streams
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[validate(nested)]
    pub profile: StudentProfile,
    #[validate(length(min = 1))]
    #[serde(default = "default_recommendation_type")]
    pub recommendation_type: String,
}

fn default_recommendation_type() -> String {
    "career".to_string()
}

/// Previously answered aptitude item; only string ids are matched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnsweredItem {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub correct: serde_json::Value,
}

/// Request for the next aptitude question
///
/// `difficulty` is echoed on the returned question and never filters items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextQuestionRequest {
    #[serde(default)]
    pub answers: Vec<AnsweredItem>,
    #[serde(default = "default_difficulty")]
    pub difficulty: u8,
}

impl NextQuestionRequest {
    pub fn answered_ids(&self) -> Vec<String> {
        self.answers
            .iter()
            .filter_map(|a| a.id.as_str().map(str::to_string))
            .collect()
    }
}

pub fn default_difficulty() -> u8 {
    3
}
