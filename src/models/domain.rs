use serde::{Deserialize, Serialize};
use std::fmt;

/// RIASEC interest category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiasecCategory {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl RiasecCategory {
    /// All categories in canonical order
    pub const ALL: [RiasecCategory; 6] = [
        RiasecCategory::Realistic,
        RiasecCategory::Investigative,
        RiasecCategory::Artistic,
        RiasecCategory::Social,
        RiasecCategory::Enterprising,
        RiasecCategory::Conventional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiasecCategory::Realistic => "realistic",
            RiasecCategory::Investigative => "investigative",
            RiasecCategory::Artistic => "artistic",
            RiasecCategory::Social => "social",
            RiasecCategory::Enterprising => "enterprising",
            RiasecCategory::Conventional => "conventional",
        }
    }

    /// Parse a category name. Matching is exact (lowercase).
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RiasecCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aptitude domain covered by the item bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AptitudeDomain {
    Logical,
    Numerical,
    Spatial,
    Verbal,
}

impl AptitudeDomain {
    pub const ALL: [AptitudeDomain; 4] = [
        AptitudeDomain::Logical,
        AptitudeDomain::Numerical,
        AptitudeDomain::Spatial,
        AptitudeDomain::Verbal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AptitudeDomain::Logical => "logical",
            AptitudeDomain::Numerical => "numerical",
            AptitudeDomain::Spatial => "spatial",
            AptitudeDomain::Verbal => "verbal",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == name)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AptitudeDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interest profile on a 0-100 scale, one value per RIASEC category
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InterestProfile {
    pub realistic: f64,
    pub investigative: f64,
    pub artistic: f64,
    pub social: f64,
    pub enterprising: f64,
    pub conventional: f64,
}

impl InterestProfile {
    pub fn from_array(values: [f64; 6]) -> Self {
        let [realistic, investigative, artistic, social, enterprising, conventional] = values;
        Self {
            realistic,
            investigative,
            artistic,
            social,
            enterprising,
            conventional,
        }
    }

    /// Values in canonical category order
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.realistic,
            self.investigative,
            self.artistic,
            self.social,
            self.enterprising,
            self.conventional,
        ]
    }

    pub fn get(&self, category: RiasecCategory) -> f64 {
        self.to_array()[category.index()]
    }

    /// Iterate `(category, score)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (RiasecCategory, f64)> {
        RiasecCategory::ALL.into_iter().zip(self.to_array())
    }
}

/// Per-domain aptitude scores on a 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AptitudeScores {
    pub logical: f64,
    pub numerical: f64,
    pub spatial: f64,
    pub verbal: f64,
}

impl AptitudeScores {
    /// Score given to a domain with no observed responses
    pub const NEUTRAL: f64 = 50.0;

    pub fn neutral() -> Self {
        Self::from_array([Self::NEUTRAL; 4])
    }

    pub fn from_array(values: [f64; 4]) -> Self {
        let [logical, numerical, spatial, verbal] = values;
        Self {
            logical,
            numerical,
            spatial,
            verbal,
        }
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.logical, self.numerical, self.spatial, self.verbal]
    }

    pub fn get(&self, domain: AptitudeDomain) -> f64 {
        self.to_array()[domain.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (AptitudeDomain, f64)> {
        AptitudeDomain::ALL.into_iter().zip(self.to_array())
    }
}

/// Big-Five personality traits. Accepted and passed through; not scored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalityTraits {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

/// Aptitude levels a career expects. Domains left out are not compared.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RequiredAptitude {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numerical: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spatial: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbal: Option<f64>,
}

impl RequiredAptitude {
    /// Requirement on every domain
    pub fn all(logical: f64, numerical: f64, spatial: f64, verbal: f64) -> Self {
        Self {
            logical: Some(logical),
            numerical: Some(numerical),
            spatial: Some(spatial),
            verbal: Some(verbal),
        }
    }

    /// Required `(domain, level)` pairs in canonical domain order
    pub fn iter(&self) -> impl Iterator<Item = (AptitudeDomain, f64)> {
        AptitudeDomain::ALL
            .into_iter()
            .zip([self.logical, self.numerical, self.spatial, self.verbal])
            .filter_map(|(domain, level)| level.map(|l| (domain, l)))
    }
}

/// Static career record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerCatalogEntry {
    pub id: String,
    pub name: String,
    pub riasec_profile: InterestProfile,
    #[serde(default)]
    pub required_aptitude: RequiredAptitude,
    #[serde(default)]
    pub education_path: Vec<String>,
    #[serde(default)]
    pub salary_range: String,
    #[serde(default)]
    pub job_market: String,
    #[serde(default)]
    pub description: String,
}

/// Static academic stream record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamCatalogEntry {
    pub name: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub career_paths: Vec<String>,
    #[serde(default)]
    pub entrance_exams: Vec<String>,
    pub suitable_interests: Vec<RiasecCategory>,
    /// Domains averaged into the stream's aptitude term
    #[serde(default)]
    pub aptitude_domains: Vec<AptitudeDomain>,
    /// Reason emitted when the aptitude term is strong
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aptitude_reason: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Aptitude item bank entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AptitudeItem {
    pub id: String,
    pub domain: AptitudeDomain,
    pub text: String,
    pub answer: String,
}

/// Question as shown to the student (no answer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AptitudeQuestion {
    pub id: String,
    pub domain: AptitudeDomain,
    pub text: String,
    pub difficulty: u8,
}

impl AptitudeQuestion {
    pub fn from_item(item: &AptitudeItem, difficulty: u8) -> Self {
        Self {
            id: item.id.clone(),
            domain: item.domain,
            text: item.text.clone(),
            difficulty,
        }
    }
}

/// Progress of an aptitude assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentState {
    InProgress,
    Done,
}

/// Outcome of next-question selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NextQuestion {
    InProgress(AptitudeQuestion),
    Done,
}

impl NextQuestion {
    pub fn state(&self) -> AssessmentState {
        match self {
            NextQuestion::InProgress(_) => AssessmentState::InProgress,
            NextQuestion::Done => AssessmentState::Done,
        }
    }

    pub fn is_done(&self) -> bool {
        self.state() == AssessmentState::Done
    }

    pub fn question(&self) -> Option<&AptitudeQuestion> {
        match self {
            NextQuestion::InProgress(question) => Some(question),
            NextQuestion::Done => None,
        }
    }
}

/// Raw interest survey answer. Entries with an unknown category or a
/// non-numeric rating are ignored by the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterestResponse {
    #[serde(default)]
    pub category: serde_json::Value,
    #[serde(default)]
    pub rating: serde_json::Value,
}

impl InterestResponse {
    pub fn new(category: impl Into<String>, rating: impl Into<serde_json::Value>) -> Self {
        Self {
            category: serde_json::Value::String(category.into()),
            rating: rating.into(),
        }
    }

    /// The `(category, rating)` pair if both parts are usable
    ///
    /// Booleans count as ratings of 1 and 0.
    pub fn parsed(&self) -> Option<(RiasecCategory, f64)> {
        let category = self.category.as_str().and_then(RiasecCategory::parse)?;
        let rating = match &self.rating {
            serde_json::Value::Bool(b) => f64::from(u8::from(*b)),
            other => other.as_f64()?,
        };
        Some((category, rating))
    }
}

/// Single scored aptitude answer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AptitudeResponse {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub domain: serde_json::Value,
    #[serde(default)]
    pub correct: serde_json::Value,
}

impl AptitudeResponse {
    pub fn new(domain: impl Into<String>, correct: bool) -> Self {
        Self {
            id: serde_json::Value::Null,
            domain: serde_json::Value::String(domain.into()),
            correct: serde_json::Value::Bool(correct),
        }
    }

    /// Known domain of the answer, if any
    pub fn parsed_domain(&self) -> Option<AptitudeDomain> {
        self.domain.as_str().and_then(AptitudeDomain::parse)
    }

    /// Whether the answer counts as correct; any truthy JSON value does
    pub fn is_correct(&self) -> bool {
        is_truthy(&self.correct)
    }
}

pub(crate) fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().map_or(false, |v| v != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(a) => !a.is_empty(),
        serde_json::Value::Object(o) => !o.is_empty(),
    }
}

/// Qualitative aptitude level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AptitudeLevel {
    High,
    Medium,
    Developing,
}

impl AptitudeLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            AptitudeLevel::High
        } else if score >= 40.0 {
            AptitudeLevel::Medium
        } else {
            AptitudeLevel::Developing
        }
    }
}

/// Level per aptitude domain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AptitudeInterpretation {
    pub logical: AptitudeLevel,
    pub numerical: AptitudeLevel,
    pub spatial: AptitudeLevel,
    pub verbal: AptitudeLevel,
}

/// Normalized interest survey outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedInterests {
    pub profile: InterestProfile,
    pub primary_interests: Vec<(RiasecCategory, f64)>,
    pub interpretation: Vec<String>,
}

/// Scored aptitude assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AptitudeReport {
    pub scores: AptitudeScores,
    pub interpretation: AptitudeInterpretation,
    pub strengths: Vec<AptitudeDomain>,
}

/// Ranked career result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub career: CareerCatalogEntry,
    pub fit_score: f64,
    pub interest_match: f64,
    pub aptitude_match: f64,
    pub reasons: Vec<String>,
}

/// Ranked stream result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamRecommendation {
    pub stream: String,
    pub info: StreamCatalogEntry,
    pub fit_score: f64,
    pub reasons: Vec<String>,
    pub career_examples: Vec<String>,
}

/// Scoring weights and contextual adjustments
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringWeights {
    pub interest: f64,
    pub aptitude: f64,
    /// Flat bonus for early-access careers (not clamped)
    pub early_access_bonus: f64,
    /// Highest class level that still receives the bonus
    pub early_access_max_class: u8,
    pub early_access_careers: Vec<String>,
    pub max_recommendations: usize,
}

impl ScoringWeights {
    pub fn is_early_access(&self, career_id: &str, class_level: u8) -> bool {
        class_level <= self.early_access_max_class
            && self.early_access_careers.iter().any(|id| id == career_id)
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            interest: 0.7,
            aptitude: 0.3,
            early_access_bonus: 0.1,
            early_access_max_class: 10,
            early_access_careers: vec!["teacher".to_string(), "graphic_designer".to_string()],
            max_recommendations: 10,
        }
    }
}
