// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AptitudeDomain, AptitudeInterpretation, AptitudeItem, AptitudeLevel, AptitudeQuestion,
    AptitudeReport, AptitudeResponse, AptitudeScores, AssessmentState, CareerCatalogEntry,
    CareerRecommendation, InterestProfile, InterestResponse, NextQuestion, NormalizedInterests,
    PersonalityTraits, RequiredAptitude, RiasecCategory, ScoringWeights, StreamCatalogEntry,
    StreamRecommendation,
};
pub use requests::{AnsweredItem, NextQuestionRequest, RecommendationRequest, StudentProfile};
pub use responses::{ErrorResponse, HealthResponse, RecommendationsResponse, VersionResponse};
