// Core engine exports
pub mod aptitude;
pub mod careers;
pub mod catalog;
pub mod engine;
pub mod interpreter;
pub mod normalizer;
pub mod scoring;
pub mod similarity;
pub mod streams;

pub use aptitude::{calculate_scores, identify_strengths, interpret_scores, next_question, score_aptitude};
pub use careers::recommend_careers;
pub use catalog::Catalog;
pub use engine::Engine;
pub use interpreter::{interpret_interests, top_categories};
pub use normalizer::{interest_profile, normalize_interests};
pub use scoring::{generate_reasons, score_career, CareerScore};
pub use similarity::{aptitude_match, cosine_similarity, interest_similarity, round_to_tenth};
pub use streams::{recommend_streams, score_stream};
