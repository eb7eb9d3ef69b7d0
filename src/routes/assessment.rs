use actix_web::{web, HttpResponse, Responder};
use crate::models::{AptitudeResponse, InterestResponse, NextQuestionRequest};
use super::AppState;

/// Configure assessment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/analyze/interests", web::post().to(analyze_interests))
        .route("/assess/aptitude/next-question", web::post().to(next_question))
        .route("/assess/aptitude/score", web::post().to(score_aptitude));
}

/// Analyze interest survey responses
///
/// POST /api/v1/analyze/interests
///
/// Request body:
/// ```json
/// [{ "category": "investigative", "rating": 5 }]
/// ```
async fn analyze_interests(
    state: web::Data<AppState>,
    req: web::Json<Vec<InterestResponse>>,
) -> impl Responder {
    tracing::info!("Analyzing {} interest responses", req.len());

    HttpResponse::Ok().json(state.engine.normalize_interests(&req))
}

/// Next unanswered aptitude question
///
/// POST /api/v1/assess/aptitude/next-question
///
/// Request body:
/// ```json
/// { "answers": [{ "id": "L1", "correct": true }], "difficulty": 3 }
/// ```
///
/// Responds with the question and `"status": "in_progress"`, or
/// `{ "status": "done" }` once the item bank is exhausted.
async fn next_question(
    state: web::Data<AppState>,
    req: web::Json<NextQuestionRequest>,
) -> impl Responder {
    let answered = req.answered_ids();
    HttpResponse::Ok().json(state.engine.next_aptitude_question(&answered, req.difficulty))
}

/// Score a completed aptitude assessment
///
/// POST /api/v1/assess/aptitude/score
///
/// Request body:
/// ```json
/// [{ "id": "L1", "domain": "logical", "correct": true }]
/// ```
async fn score_aptitude(
    state: web::Data<AppState>,
    req: web::Json<Vec<AptitudeResponse>>,
) -> impl Responder {
    tracing::info!("Scoring {} aptitude responses", req.len());

    HttpResponse::Ok().json(state.engine.score_aptitude(&req))
}
