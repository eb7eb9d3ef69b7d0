use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{HealthResponse, RecommendationRequest, RecommendationsResponse, VersionResponse};
use super::{validation_failed, AppState};

const SERVICE_NAME: &str = "EduPath Engine";

/// Configure recommendation and service routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/version", web::get().to(version))
        .route("/recommend/careers", web::post().to(recommend_careers))
        .route("/recommend/streams", web::post().to(recommend_streams));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

async fn version() -> impl Responder {
    HttpResponse::Ok().json(VersionResponse {
        ok: true,
        service: SERVICE_NAME.to_string(),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Career recommendations
///
/// POST /api/v1/recommend/careers
///
/// Request body:
/// ```json
/// {
///   "profile": {
///     "interests": { "realistic": 20, "investigative": 90, ... },
///     "aptitude": { "logical": 80, "numerical": 70, "spatial": 50, "verbal": 60 },
///     "personality": null,
///     "class_level": 10
///   },
///   "recommendation_type": "career"
/// }
/// ```
async fn recommend_careers(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for career request: {:?}", errors);
        return validation_failed(errors);
    }

    let profile = &req.profile;
    let recommendations = state.engine.recommend_careers(
        &profile.interests,
        profile.aptitude.as_ref(),
        profile.personality.as_ref(),
        profile.class_level,
    );

    tracing::info!(
        "Returning {} career recommendations (class {})",
        recommendations.len(),
        profile.class_level
    );

    HttpResponse::Ok().json(RecommendationsResponse { recommendations })
}

/// Stream recommendations
///
/// POST /api/v1/recommend/streams
///
/// Same body as career recommendations; personality is ignored.
async fn recommend_streams(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for stream request: {:?}", errors);
        return validation_failed(errors);
    }

    let profile = &req.profile;
    let recommendations = state.engine.recommend_streams(
        &profile.interests,
        profile.aptitude.as_ref(),
        profile.class_level,
    );

    tracing::info!(
        "Returning {} stream recommendations (class {})",
        recommendations.len(),
        profile.class_level
    );

    HttpResponse::Ok().json(RecommendationsResponse { recommendations })
}
