use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::Recommender;
use crate::error::RecommendError;
use crate::models::{
    ErrorResponse, ExtractInterestsRequest, ExtractInterestsResponse, HealthResponse,
    RecommendMentorsRequest, RecommendMentorsResponse, ScoreMentorsRequest, ScoreMentorsResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    pub matching: MatchingSettings,
}

/// Configure all mentor-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/interests/extract", web::post().to(extract_interests))
        .route("/mentors/recommend", web::post().to(recommend_mentors))
        .route("/mentors/score", web::post().to(score_mentors));
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn invalid_user(e: RecommendError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Invalid user".to_string(),
        message: e.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Extract interests endpoint
///
/// POST /api/v1/interests/extract
///
/// Request body:
/// ```json
/// { "userId": "string" }
/// ```
async fn extract_interests(
    state: web::Data<AppState>,
    req: web::Json<ExtractInterestsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for extract_interests request: {:?}", errors);
        return validation_failed(errors);
    }

    match state.recommender.extractor().extract(&req.user_id).await {
        Ok(result) => HttpResponse::Ok().json(ExtractInterestsResponse {
            profile: result.value,
            warnings: result.warnings,
        }),
        Err(e) => invalid_user(e),
    }
}

/// Recommend mentors endpoint
///
/// POST /api/v1/mentors/recommend
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "limit": 20,
///   "preferences": {
///     "academicInterests": ["string"],
///     "researchTopics": ["string"],
///     "careerGoals": ["string"],
///     "skillsToLearn": ["string"]
///   }
/// }
/// ```
async fn recommend_mentors(
    state: web::Data<AppState>,
    req: web::Json<RecommendMentorsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend_mentors request: {:?}", errors);
        return validation_failed(errors);
    }

    let limit = state.matching.resolve_limit(req.limit);

    tracing::info!("Recommending mentors for user: {}, limit: {}", req.user_id, limit);

    let result = match state
        .recommender
        .recommend(&req.user_id, req.preferences.as_ref(), Some(limit))
        .await
    {
        Ok(result) => result,
        Err(e) => return invalid_user(e),
    };

    let response = RecommendMentorsResponse {
        request_id: uuid::Uuid::new_v4().to_string(),
        recommendations: result.value.recommendations,
        total_candidates: result.value.total_candidates,
        warnings: result.warnings,
    };

    tracing::info!(
        "Returning {} recommendations for user {} (from {} mentors)",
        response.recommendations.len(),
        req.user_id,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Score mentors against an explicit interest profile
///
/// POST /api/v1/mentors/score
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "profile": { "academicInterests": ["string"] }
/// }
/// ```
async fn score_mentors(
    state: web::Data<AppState>,
    req: web::Json<ScoreMentorsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score_mentors request: {:?}", errors);
        return validation_failed(errors);
    }

    match state
        .recommender
        .scorer()
        .score_mentors(&req.user_id, &req.profile)
        .await
    {
        Ok(result) => HttpResponse::Ok().json(ScoreMentorsResponse {
            scores: result.value,
            warnings: result.warnings,
        }),
        Err(e) => invalid_user(e),
    }
}
