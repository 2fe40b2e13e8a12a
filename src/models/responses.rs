use serde::{Deserialize, Serialize};
use crate::models::domain::{FetchWarning, MentorRecommendation, RecommendationScore, UserInterestProfile};

/// Response for the interest extraction endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractInterestsResponse {
    pub profile: UserInterestProfile,
    pub warnings: Vec<FetchWarning>,
}

/// Response for the mentor recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendMentorsResponse {
    pub request_id: String,
    pub recommendations: Vec<MentorRecommendation>,
    pub total_candidates: usize,
    pub warnings: Vec<FetchWarning>,
}

/// Response for the raw scoring endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreMentorsResponse {
    pub scores: Vec<RecommendationScore>,
    pub warnings: Vec<FetchWarning>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
