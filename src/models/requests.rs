use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{ManualPreferences, UserInterestProfile};

/// Request to extract a user's interest profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExtractInterestsRequest {
    #[validate(length(min = 1, max = 255))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
}

/// Request to recommend mentors for a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendMentorsRequest {
    #[validate(length(min = 1, max = 255))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
    /// Interests typed in by the user, merged into the extracted profile
    #[serde(default)]
    pub preferences: Option<ManualPreferences>,
}

/// Request to score mentors against an explicit interest profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreMentorsRequest {
    #[validate(length(min = 1, max = 255))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub profile: UserInterestProfile,
}
