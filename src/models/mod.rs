// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AnswerRecord, AuthoredQuestion, DataSource, Degraded, FetchWarning, InterestSet,
    ManualPreferences, MentorCandidate, MentorRecommendation, RecommendationScore,
    ScoringWeights, StoredProfile, UserInterestProfile, MAX_MATCH_REASONS,
};
pub use requests::{ExtractInterestsRequest, RecommendMentorsRequest, ScoreMentorsRequest};
pub use responses::{
    ErrorResponse, ExtractInterestsResponse, HealthResponse, RecommendMentorsResponse,
    ScoreMentorsResponse,
};
