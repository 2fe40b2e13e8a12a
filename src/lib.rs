//! ThinkBridge Match - mentor matching for the ThinkBridge academic platform
//!
//! This library derives interest profiles from what users write and post, and
//! ranks registered mentors against them with a weighted keyword-overlap score.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{extract_keywords, overlap_score, InterestExtractor, MentorScorer, Recommender};
pub use error::RecommendError;
pub use models::{Degraded, FetchWarning, RecommendationScore, ScoringWeights, UserInterestProfile};
pub use services::{AcademicStore, InMemoryStore, StoreError};
