// Core algorithm exports
pub mod interests;
pub mod keywords;
pub mod matcher;
pub mod overlap;
pub mod recommender;
pub mod scoring;

pub use interests::{build_interest_profile, InterestExtractor};
pub use keywords::{extract_keywords, ACADEMIC_VOCABULARY};
pub use matcher::{assemble_candidates, rank_candidates, MentorScorer, ScoringPass};
pub use overlap::{overlap_score, overlapping_items, MatchKind, Overlap, OverlapMatch};
pub use recommender::{Recommendations, Recommender};
pub use scoring::{answer_activity_bonus, calculate_mentor_score};
