use std::sync::Arc;
use crate::core::interests::InterestExtractor;
use crate::core::matcher::MentorScorer;
use crate::error::RecommendError;
use crate::models::{
    Degraded, ManualPreferences, MentorRecommendation, ScoringWeights, UserInterestProfile,
};
use crate::services::AcademicStore;

/// Outcome of a full recommendation request
#[derive(Debug, Clone, Default)]
pub struct Recommendations {
    /// The interest profile the mentors were scored against
    pub profile: UserInterestProfile,
    pub recommendations: Vec<MentorRecommendation>,
    /// Registered mentors considered, before score filtering and the limit
    pub total_candidates: usize,
}

/// Extraction, scoring and card resolution in one call
#[derive(Clone)]
pub struct Recommender {
    extractor: InterestExtractor,
    scorer: MentorScorer,
}

impl Recommender {
    pub fn new(store: Arc<dyn AcademicStore>, weights: ScoringWeights) -> Self {
        Self {
            extractor: InterestExtractor::new(store.clone()),
            scorer: MentorScorer::new(store, weights),
        }
    }

    pub fn extractor(&self) -> &InterestExtractor {
        &self.extractor
    }

    pub fn scorer(&self) -> &MentorScorer {
        &self.scorer
    }

    /// Recommend mentors for `user_id`
    ///
    /// The extracted interest profile is augmented with `manual` preferences
    /// before scoring. At most `limit` recommendations are returned when a
    /// limit is given. Warnings from extraction and scoring are combined.
    pub async fn recommend(
        &self,
        user_id: &str,
        manual: Option<&ManualPreferences>,
        limit: Option<usize>,
    ) -> Result<Degraded<Recommendations>, RecommendError> {
        let extracted = self.extractor.extract(user_id).await?;
        let mut warnings = extracted.warnings;
        let mut profile = extracted.value;

        if let Some(manual) = manual {
            profile.merge_manual(manual);
        }

        let pass = self.scorer.score_pass(user_id, &profile).await?;
        warnings.extend(pass.warnings);
        let pass = pass.value;

        let limit = limit.unwrap_or(usize::MAX);
        let recommendations: Vec<MentorRecommendation> = pass
            .scores
            .into_iter()
            .take(limit)
            .map(|score| {
                let mentor = pass.profiles.get(&score.mentor_id);
                MentorRecommendation::resolve(score, mentor)
            })
            .collect();

        Ok(Degraded::new(
            Recommendations {
                profile,
                recommendations,
                total_candidates: pass.total_candidates,
            },
            warnings,
        ))
    }
}
