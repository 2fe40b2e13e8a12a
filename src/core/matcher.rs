use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use crate::core::scoring::calculate_mentor_score;
use crate::error::{validate_user_id, RecommendError};
use crate::models::{
    AnswerRecord, AuthoredQuestion, DataSource, Degraded, FetchWarning, MentorCandidate,
    RecommendationScore, ScoringWeights, StoredProfile, UserInterestProfile, MAX_MATCH_REASONS,
};
use crate::services::{absorb, AcademicStore};

/// Result of one scoring pass
#[derive(Debug, Default)]
pub struct ScoringPass {
    /// Mentors with a positive score, best first
    pub scores: Vec<RecommendationScore>,
    /// Profiles of every scored candidate, by id
    pub profiles: HashMap<String, StoredProfile>,
    pub total_candidates: usize,
}

/// Mentor scoring orchestrator
///
/// # Pipeline Stages
/// 1. Fetch profiles, questions and answers concurrently
/// 2. Keep registered mentors other than the requester
/// 3. Assemble a candidate snapshot per mentor
/// 4. Score and rank
#[derive(Clone)]
pub struct MentorScorer {
    store: Arc<dyn AcademicStore>,
    weights: ScoringWeights,
}

impl MentorScorer {
    pub fn new(store: Arc<dyn AcademicStore>, weights: ScoringWeights) -> Self {
        Self { store, weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank registered mentors for `user_id` given their interest profile
    pub async fn score_mentors(
        &self,
        user_id: &str,
        interests: &UserInterestProfile,
    ) -> Result<Degraded<Vec<RecommendationScore>>, RecommendError> {
        Ok(self.score_pass(user_id, interests).await?.map(|pass| pass.scores))
    }

    /// Rank registered mentors, keeping the profile snapshot used for scoring
    ///
    /// A failed fetch is treated as an empty collection and reported as a
    /// warning; the other fetches still complete.
    pub async fn score_pass(
        &self,
        user_id: &str,
        interests: &UserInterestProfile,
    ) -> Result<Degraded<ScoringPass>, RecommendError> {
        let user_id = validate_user_id(user_id)?;
        let mut warnings = Vec::new();

        let (profiles, questions, answers) = tokio::join!(
            self.store.list_all_profiles(),
            self.store.list_all_questions(),
            self.store.list_all_answers_with_question_tags(),
        );

        let profiles = absorb(DataSource::Profiles, profiles, &mut warnings);
        let questions = absorb(DataSource::Questions, questions, &mut warnings);
        let answers = absorb(DataSource::Answers, answers, &mut warnings);

        let requester_institution = profiles
            .iter()
            .find(|p| p.id == user_id)
            .and_then(StoredProfile::institution)
            .map(str::to_string);

        let mentor_ids = self
            .registered_mentors(user_id, &profiles, &mut warnings)
            .await;

        let candidates = assemble_candidates(user_id, &profiles, &questions, &answers, &mentor_ids);
        let total_candidates = candidates.len();

        let scores = rank_candidates(
            candidates,
            &interests.interest_union(),
            requester_institution.as_deref(),
            &self.weights,
        );

        tracing::info!(
            "Scored {} mentors for {}: {} with positive score ({} warnings)",
            total_candidates,
            user_id,
            scores.len(),
            warnings.len()
        );

        let profiles = profiles
            .into_iter()
            .filter(|p| mentor_ids.contains(&p.id))
            .map(|p| (p.id.clone(), p))
            .collect();

        Ok(Degraded::new(
            ScoringPass {
                scores,
                profiles,
                total_candidates,
            },
            warnings,
        ))
    }

    /// Ids of profiles listed in the mentor registry, requester excluded
    ///
    /// A failed lookup counts as "not a mentor". Failures are folded into a
    /// single warning.
    async fn registered_mentors(
        &self,
        requester_id: &str,
        profiles: &[StoredProfile],
        warnings: &mut Vec<FetchWarning>,
    ) -> HashSet<String> {
        let mut mentors = HashSet::new();
        let mut failures = 0usize;
        let mut last_error = None;

        for profile in profiles.iter().filter(|p| p.id != requester_id) {
            if mentors.contains(&profile.id) {
                continue;
            }
            match self.store.is_registered_mentor(&profile.id).await {
                Ok(true) => {
                    mentors.insert(profile.id.clone());
                }
                Ok(false) => {}
                Err(e) => {
                    tracing::debug!("Mentor registry lookup failed for {}: {}", profile.id, e);
                    failures += 1;
                    last_error = Some(e);
                }
            }
        }

        if let Some(e) = last_error {
            tracing::warn!(
                "{} mentor registry lookups failed, treating those profiles as non-mentors: {}",
                failures,
                e
            );
            warnings.push(FetchWarning {
                source: DataSource::MentorRegistry,
                message: format!("{} lookups failed: {}", failures, e),
            });
        }

        mentors
    }
}

/// Build a candidate snapshot for every registered mentor
///
/// Candidates keep the order of `profiles`; the requester and duplicate
/// profile ids are skipped. Tags are kept with their multiplicity: a tag on
/// three questions counts three times.
pub fn assemble_candidates(
    requester_id: &str,
    profiles: &[StoredProfile],
    questions: &[AuthoredQuestion],
    answers: &[AnswerRecord],
    mentor_ids: &HashSet<String>,
) -> Vec<MentorCandidate> {
    let mut authored: HashMap<&str, Vec<String>> = HashMap::new();
    for question in questions {
        authored
            .entry(question.author_id.as_str())
            .or_default()
            .extend(question.tags.iter().cloned());
    }

    let mut answered: HashMap<&str, (usize, Vec<String>)> = HashMap::new();
    for answer in answers {
        let entry = answered.entry(answer.author_id.as_str()).or_default();
        entry.0 += 1;
        entry.1.extend(answer.question_tags.iter().cloned());
    }

    let mut seen = HashSet::new();
    profiles
        .iter()
        .filter(|p| p.id != requester_id && mentor_ids.contains(&p.id))
        .filter(|p| seen.insert(p.id.as_str()))
        .map(|profile| {
            let authored_tags = authored
                .get(profile.id.as_str())
                .cloned()
                .unwrap_or_default();
            let (answer_count, answered_tags) = answered
                .get(profile.id.as_str())
                .map(|(count, tags)| (*count, tags.clone()))
                .unwrap_or_default();

            MentorCandidate {
                mentor_id: profile.id.clone(),
                specialization: profile.specialization.clone(),
                institution: profile.institution().map(str::to_string),
                authored_tags,
                answer_count,
                answered_tags,
            }
        })
        .collect()
}

/// Score candidates and rank them best first
///
/// Only candidates with a positive score are returned, each with at most
/// `weights.max_reasons` reasons (and never more than three). Equal scores
/// keep candidate order.
pub fn rank_candidates<I: AsRef<str>>(
    candidates: Vec<MentorCandidate>,
    interests: &[I],
    requester_institution: Option<&str>,
    weights: &ScoringWeights,
) -> Vec<RecommendationScore> {
    let max_reasons = weights.max_reasons.min(MAX_MATCH_REASONS);
    let mut scores: Vec<RecommendationScore> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let (score, mut reasons) =
                calculate_mentor_score(&candidate, interests, requester_institution, weights);

            if score > 0.0 {
                reasons.truncate(max_reasons);
                Some(RecommendationScore {
                    mentor_id: candidate.mentor_id,
                    score,
                    match_reasons: reasons,
                })
            } else {
                None
            }
        })
        .collect();

    // Stable sort keeps fetch order among equal scores
    scores.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scores
}
