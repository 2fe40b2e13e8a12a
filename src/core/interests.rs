use std::sync::Arc;
use crate::core::keywords::extract_keywords;
use crate::error::{validate_user_id, RecommendError};
use crate::models::{AuthoredQuestion, DataSource, Degraded, StoredProfile, UserInterestProfile};
use crate::services::{absorb, AcademicStore};

/// Keywords shorter than this are not kept as research topics
const MIN_RESEARCH_TOPIC_LEN: usize = 4;

/// Build an interest profile from a user's profile and their questions
///
/// - Bio keywords and question tags become academic interests
/// - Declared skills become skills to learn, verbatim
/// - Keywords found in question bodies become research topics
pub fn build_interest_profile(
    profile: Option<&StoredProfile>,
    questions: &[AuthoredQuestion],
) -> UserInterestProfile {
    let mut interests = UserInterestProfile::default();

    if let Some(profile) = profile {
        if let Some(bio) = profile.bio.as_deref() {
            interests.academic_interests.extend(extract_keywords(bio));
        }
        interests.skills_to_learn.extend(&profile.skills);
    }

    for question in questions {
        interests.academic_interests.extend(&question.tags);
        interests.research_topics.extend(
            extract_keywords(&question.content)
                .into_iter()
                .filter(|keyword| keyword.chars().count() >= MIN_RESEARCH_TOPIC_LEN),
        );
    }

    interests
}

/// Derives a user's interest profile from the academic store
#[derive(Clone)]
pub struct InterestExtractor {
    store: Arc<dyn AcademicStore>,
}

impl InterestExtractor {
    pub fn new(store: Arc<dyn AcademicStore>) -> Self {
        Self { store }
    }

    /// Extract the interest profile of `user_id`
    ///
    /// Only an unusable user id is an error. A failed profile or question
    /// fetch is logged and reported as a warning; the profile is then built
    /// from whatever was fetched.
    pub async fn extract(
        &self,
        user_id: &str,
    ) -> Result<Degraded<UserInterestProfile>, RecommendError> {
        let user_id = validate_user_id(user_id)?;
        let mut warnings = Vec::new();

        let (profile, questions) = tokio::join!(
            self.store.get_profile(user_id),
            self.store.list_questions_by_author(user_id),
        );

        let profile = absorb(DataSource::Profile, profile, &mut warnings);
        let questions = absorb(DataSource::Questions, questions, &mut warnings);

        if profile.is_none() {
            tracing::debug!("No profile found for {}, using questions only", user_id);
        }

        let interests = build_interest_profile(profile.as_ref(), &questions);

        tracing::debug!(
            "Extracted interests for {}: {} academic, {} research, {} skills ({} warnings)",
            user_id,
            interests.academic_interests.len(),
            interests.research_topics.len(),
            interests.skills_to_learn.len(),
            warnings.len()
        );

        Ok(Degraded::new(interests, warnings))
    }
}
