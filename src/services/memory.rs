use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::RwLock;
use crate::models::{AnswerRecord, AuthoredQuestion, DataSource, StoredProfile};
use crate::services::store::{AcademicStore, StoreError};

/// In-memory academic store
///
/// Used for tests, benchmarks and local runs without a hosted backend. Any
/// data source can be switched to failing to exercise degraded-mode behavior.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    profiles: Vec<StoredProfile>,
    questions: Vec<AuthoredQuestion>,
    answers: Vec<AnswerRecord>,
    mentors: HashSet<String>,
    failing: RwLock<HashSet<DataSource>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: StoredProfile) -> Self {
        self.profiles.push(profile);
        self
    }

    /// Add a profile and register it as a mentor
    pub fn with_mentor(mut self, profile: StoredProfile) -> Self {
        self.mentors.insert(profile.id.clone());
        self.profiles.push(profile);
        self
    }

    pub fn with_question(mut self, question: AuthoredQuestion) -> Self {
        self.questions.push(question);
        self
    }

    pub fn with_answer(mut self, answer: AnswerRecord) -> Self {
        self.answers.push(answer);
        self
    }

    pub fn failing_on(mut self, source: DataSource) -> Self {
        self.failing.get_mut().insert(source);
        self
    }

    /// Toggle failure of a data source after construction
    pub async fn set_failing(&self, source: DataSource, failing: bool) {
        let mut guard = self.failing.write().await;
        if failing {
            guard.insert(source);
        } else {
            guard.remove(&source);
        }
    }

    async fn check(&self, source: DataSource) -> Result<(), StoreError> {
        if self.failing.read().await.contains(&source) {
            return Err(StoreError::Unavailable(format!("{} is unavailable", source)));
        }
        Ok(())
    }
}

#[async_trait]
impl AcademicStore for InMemoryStore {
    async fn get_profile(&self, user_id: &str) -> Result<Option<StoredProfile>, StoreError> {
        self.check(DataSource::Profile).await?;
        Ok(self.profiles.iter().find(|p| p.id == user_id).cloned())
    }

    async fn list_questions_by_author(
        &self,
        user_id: &str,
    ) -> Result<Vec<AuthoredQuestion>, StoreError> {
        self.check(DataSource::Questions).await?;
        Ok(self
            .questions
            .iter()
            .filter(|q| q.author_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_all_profiles(&self) -> Result<Vec<StoredProfile>, StoreError> {
        self.check(DataSource::Profiles).await?;
        Ok(self.profiles.clone())
    }

    async fn list_all_questions(&self) -> Result<Vec<AuthoredQuestion>, StoreError> {
        self.check(DataSource::Questions).await?;
        Ok(self.questions.clone())
    }

    async fn list_all_answers_with_question_tags(&self) -> Result<Vec<AnswerRecord>, StoreError> {
        self.check(DataSource::Answers).await?;
        Ok(self.answers.clone())
    }

    async fn is_registered_mentor(&self, user_id: &str) -> Result<bool, StoreError> {
        self.check(DataSource::MentorRegistry).await?;
        Ok(self.mentors.contains(user_id))
    }
}
