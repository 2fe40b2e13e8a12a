use async_trait::async_trait;
use std::time::Duration;
use crate::models::{AnswerRecord, AuthoredQuestion, StoredProfile};
use crate::services::store::{AcademicStore, StoreError};

/// Store decorator that remembers mentor registry answers
///
/// Successful registry lookups are kept in an in-memory cache. When a later
/// lookup fails, the remembered answer is returned instead of the error so a
/// flaky registry does not hide known mentors. All other reads pass through.
pub struct CachedRegistryStore<S> {
    inner: S,
    registry: moka::future::Cache<String, bool>,
}

impl<S: AcademicStore> CachedRegistryStore<S> {
    pub fn new(inner: S, capacity: u64, ttl_secs: u64) -> Self {
        let registry = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { inner, registry }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Remembered registry answer for a user, if any
    pub async fn cached(&self, user_id: &str) -> Option<bool> {
        self.registry.get(&CacheKey::mentor(user_id)).await
    }

    pub async fn invalidate(&self, user_id: &str) {
        self.registry.invalidate(&CacheKey::mentor(user_id)).await;
    }
}

#[async_trait]
impl<S: AcademicStore> AcademicStore for CachedRegistryStore<S> {
    async fn get_profile(&self, user_id: &str) -> Result<Option<StoredProfile>, StoreError> {
        self.inner.get_profile(user_id).await
    }

    async fn list_questions_by_author(
        &self,
        user_id: &str,
    ) -> Result<Vec<AuthoredQuestion>, StoreError> {
        self.inner.list_questions_by_author(user_id).await
    }

    async fn list_all_profiles(&self) -> Result<Vec<StoredProfile>, StoreError> {
        self.inner.list_all_profiles().await
    }

    async fn list_all_questions(&self) -> Result<Vec<AuthoredQuestion>, StoreError> {
        self.inner.list_all_questions().await
    }

    async fn list_all_answers_with_question_tags(&self) -> Result<Vec<AnswerRecord>, StoreError> {
        self.inner.list_all_answers_with_question_tags().await
    }

    async fn is_registered_mentor(&self, user_id: &str) -> Result<bool, StoreError> {
        let key = CacheKey::mentor(user_id);

        match self.inner.is_registered_mentor(user_id).await {
            Ok(is_mentor) => {
                self.registry.insert(key, is_mentor).await;
                Ok(is_mentor)
            }
            Err(e) => match self.registry.get(&key).await {
                Some(is_mentor) => {
                    tracing::debug!(
                        "Registry lookup for {} failed ({}), using cached answer",
                        user_id,
                        e
                    );
                    Ok(is_mentor)
                }
                None => Err(e),
            },
        }
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for a mentor registry entry
    pub fn mentor(user_id: &str) -> String {
        format!("mentor:{}", user_id)
    }
}
