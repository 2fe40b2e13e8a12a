use async_trait::async_trait;
use thiserror::Error;
use crate::models::{AnswerRecord, AuthoredQuestion, DataSource, FetchWarning, StoredProfile};

/// Errors that can occur when reading from the academic store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the profiles, questions, answers and mentor registry
///
/// Implementations apply defaults for missing fields before returning records;
/// callers never see partially-typed rows.
#[async_trait]
pub trait AcademicStore: Send + Sync {
    /// Fetch a single profile, `Ok(None)` when it does not exist
    async fn get_profile(&self, user_id: &str) -> Result<Option<StoredProfile>, StoreError>;

    async fn list_questions_by_author(
        &self,
        user_id: &str,
    ) -> Result<Vec<AuthoredQuestion>, StoreError>;

    async fn list_all_profiles(&self) -> Result<Vec<StoredProfile>, StoreError>;

    async fn list_all_questions(&self) -> Result<Vec<AuthoredQuestion>, StoreError>;

    async fn list_all_answers_with_question_tags(&self) -> Result<Vec<AnswerRecord>, StoreError>;

    async fn is_registered_mentor(&self, user_id: &str) -> Result<bool, StoreError>;
}

/// Unwrap a fetch result, replacing a failure with the empty value
///
/// The failure is logged and recorded in `warnings` so the caller can report
/// that the result was computed from partial data.
pub fn absorb<T: Default>(
    source: DataSource,
    result: Result<T, StoreError>,
    warnings: &mut Vec<FetchWarning>,
) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to fetch {}, continuing without it: {}", source, e);
            warnings.push(FetchWarning {
                source,
                message: e.to_string(),
            });
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absorb_success_keeps_value() {
        let mut warnings = Vec::new();
        let value = absorb(DataSource::Answers, Ok(vec![1, 2, 3]), &mut warnings);
        assert_eq!(value, vec![1, 2, 3]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_absorb_failure_records_warning() {
        let mut warnings = Vec::new();
        let value: Vec<u8> = absorb(
            DataSource::Questions,
            Err(StoreError::Unavailable("timeout".into())),
            &mut warnings,
        );
        assert!(value.is_empty());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].source, DataSource::Questions);
        assert_eq!(warnings[0].message, "Store unavailable: timeout");
    }
}
