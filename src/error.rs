use thiserror::Error;

/// Longest user id accepted before any fetch is attempted
const MAX_USER_ID_LEN: usize = 255;

/// Failures that stop a matching operation before any fetch is issued
///
/// Partial data problems never surface here; they are reported as
/// [`FetchWarning`](crate::models::FetchWarning)s alongside the result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendError {
    #[error("Invalid user id: {0}")]
    InvalidUserId(String),
}

/// Check that a caller-provided user id can be used for store lookups
pub fn validate_user_id(user_id: &str) -> Result<&str, RecommendError> {
    let trimmed = user_id.trim();

    if trimmed.is_empty() {
        return Err(RecommendError::InvalidUserId("user id is empty".into()));
    }
    if trimmed.len() > MAX_USER_ID_LEN {
        return Err(RecommendError::InvalidUserId(format!(
            "user id exceeds {} characters",
            MAX_USER_ID_LEN
        )));
    }
    if trimmed.chars().any(char::is_control) {
        return Err(RecommendError::InvalidUserId(
            "user id contains control characters".into(),
        ));
    }

    Ok(trimmed)
}
