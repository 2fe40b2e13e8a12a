use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use crate::models::{AnswerRecord, AuthoredQuestion, StoredProfile};
use crate::services::store::{AcademicStore, StoreError};

/// Table names in the hosted Postgres database
#[derive(Debug, Clone)]
pub struct SupabaseTables {
    pub profiles: String,
    pub questions: String,
    pub answers: String,
    pub mentors: String,
}

impl Default for SupabaseTables {
    fn default() -> Self {
        Self {
            profiles: "profiles".to_string(),
            questions: "questions".to_string(),
            answers: "answers".to_string(),
            mentors: "mentor_registry".to_string(),
        }
    }
}

/// REST client for the hosted Postgres tables
///
/// Talks to the PostgREST endpoint of the platform backend:
/// - Profiles and the mentor registry
/// - Forum questions and answers, with the answered question's tags embedded
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    client: Client,
    tables: SupabaseTables,
}

#[derive(Debug, Deserialize)]
struct ProfileRow {
    id: Option<String>,
    name: Option<String>,
    full_name: Option<String>,
    institution: Option<String>,
    bio: Option<String>,
    skills: Option<Vec<String>>,
    specialization: Option<Vec<String>>,
}

impl ProfileRow {
    fn into_profile(self) -> Option<StoredProfile> {
        let id = self.id.filter(|id| !id.trim().is_empty())?;
        Some(StoredProfile {
            id,
            name: self
                .name
                .filter(|name| !name.trim().is_empty())
                .or(self.full_name)
                .unwrap_or_default(),
            institution: self.institution,
            bio: self.bio,
            skills: self.skills.unwrap_or_default(),
            specialization: self.specialization.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct QuestionRow {
    author_id: Option<String>,
    tags: Option<Vec<String>>,
    content: Option<String>,
}

impl QuestionRow {
    fn into_question(self) -> Option<AuthoredQuestion> {
        Some(AuthoredQuestion {
            author_id: self.author_id?,
            tags: self.tags.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct AnsweredQuestionRow {
    tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    author_id: Option<String>,
    question: Option<AnsweredQuestionRow>,
}

impl AnswerRow {
    fn into_answer(self) -> Option<AnswerRecord> {
        Some(AnswerRecord {
            author_id: self.author_id?,
            question_tags: self.question.and_then(|q| q.tags).unwrap_or_default(),
        })
    }
}

impl SupabaseClient {
    /// Create a new REST client
    pub fn new(
        base_url: String,
        api_key: String,
        tables: SupabaseTables,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
            tables,
        })
    }

    /// Fetch all rows of `table` matching a PostgREST query string
    ///
    /// Rows that do not deserialize are skipped.
    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &str,
    ) -> Result<Vec<T>, StoreError> {
        let url = format!(
            "{}/rest/v1/{}?{}",
            self.base_url.trim_end_matches('/'),
            table,
            query
        );

        tracing::debug!("Fetching rows from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(StoreError::Unauthorized);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Failed to query {}: {} - {}", table, status, body);
            return Err(StoreError::ApiError(format!(
                "Failed to query {}: {}",
                table, status
            )));
        }

        let body = response.text().await?;
        let json: Value = serde_json::from_str(&body)
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse {}: {}", table, e)))?;

        let rows = json
            .as_array()
            .ok_or_else(|| StoreError::InvalidResponse(format!("Expected row array from {}", table)))?;

        let parsed: Vec<T> = rows
            .iter()
            .filter_map(|row| match serde_json::from_value(row.clone()) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    tracing::debug!("Skipping malformed {} row: {}", table, e);
                    None
                }
            })
            .collect();

        tracing::debug!("Fetched {} of {} rows from {}", parsed.len(), rows.len(), table);

        Ok(parsed)
    }

    fn eq_filter(column: &str, value: &str) -> String {
        format!("{}=eq.{}", column, urlencoding::encode(value))
    }
}

#[async_trait]
impl AcademicStore for SupabaseClient {
    async fn get_profile(&self, user_id: &str) -> Result<Option<StoredProfile>, StoreError> {
        let query = format!("{}&select=*&limit=1", Self::eq_filter("id", user_id));
        let rows: Vec<ProfileRow> = self.fetch_rows(&self.tables.profiles, &query).await?;

        Ok(rows.into_iter().find_map(ProfileRow::into_profile))
    }

    async fn list_questions_by_author(
        &self,
        user_id: &str,
    ) -> Result<Vec<AuthoredQuestion>, StoreError> {
        let query = format!(
            "{}&select=author_id,tags,content",
            Self::eq_filter("author_id", user_id)
        );
        let rows: Vec<QuestionRow> = self.fetch_rows(&self.tables.questions, &query).await?;

        Ok(rows.into_iter().filter_map(QuestionRow::into_question).collect())
    }

    async fn list_all_profiles(&self) -> Result<Vec<StoredProfile>, StoreError> {
        let rows: Vec<ProfileRow> = self.fetch_rows(&self.tables.profiles, "select=*").await?;

        Ok(rows.into_iter().filter_map(ProfileRow::into_profile).collect())
    }

    async fn list_all_questions(&self) -> Result<Vec<AuthoredQuestion>, StoreError> {
        let rows: Vec<QuestionRow> = self
            .fetch_rows(&self.tables.questions, "select=author_id,tags")
            .await?;

        Ok(rows.into_iter().filter_map(QuestionRow::into_question).collect())
    }

    async fn list_all_answers_with_question_tags(&self) -> Result<Vec<AnswerRecord>, StoreError> {
        let query = format!("select=author_id,question:{}(tags)", self.tables.questions);
        let rows: Vec<AnswerRow> = self.fetch_rows(&self.tables.answers, &query).await?;

        Ok(rows.into_iter().filter_map(AnswerRow::into_answer).collect())
    }

    async fn is_registered_mentor(&self, user_id: &str) -> Result<bool, StoreError> {
        let query = format!("{}&select=user_id&limit=1", Self::eq_filter("user_id", user_id));
        let rows: Vec<IgnoredAny> = self.fetch_rows(&self.tables.mentors, &query).await?;

        Ok(!rows.is_empty())
    }
}
