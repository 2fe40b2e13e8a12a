use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Profile record as stored in the profiles table
///
/// Every field beyond the id is optional at the store boundary; missing lists
/// arrive here as empty vectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub specialization: Vec<String>,
}

impl StoredProfile {
    /// Institution name, `None` when absent or blank
    pub fn institution(&self) -> Option<&str> {
        self.institution
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// A forum question together with its author
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoredQuestion {
    pub author_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub content: String,
}

/// An answer, carrying the tags of the question it answers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub author_id: String,
    #[serde(default)]
    pub question_tags: Vec<String>,
}

/// Ordered string set with case-insensitive membership
///
/// The first-seen casing of an entry is kept. Blank entries are dropped and
/// surrounding whitespace is trimmed on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct InterestSet {
    items: Vec<String>,
    keys: HashSet<String>,
}

impl InterestSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning `false` if an equal entry (ignoring case) exists
    pub fn insert(&mut self, value: impl AsRef<str>) -> bool {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return false;
        }
        if !self.keys.insert(trimmed.to_lowercase()) {
            return false;
        }
        self.items.push(trimmed.to_string());
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.keys.contains(&value.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

impl<S: AsRef<str>> Extend<S> for InterestSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for InterestSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl From<Vec<String>> for InterestSet {
    fn from(values: Vec<String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<InterestSet> for Vec<String> {
    fn from(set: InterestSet) -> Self {
        set.items
    }
}

/// Interests declared by or inferred for a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInterestProfile {
    #[serde(default)]
    pub academic_interests: InterestSet,
    #[serde(default)]
    pub research_topics: InterestSet,
    #[serde(default)]
    pub career_goals: InterestSet,
    #[serde(default)]
    pub skills_to_learn: InterestSet,
}

impl UserInterestProfile {
    /// The interests matched against mentors: academic interests, research
    /// topics and skills to learn, deduplicated. Career goals are not part of it.
    pub fn interest_union(&self) -> Vec<String> {
        let union: InterestSet = self
            .academic_interests
            .iter()
            .chain(self.research_topics.iter())
            .chain(self.skills_to_learn.iter())
            .collect();
        union.into()
    }

    /// Fold user-supplied preferences into the profile
    pub fn merge_manual(&mut self, manual: &ManualPreferences) {
        self.academic_interests.extend(&manual.academic_interests);
        self.research_topics.extend(&manual.research_topics);
        self.career_goals.extend(&manual.career_goals);
        self.skills_to_learn.extend(&manual.skills_to_learn);
    }

    pub fn is_empty(&self) -> bool {
        self.academic_interests.is_empty()
            && self.research_topics.is_empty()
            && self.career_goals.is_empty()
            && self.skills_to_learn.is_empty()
    }
}

/// Preferences typed in by the user before requesting recommendations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualPreferences {
    #[serde(default)]
    pub academic_interests: Vec<String>,
    #[serde(default)]
    pub research_topics: Vec<String>,
    #[serde(default)]
    pub career_goals: Vec<String>,
    #[serde(default)]
    pub skills_to_learn: Vec<String>,
}

/// Read-only snapshot of a registered mentor for one scoring pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MentorCandidate {
    pub mentor_id: String,
    pub specialization: Vec<String>,
    pub institution: Option<String>,
    /// Tags across every question the mentor authored
    pub authored_tags: Vec<String>,
    /// Number of answers the mentor authored
    pub answer_count: usize,
    /// Tags of the questions the mentor answered
    pub answered_tags: Vec<String>,
}

/// Scored mentor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationScore {
    pub mentor_id: String,
    pub score: f64,
    pub match_reasons: Vec<String>,
}

/// Recommendation resolved against the mentor's profile, ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorRecommendation {
    pub mentor_id: String,
    pub name: String,
    pub institution: Option<String>,
    pub specialization: Vec<String>,
    pub score: f64,
    pub match_reasons: Vec<String>,
}

impl MentorRecommendation {
    pub fn resolve(score: RecommendationScore, profile: Option<&StoredProfile>) -> Self {
        let (name, institution, specialization) = match profile {
            Some(p) => (
                p.name.clone(),
                p.institution().map(str::to_string),
                p.specialization.clone(),
            ),
            None => (String::new(), None, Vec::new()),
        };

        Self {
            mentor_id: score.mentor_id,
            name,
            institution,
            specialization,
            score: score.score,
            match_reasons: score.match_reasons,
        }
    }
}

/// Upper bound on the reasons attached to a recommendation
pub const MAX_MATCH_REASONS: usize = 3;

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub specialization: f64,
    pub institution: f64,
    pub question_tags: f64,
    pub answer_activity: f64,
    pub answered_tags: f64,
    /// Answers per point of activity bonus
    pub activity_divisor: f64,
    /// Upper bound of the activity bonus before weighting
    pub activity_cap: f64,
    /// Answer count from which the activity reason is shown
    pub activity_reason_threshold: usize,
    /// Reasons kept per recommendation, never more than [`MAX_MATCH_REASONS`]
    pub max_reasons: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            specialization: 3.0,
            institution: 2.0,
            question_tags: 2.0,
            answer_activity: 1.0,
            answered_tags: 1.5,
            activity_divisor: 5.0,
            activity_cap: 2.0,
            activity_reason_threshold: 5,
            max_reasons: MAX_MATCH_REASONS,
        }
    }
}

/// Remote collection a fetch reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Profile,
    Questions,
    Profiles,
    Answers,
    MentorRegistry,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataSource::Profile => "profile",
            DataSource::Questions => "questions",
            DataSource::Profiles => "profiles",
            DataSource::Answers => "answers",
            DataSource::MentorRegistry => "mentor_registry",
        };
        f.write_str(name)
    }
}

/// A fetch that failed and was replaced by an empty collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchWarning {
    pub source: DataSource,
    pub message: String,
}

/// A value computed from partial data, with the failures that degraded it
#[derive(Debug, Clone, PartialEq)]
pub struct Degraded<T> {
    pub value: T,
    pub warnings: Vec<FetchWarning>,
}

impl<T> Degraded<T> {
    pub fn new(value: T, warnings: Vec<FetchWarning>) -> Self {
        Self { value, warnings }
    }

    pub fn complete(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Degraded<U> {
        Degraded {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}
