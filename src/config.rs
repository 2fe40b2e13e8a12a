use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::{ScoringWeights, MAX_MATCH_REASONS};
use crate::services::SupabaseTables;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub store: StoreSettings,
    #[serde(default)]
    pub tables: TableSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    pub url: String,
    pub api_key: String,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableSettings {
    #[serde(default = "default_profiles_table")]
    pub profiles: String,
    #[serde(default = "default_questions_table")]
    pub questions: String,
    #[serde(default = "default_answers_table")]
    pub answers: String,
    #[serde(default = "default_mentors_table")]
    pub mentors: String,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            profiles: default_profiles_table(),
            questions: default_questions_table(),
            answers: default_answers_table(),
            mentors: default_mentors_table(),
        }
    }
}

fn default_profiles_table() -> String { "profiles".to_string() }
fn default_questions_table() -> String { "questions".to_string() }
fn default_answers_table() -> String { "answers".to_string() }
fn default_mentors_table() -> String { "mentor_registry".to_string() }

impl From<TableSettings> for SupabaseTables {
    fn from(tables: TableSettings) -> Self {
        Self {
            profiles: tables.profiles,
            questions: tables.questions,
            answers: tables.answers,
            mentors: tables.mentors,
        }
    }
}

/// Mentor registry fallback cache
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheSettings {
    pub registry_size: Option<u64>,
    pub registry_ttl_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<u16>,
    pub max_limit: Option<u16>,
}

impl MatchingSettings {
    /// Resolve a requested limit against the configured default and maximum
    pub fn resolve_limit(&self, requested: Option<u16>) -> usize {
        let max = self.max_limit.unwrap_or(100);
        let limit = requested.unwrap_or_else(|| self.default_limit.unwrap_or(20));
        limit.min(max) as usize
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub activity: ActivityConfig,
    #[serde(default = "default_max_reasons")]
    pub max_reasons: usize,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            activity: ActivityConfig::default(),
            max_reasons: default_max_reasons(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_specialization_weight")]
    pub specialization: f64,
    #[serde(default = "default_institution_weight")]
    pub institution: f64,
    #[serde(default = "default_question_tags_weight")]
    pub question_tags: f64,
    #[serde(default = "default_answer_activity_weight")]
    pub answer_activity: f64,
    #[serde(default = "default_answered_tags_weight")]
    pub answered_tags: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            specialization: default_specialization_weight(),
            institution: default_institution_weight(),
            question_tags: default_question_tags_weight(),
            answer_activity: default_answer_activity_weight(),
            answered_tags: default_answered_tags_weight(),
        }
    }
}

fn default_specialization_weight() -> f64 { 3.0 }
fn default_institution_weight() -> f64 { 2.0 }
fn default_question_tags_weight() -> f64 { 2.0 }
fn default_answer_activity_weight() -> f64 { 1.0 }
fn default_answered_tags_weight() -> f64 { 1.5 }

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityConfig {
    #[serde(default = "default_activity_divisor")]
    pub divisor: f64,
    #[serde(default = "default_activity_cap")]
    pub cap: f64,
    #[serde(default = "default_activity_reason_threshold")]
    pub reason_threshold: usize,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            divisor: default_activity_divisor(),
            cap: default_activity_cap(),
            reason_threshold: default_activity_reason_threshold(),
        }
    }
}

fn default_activity_divisor() -> f64 { 5.0 }
fn default_activity_cap() -> f64 { 2.0 }
fn default_activity_reason_threshold() -> usize { 5 }
fn default_max_reasons() -> usize { MAX_MATCH_REASONS }

impl From<&ScoringSettings> for ScoringWeights {
    fn from(scoring: &ScoringSettings) -> Self {
        Self {
            specialization: scoring.weights.specialization,
            institution: scoring.weights.institution,
            question_tags: scoring.weights.question_tags,
            answer_activity: scoring.weights.answer_activity,
            answered_tags: scoring.weights.answered_tags,
            activity_divisor: scoring.activity.divisor,
            activity_cap: scoring.activity.cap,
            activity_reason_threshold: scoring.activity.reason_threshold,
            max_reasons: scoring.max_reasons.min(MAX_MATCH_REASONS),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with THINKBRIDGE_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local overrides for development
            .add_source(File::with_name("config/local").required(false))
            // e.g., THINKBRIDGE__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("THINKBRIDGE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("THINKBRIDGE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring)
    }
}

/// Apply the platform's conventional SUPABASE_URL / SUPABASE_KEY variables
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let store_url = env::var("SUPABASE_URL").ok();
    let store_key = env::var("SUPABASE_KEY").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = store_url {
        builder = builder.set_override("store.url", url)?;
    }
    if let Some(key) = store_key {
        builder = builder.set_override("store.api_key", key)?;
    }

    builder.build()
}
