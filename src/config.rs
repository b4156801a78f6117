use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::models::domain::{
    FallbackLimits, MatchThresholds, DEFAULT_ACCEPT_THRESHOLD, DEFAULT_CONTAINMENT_SCORE,
    DEFAULT_MAX_EXAMPLES, DEFAULT_MAX_TOKENS,
};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub fallback: FallbackSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Generative backend (OpenAI-compatible chat completions)
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Bearer token; only required once a fallback request is made
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String { "https://router.huggingface.co/v1".to_string() }
fn default_model() -> String { "openai/gpt-oss-120b:cerebras".to_string() }
fn default_timeout_secs() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_containment_score")]
    pub containment_score: f64,
    #[serde(default = "default_accept_threshold")]
    pub accept_threshold: f64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            containment_score: default_containment_score(),
            accept_threshold: default_accept_threshold(),
        }
    }
}

impl From<&MatchingSettings> for MatchThresholds {
    fn from(settings: &MatchingSettings) -> Self {
        Self {
            containment_score: settings.containment_score,
            accept_threshold: settings.accept_threshold,
        }
    }
}

fn default_containment_score() -> f64 { DEFAULT_CONTAINMENT_SCORE }
fn default_accept_threshold() -> f64 { DEFAULT_ACCEPT_THRESHOLD }

#[derive(Debug, Clone, Deserialize)]
pub struct FallbackSettings {
    #[serde(default = "default_max_examples")]
    pub max_examples: usize,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for FallbackSettings {
    fn default() -> Self {
        Self {
            max_examples: default_max_examples(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl From<&FallbackSettings> for FallbackLimits {
    fn from(settings: &FallbackSettings) -> Self {
        Self {
            max_examples: settings.max_examples,
            max_tokens: settings.max_tokens,
        }
    }
}

fn default_max_examples() -> usize { DEFAULT_MAX_EXAMPLES }
fn default_max_tokens() -> u32 { DEFAULT_MAX_TOKENS }

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

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl LoggingSettings {
    /// Unknown values fall back to JSON
    pub fn log_format(&self) -> LogFormat {
        match self.format.trim().to_ascii_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            "compact" | "text" => LogFormat::Compact,
            _ => LogFormat::Json,
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
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ASSIST_)
    /// 5. HF_TOKEN for the backend API key
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ASSIST__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("ASSIST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_token_override(settings, std::env::var("HF_TOKEN").ok())?;

        settings.try_deserialize()
    }
}

/// Let the conventional `HF_TOKEN` variable supply `backend.api_key`
fn apply_token_override(settings: Config, token: Option<String>) -> Result<Config, ConfigError> {
    match token.filter(|t| !t.trim().is_empty()) {
        Some(token) => Config::builder()
            .add_source(settings)
            .set_override("backend.api_key", token)?
            .build(),
        None => Ok(settings),
    }
}
