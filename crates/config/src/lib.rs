//! Configuration loading and validation for Frontdesk.
//!
//! Loads configuration from a TOML file with environment variable overrides
//! for secrets. All settings are validated at load time; everything is read
//! once at startup and never re-read.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Business display name, injected into the system instruction
    #[serde(default = "default_business_name")]
    pub business_name: String,

    /// Model identifier sent to the language-model provider
    #[serde(default = "default_model")]
    pub model: String,

    /// API credential for the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Generation temperature. Low by default: a receptionist should answer
    /// literally, not creatively.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Session store settings
    #[serde(default)]
    pub session: SessionConfig,
}

fn default_business_name() -> String {
    "our business".into()
}
fn default_model() -> String {
    "llama-3.1-70b-versatile".into()
}
fn default_api_url() -> String {
    "https://api.groq.com/openai/v1".into()
}
fn default_temperature() -> f32 {
    0.2
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("business_name", &self.business_name)
            .field("model", &self.model)
            .field("api_key", &redact(&self.api_key))
            .field("api_url", &self.api_url)
            .field("temperature", &self.temperature)
            .field("session", &self.session)
            .finish()
    }
}

/// Session store eviction settings. Zero means "no limit" for both knobs,
/// which preserves the accumulate-forever behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum number of tracked sessions; least-recently-used sessions are
    /// reclaimed beyond this. 0 = unbounded.
    #[serde(default)]
    pub max_sessions: usize,

    /// Seconds of inactivity after which a session may be reclaimed.
    /// 0 = never.
    #[serde(default)]
    pub idle_ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: 0,
            idle_ttl_secs: 0,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.frontdesk/config.toml).
    ///
    /// Environment variable overrides (highest priority):
    /// - `FRONTDESK_API_KEY`, then `GROQ_API_KEY` for the credential
    /// - `FRONTDESK_MODEL` for the model identifier
    /// - `FRONTDESK_BUSINESS_NAME` for the display name
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if config.api_key.is_none() {
            config.api_key = std::env::var("FRONTDESK_API_KEY")
                .ok()
                .or_else(|| std::env::var("GROQ_API_KEY").ok());
        }

        if let Ok(model) = std::env::var("FRONTDESK_MODEL") {
            config.model = model;
        }

        if let Ok(name) = std::env::var("FRONTDESK_BUSINESS_NAME") {
            config.business_name = name;
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".frontdesk")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.temperature < 0.0 || self.temperature > 2.0 {
            return Err(ConfigError::ValidationError(
                "temperature must be between 0.0 and 2.0".into(),
            ));
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "model must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Check if an API key is available (from config or environment).
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            business_name: default_business_name(),
            model: default_model(),
            api_key: None,
            api_url: default_api_url(),
            temperature: default_temperature(),
            session: SessionConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
