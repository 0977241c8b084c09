use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

/// Model used when `GENAI_TEXT_MODEL` is not set.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

/// Gemini API base URL.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub common: core_config::Config,
    pub models: ModelConfig,
    pub google: GoogleConfig,
    pub storage: StorageConfig,
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model for text generation (e.g., gemini-2.5-flash)
    pub text_model: String,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub api_key: String,
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// JSON file holding the interaction history.
    pub history_file: PathBuf,
    /// Directory `index.html` is served from.
    pub static_dir: PathBuf,
}

impl AgentConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        Self::from_lookup(common_config, |key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    ///
    /// Fails when the Google credential is missing or empty, so a
    /// misconfigured process never reaches the point of binding a socket.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_env = |key: &str, default: Option<&str>| -> Result<String, AppError> {
            match lookup(key).filter(|v| !v.trim().is_empty()) {
                Some(val) => Ok(val),
                None => default.map(str::to_string).ok_or_else(|| {
                    AppError::ConfigError(anyhow::anyhow!("{} is required but not set", key))
                }),
            }
        };

        Ok(AgentConfig {
            common,
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", Some(DEFAULT_TEXT_MODEL))?,
            },
            google: GoogleConfig {
                api_key: get_env("GOOGLE_API_KEY", None)?,
                api_base: get_env("GENAI_API_BASE", Some(DEFAULT_GEMINI_API_BASE))?,
            },
            storage: StorageConfig {
                history_file: get_env("HISTORY_FILE", Some("agent_history.json"))?.into(),
                static_dir: get_env("STATIC_DIR", Some("agent-service/static"))?.into(),
            },
            log_level: get_env("LOG_LEVEL", Some("info"))?,
        })
    }

    /// Path of the page served at `/`.
    pub fn index_file(&self) -> PathBuf {
        self.storage.static_dir.join("index.html")
    }
}
