//! Configuration management for the ATS matcher

use crate::error::{Result, AtsMatcherError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub provider: ProviderConfig,
    pub storage: StorageConfig,
    pub retry: RetryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the OpenAI-compatible completion endpoint.
    pub api_base: String,
    pub model: String,
    /// Sampling temperature, valid range [0, 2].
    pub temperature: f32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one stored resume text file per user.
    pub resumes_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub backoff_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        let resumes_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ats-matcher")
            .join("resumes");

        Self {
            provider: ProviderConfig {
                api_base: "https://api.openai.com/v1".to_string(),
                model: "gpt-3.5-turbo".to_string(),
                temperature: 0.4,
                timeout_secs: 120,
            },
            storage: StorageConfig { resumes_dir },
            retry: RetryConfig {
                max_retries: 3,
                backoff_ms: 1000,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| AtsMatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AtsMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.provider.temperature) {
            return Err(AtsMatcherError::Configuration(format!(
                "Temperature {} outside valid range [0, 2]",
                self.provider.temperature
            )));
        }
        if self.provider.model.trim().is_empty() {
            return Err(AtsMatcherError::Configuration("Model identifier is empty".to_string()));
        }
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-matcher")
            .join("config.toml")
    }

    pub fn resumes_dir(&self) -> &PathBuf {
        &self.storage.resumes_dir
    }
}
