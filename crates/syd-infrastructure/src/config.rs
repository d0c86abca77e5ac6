//! Application configuration.
//!
//! Loaded from `config.toml` under the platform config directory, with an
//! environment override for the Gemini API key. A missing file or missing
//! key is not an error: the assistant degrades to localized "not
//! configured" messages instead.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use syd_core::error::{Result, SydError};

const CONFIG_DIR_NAME: &str = "syd-demo";
const CONFIG_FILE_NAME: &str = "config.toml";
const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default Gemini model, overridable via `[gemini].model`.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Gemini API access configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

/// Document-store location configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Base directory for notes/tasks documents. Platform data dir if unset.
    pub data_dir: Option<PathBuf>,
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

impl Config {
    /// Loads configuration from the platform config directory.
    ///
    /// A missing file yields the default configuration. The
    /// `GEMINI_API_KEY` environment variable, when set, overrides (or
    /// supplies) the API key.
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Config::default(),
        };
        config.apply_env_override();
        Ok(config)
    }

    /// Parses a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&text).map_err(|err| SydError::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        })?;
        Ok(config)
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    fn apply_env_override(&mut self) {
        if let Ok(api_key) = std::env::var(API_KEY_ENV) {
            if api_key.trim().is_empty() {
                return;
            }
            match &mut self.gemini {
                Some(gemini) => gemini.api_key = api_key,
                None => {
                    self.gemini = Some(GeminiConfig {
                        api_key,
                        model: default_model(),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [storage]
            data_dir = "/tmp/syd-data"

            [gemini]
            api_key = "key-123"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.storage.data_dir,
            Some(PathBuf::from("/tmp/syd-data"))
        );
        let gemini = config.gemini.unwrap();
        assert_eq!(gemini.api_key, "key-123");
        assert_eq!(gemini.model, DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.gemini.is_none());
        assert!(config.storage.data_dir.is_none());
    }
}
