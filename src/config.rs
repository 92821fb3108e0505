use crate::client::gemini::{DEFAULT_TIMEOUT_SECS, GEMINI_API_BASE, GeminiSettings};
use crate::client::{get_google_api_key, resolve_credential};
use crate::core::data::ModelConfig;
use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub color: bool,
    pub interactive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    #[serde(
        serialize_with = "crate::utils::format::serialize_option_string",
        deserialize_with = "crate::utils::format::deserialize_option_string"
    )]
    pub api_key: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            color: true,
            interactive: false,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: GEMINI_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key: None,
        }
    }
}

impl Config {
    /// Load from `config_path`; a missing file means defaults (`config init` writes one)
    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.model.model.trim().is_empty() {
            return Err(AppError::Config("Model name cannot be empty".to_string()));
        }

        if !(0.0..=2.0).contains(&self.model.temperature) {
            return Err(AppError::Config(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.model.temperature
            )));
        }

        if self.api.base_url.trim().is_empty() {
            return Err(AppError::Config("API base URL cannot be empty".to_string()));
        }

        if self.api.timeout_secs == 0 {
            return Err(AppError::Config(
                "API timeout must be at least one second".to_string(),
            ));
        }

        Ok(())
    }

    /// Command-line overrides for the model settings
    pub fn apply_overrides(&mut self, model: Option<String>, temperature: Option<f64>) -> AppResult<()> {
        if let Some(model) = model {
            self.model.model = model;
        }
        if let Some(temperature) = temperature {
            self.model.temperature = temperature;
        }
        self.validate()
    }

    /// Credential from the config file, falling back to `GOOGLE_API_KEY`
    pub fn credential(&self) -> Option<String> {
        resolve_credential(self.api.api_key.clone(), get_google_api_key())
    }

    pub fn gemini_settings(&self) -> GeminiSettings {
        GeminiSettings {
            base_url: self.api.base_url.clone(),
            timeout: Duration::from_secs(self.api.timeout_secs),
            model: self.model.clone(),
        }
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("artisan-ai")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.model.model, "gemini-1.5-flash");
        assert_eq!(config.api.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.api.timeout_secs, 60);
        assert!(config.api.api_key.is_none());
        assert!(config.general.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_custom_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_custom(&path).unwrap();

        assert!(!path.exists());
        assert_eq!(config.model.model, "gemini-1.5-flash");
    }

    #[test]
    fn test_save_to_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.api.timeout_secs = 15;
        config.save_to(&path).unwrap();

        let reloaded = Config::load_custom(&path).unwrap();
        assert_eq!(reloaded.api.timeout_secs, 15);
        assert!(reloaded.api.api_key.is_none());
    }

    #[test]
    fn test_load_custom_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[model]\nname = \"gemini-2.0-flash\"\n\n[api]\napi_key = \"secret\"\n",
        )
        .unwrap();

        let config = Config::load_custom(&path).unwrap();

        assert_eq!(config.model.model, "gemini-2.0-flash");
        assert!((config.model.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.api.api_key.as_deref(), Some("secret"));
        assert_eq!(config.api.timeout_secs, 60);
        assert!(!config.general.interactive);
    }

    #[test]
    fn test_empty_api_key_is_unset() {
        let config: Config = toml::from_str("[api]\napi_key = \"\"\n").unwrap();
        assert!(config.api.api_key.is_none());
    }

    #[test]
    fn test_load_custom_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[model\nname = ").unwrap();

        let err = Config::load_custom(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_out_of_range_temperature() {
        let mut config = Config::default();
        let err = config.apply_overrides(None, Some(2.5)).unwrap_err();
        assert!(err.to_string().contains("Temperature"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout_and_empty_model() {
        let mut config = Config::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.model.model = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides_flow_into_gemini_settings() {
        let mut config = Config::default();
        config
            .apply_overrides(Some("gemini-1.5-pro".to_string()), Some(0.2))
            .unwrap();

        let settings = config.gemini_settings();
        assert_eq!(settings.model.model, "gemini-1.5-pro");
        assert!((settings.model.temperature - 0.2).abs() < f64::EPSILON);
        assert_eq!(settings.timeout, Duration::from_secs(60));
    }
}
