//! ArtisanConnect AI - prompt-driven marketplace assistant for artisans
//!
//! This library renders a fixed catalog of prompt templates from product and
//! buyer details and sends them to a hosted text-generation model.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod core;
pub mod utils;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

// Re-export core types and traits for easier use
pub use crate::core::{
    catalog::Operation,
    data::{BuyerInquiry, BuyerInterest, Fields, ModelConfig, ProductDetails},
    operations::{ArtisanOperations, ProductOptimization},
    traits::CompletionClient,
};
pub use client::{GeminiClient, GeminiSettings};
pub use utils::error::{AppError, AppResult};

/// Main library interface for external usage
pub struct ArtisanConnect {
    operations: ArtisanOperations,
}

impl ArtisanConnect {
    /// Wrap an already constructed completion client
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            operations: ArtisanOperations::new(client),
        }
    }

    /// Initialize the Gemini client from configuration
    ///
    /// Fails with [`AppError::MissingCredential`] when neither the config file
    /// nor `GOOGLE_API_KEY` provides a key.
    pub fn from_config(config: &config::Config) -> AppResult<Self> {
        Self::with_env_credential(config, client::get_google_api_key())
    }

    /// Like [`ArtisanConnect::from_config`] with an explicit environment value
    pub fn with_env_credential(config: &config::Config, env_key: Option<String>) -> AppResult<Self> {
        let credential = client::resolve_credential(config.api.api_key.clone(), env_key);
        let client = GeminiClient::initialize(credential, config.gemini_settings())?;
        tracing::debug!(?client, "completion client initialized");
        Ok(Self::new(Arc::new(client)))
    }

    /// Get the underlying operations for direct access
    pub fn operations(&self) -> &ArtisanOperations {
        &self.operations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::EchoClient;

    #[tokio::test]
    async fn test_facade_passes_rendered_prompt_through() {
        let agent = ArtisanConnect::new(Arc::new(EchoClient::default()));
        let fields = Fields::new()
            .with("product_name", "Clay Bowl")
            .with("description", "hand-thrown")
            .with("material", "clay")
            .with("location", "Ohio");

        let prompt = agent.operations().render("generate_listing", &fields).unwrap();
        let response = agent.operations().run("generate_listing", &fields).await.unwrap();

        assert_eq!(response, prompt);
    }

    #[test]
    fn test_from_config_with_key_in_file() {
        let mut config = config::Config::default();
        config.api.api_key = Some("file-key".to_string());

        let agent = ArtisanConnect::from_config(&config).unwrap();
        assert_eq!(agent.operations().model_config().model, "gemini-1.5-flash");
    }

    #[test]
    fn test_missing_credential_yields_no_agent() {
        let config = config::Config::default();
        assert!(config.api.api_key.is_none());

        let err = ArtisanConnect::with_env_credential(&config, None).err().unwrap();
        assert!(matches!(err, AppError::MissingCredential(ref msg) if msg.contains(".env")));

        let err = ArtisanConnect::with_env_credential(&config, Some("   ".to_string())).err().unwrap();
        assert!(matches!(err, AppError::MissingCredential(_)));
    }

    #[test]
    fn test_env_credential_used_when_file_has_none() {
        let config = config::Config::default();
        assert!(ArtisanConnect::with_env_credential(&config, Some("env-key".to_string())).is_ok());
    }
}
