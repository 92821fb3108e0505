//! Stub completion clients shared by unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::core::data::ModelConfig;
use crate::core::traits::CompletionClient;
use crate::utils::error::{AppError, AppResult};

/// Returns the prompt it was given, counting calls
#[derive(Default)]
pub struct EchoClient {
    model: ModelConfig,
    calls: AtomicUsize,
}

impl EchoClient {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for EchoClient {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(prompt.to_string())
    }

    fn model_config(&self) -> &ModelConfig {
        &self.model
    }
}

/// Fails every call whose prompt contains `needle`, echoes the rest
pub struct FailingClient {
    model: ModelConfig,
    needle: &'static str,
}

impl FailingClient {
    pub fn on(needle: &'static str) -> Self {
        Self {
            model: ModelConfig::default(),
            needle,
        }
    }
}

#[async_trait]
impl CompletionClient for FailingClient {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        if prompt.contains(self.needle) {
            Err(AppError::RemoteService("quota exceeded".to_string()))
        } else {
            Ok(prompt.to_string())
        }
    }

    fn model_config(&self) -> &ModelConfig {
        &self.model
    }
}
