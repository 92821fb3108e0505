//! Core trait definitions
//!
//! The completion service sits behind a trait so the operations hub can be
//! driven by the real HTTP client or by a stub in tests.

use async_trait::async_trait;

use crate::core::data::ModelConfig;
use crate::utils::error::AppResult;

/// A text-generation backend
///
/// Implementations are constructed once and shared across calls, so they
/// must not hold per-call mutable state.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a fully rendered prompt and return the model's text verbatim
    async fn complete(&self, prompt: &str) -> AppResult<String>;

    /// Model settings passed to the backend with every request
    fn model_config(&self) -> &ModelConfig;
}
