//! Narrative provider trait definition

use crate::{ChatRequest, Result};
use async_trait::async_trait;

/// Trait for narrative model providers
///
/// Implementations of this trait turn a prompt into free-text commentary
/// via a language-model service.
#[async_trait]
pub trait NarrativeProvider: Send + Sync {
    /// Generate a completion and return the assistant's text
    ///
    /// # Arguments
    ///
    /// * `request` - The chat request with model, prompts, and parameters
    async fn complete(&self, request: ChatRequest) -> Result<String>;

    /// Get the provider name (e.g., "openai")
    fn name(&self) -> &str;
}
