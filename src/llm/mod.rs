//! LLM integration for name generation
//!
//! Simple interface: a prompt goes in, structured name candidates come out.

pub mod generator;
pub mod providers;

pub use generator::NameGenerator;

use crate::error::Result;
use crate::types::{GenerationRequest, LlmConfig, NameCandidate};
use async_trait::async_trait;

/// Core trait for name-generation providers
#[async_trait]
pub trait NameProvider: Send + Sync {
    /// Generate name candidates for a request
    async fn generate_names(&self, request: &GenerationRequest) -> Result<Vec<NameCandidate>>;

    /// Get provider name
    fn name(&self) -> &'static str;

    /// Get model name being used
    fn model(&self) -> &str;

    /// Check if provider is configured and ready
    fn is_ready(&self) -> bool;
}

/// Get available name-generation providers
pub fn available_providers() -> Vec<&'static str> {
    vec!["openai"]
}

/// Create a provider from configuration
pub fn create_provider(config: &LlmConfig) -> Result<Box<dyn NameProvider>> {
    match config.provider.as_str() {
        "openai" => Ok(Box::new(providers::OpenAiProvider::new(config)?)),
        _ => Err(crate::error::NexirError::config(format!(
            "Unsupported provider: {}. Supported providers: {}",
            config.provider,
            available_providers().join(", ")
        ))),
    }
}
