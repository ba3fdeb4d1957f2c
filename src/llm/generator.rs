//! Name generator front-end over the configured provider

use crate::error::{NexirError, Result};
use crate::llm::{create_provider, NameProvider};
use crate::types::{GenerationRequest, LlmConfig, NameCandidate};
use std::sync::Arc;
use std::time::Instant;

/// Name generator that delegates to a configured LLM provider
#[derive(Clone)]
pub struct NameGenerator {
    provider: Arc<dyn NameProvider>,
}

impl NameGenerator {
    /// Create a generator from provider configuration
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let provider = create_provider(config)?;
        Ok(Self {
            provider: Arc::from(provider),
        })
    }

    /// Create a generator from environment variables.
    ///
    /// Reads `OPENAI_API_KEY` (required), `OPENAI_MODEL`, and
    /// `OPENAI_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            NexirError::config(
                "No provider configured. Please set the OPENAI_API_KEY environment variable.",
            )
        })?;

        let config = LlmConfig {
            api_key,
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| LlmConfig::default().model),
            base_url: std::env::var("OPENAI_BASE_URL").ok(),
            ..Default::default()
        };
        Self::new(&config)
    }

    /// Generate name candidates, logging the outcome.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Vec<NameCandidate>> {
        if request.keywords.trim().is_empty() {
            return Err(NexirError::validation("Keywords are required."));
        }

        let start_time = Instant::now();
        let result = self.provider.generate_names(request).await;

        match &result {
            Ok(candidates) => {
                tracing::info!(
                    provider = %self.provider.name(),
                    model = %self.provider.model(),
                    candidates = %candidates.len(),
                    duration_ms = %start_time.elapsed().as_millis(),
                    "Name generation completed"
                );
            }
            Err(e) => {
                tracing::warn!(
                    provider = %self.provider.name(),
                    error = %e,
                    duration_ms = %start_time.elapsed().as_millis(),
                    "Name generation failed"
                );
            }
        }

        result
    }

    /// Provider name in use
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Check if the underlying provider is configured
    pub fn is_ready(&self) -> bool {
        self.provider.is_ready()
    }
}
