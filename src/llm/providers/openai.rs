//! OpenAI provider implementation
//!
//! Supports the OpenAI API and OpenAI-compatible endpoints via `base_url`.

use crate::error::{NexirError, Result};
use crate::llm::NameProvider;
use crate::prompts::build_prompt;
use crate::types::{GenerationRequest, LlmConfig, NameCandidate};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::parse_name_candidates;

/// OpenAI chat-completions provider
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
}

impl OpenAiProvider {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(NexirError::config("OpenAI API key is required"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| NexirError::network(e.to_string(), None, None))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            temperature: config.temperature,
        })
    }

    /// Construct the full API URL, tolerating base URLs with or without `/v1`
    fn build_url(&self, endpoint: &str) -> String {
        let base_url = self.base_url.trim_end_matches('/');
        if base_url.ends_with("/v1") {
            format!("{}{}", base_url, endpoint)
        } else {
            format!("{}/v1{}", base_url, endpoint)
        }
    }
}

#[async_trait]
impl NameProvider for OpenAiProvider {
    async fn generate_names(&self, request: &GenerationRequest) -> Result<Vec<NameCandidate>> {
        let prompt = build_prompt(request);

        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: "You are a naming expert. Always answer with the exact JSON shape the user asks for.".to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: 2000,
        };

        let url = self.build_url("/chat/completions");
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                NexirError::network(
                    format!("Failed to connect to API: {}", e),
                    None,
                    Some(url.clone()),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            let error_msg = match status.as_u16() {
                401 => format!(
                    "Authentication failed (401). Please check your API key for {}",
                    self.base_url
                ),
                403 => "Access forbidden (403). Your API key may not have permission for this endpoint".to_string(),
                429 => "Rate limit exceeded (429). Please try again later".to_string(),
                500..=599 => format!("Server error ({}). The API service is experiencing issues", status),
                _ => format!("API request failed ({}): {}", status, error_text),
            };

            return Err(NexirError::network(error_msg, Some(status.as_u16()), Some(url)));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| NexirError::parse(e.to_string(), None))?;

        let content = chat_response
            .choices
            .first()
            .ok_or_else(|| NexirError::internal("No response from OpenAI API"))?
            .message
            .content
            .clone();

        parse_name_candidates(&content, request.tone)
    }

    fn name(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_ready(&self) -> bool {
        !self.api_key.is_empty()
    }
}

// OpenAI API structures
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_api_key() {
        let config = LlmConfig::default();
        assert!(OpenAiProvider::new(&config).is_err());
    }

    #[test]
    fn test_build_url_handles_v1_suffix() {
        let config = LlmConfig {
            api_key: "sk-test".to_string(),
            base_url: Some("https://example.com/v1/".to_string()),
            ..Default::default()
        };
        let provider = OpenAiProvider::new(&config).unwrap();
        assert_eq!(
            provider.build_url("/chat/completions"),
            "https://example.com/v1/chat/completions"
        );

        let config = LlmConfig {
            api_key: "sk-test".to_string(),
            base_url: Some("https://example.com".to_string()),
            ..Default::default()
        };
        let provider = OpenAiProvider::new(&config).unwrap();
        assert_eq!(
            provider.build_url("/chat/completions"),
            "https://example.com/v1/chat/completions"
        );
    }
}
