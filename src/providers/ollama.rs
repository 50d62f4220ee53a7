//! Ollama provider implementation
//!
//! This module implements the TextModel trait for Ollama, connecting to a
//! local or remote Ollama server through the non-streaming `/api/generate`
//! endpoint. No authentication is required.

use crate::config::OllamaConfig;
use crate::error::{Result, SitesmithError};
use crate::providers::TextModel;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Ollama API provider
///
/// # Examples
///
/// ```no_run
/// use sitesmith::config::OllamaConfig;
/// use sitesmith::providers::{OllamaProvider, TextModel};
///
/// # async fn example() -> sitesmith::error::Result<()> {
/// let config = OllamaConfig {
///     host: "http://localhost:11434".to_string(),
///     model: "llama3.2:latest".to_string(),
/// };
/// let provider = OllamaProvider::new(config)?;
/// let text = provider.generate("Describe a simple website.").await?;
/// # Ok(())
/// # }
/// ```
pub struct OllamaProvider {
    client: Client,
    config: OllamaConfig,
}

/// Request structure for the /api/generate endpoint
#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
}

/// Response structure from the /api/generate endpoint
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    #[serde(default)]
    response: String,
    #[serde(default)]
    done: bool,
}

impl OllamaProvider {
    /// Create a new Ollama provider instance
    ///
    /// # Arguments
    ///
    /// * `config` - Ollama configuration containing host and model
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    pub fn new(config: OllamaConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .user_agent("sitesmith/0.2.0")
            .build()
            .map_err(|e| SitesmithError::Provider(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!(
            "Initialized Ollama provider: host={}, model={}",
            config.host,
            config.model
        );

        Ok(Self { client, config })
    }

    /// Build the generate endpoint URL
    fn endpoint(&self) -> String {
        format!("{}/api/generate", self.config.host.trim_end_matches('/'))
    }
}

#[async_trait]
impl TextModel for OllamaProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = OllamaRequest {
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        tracing::debug!("Sending generate request: model={}", self.config.model);

        let response = self.client.post(self.endpoint()).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SitesmithError::Provider(format!(
                "Ollama API returned {}: {}",
                status, body
            ))
            .into());
        }

        let parsed: OllamaResponse = response.json().await?;

        if !parsed.done {
            return Err(
                SitesmithError::Provider("Ollama response was not complete".to_string()).into(),
            );
        }

        if parsed.response.is_empty() {
            return Err(
                SitesmithError::Provider("Ollama response contained no text".to_string()).into(),
            );
        }

        Ok(parsed.response)
    }

    fn model_name(&self) -> String {
        self.config.model.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_building() {
        let provider = OllamaProvider::new(OllamaConfig::default()).unwrap();
        assert_eq!(provider.endpoint(), "http://localhost:11434/api/generate");
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let provider = OllamaProvider::new(OllamaConfig {
            host: "http://ollama.local:11434/".to_string(),
            model: "llama3.2:latest".to_string(),
        })
        .unwrap();
        assert_eq!(provider.endpoint(), "http://ollama.local:11434/api/generate");
    }

    #[test]
    fn test_request_serialization() {
        let request = OllamaRequest {
            model: "llama3.2:latest".to_string(),
            prompt: "hello".to_string(),
            stream: false,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"model\":\"llama3.2:latest\""));
        assert!(json.contains("\"prompt\":\"hello\""));
        assert!(json.contains("\"stream\":false"));
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{"response": "<html></html>", "done": true}"#;
        let parsed: OllamaResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.response, "<html></html>");
        assert!(parsed.done);
    }

    #[test]
    fn test_model_name() {
        let provider = OllamaProvider::new(OllamaConfig::default()).unwrap();
        assert_eq!(provider.model_name(), "llama3.2:latest");
    }
}
