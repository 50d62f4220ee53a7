//! Google Gemini provider implementation
//!
//! This module implements the TextModel trait against the Google
//! Generative Language REST API, authenticated with an API key supplied
//! through the environment.

use crate::config::GeminiConfig;
use crate::error::{Result, SitesmithError};
use crate::providers::TextModel;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API base for the Generative Language endpoints
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Google Gemini API provider
///
/// Sends a single-turn `generateContent` request per prompt. The API key
/// is read once at construction from the environment variable named in
/// the configuration (`GOOGLE_API_KEY` by default). `api_base` can point
/// at a mock server in tests.
///
/// # Examples
///
/// ```no_run
/// use sitesmith::config::GeminiConfig;
/// use sitesmith::providers::{GeminiProvider, TextModel};
///
/// # async fn example() -> sitesmith::error::Result<()> {
/// let provider = GeminiProvider::new(GeminiConfig::default())?;
/// let text = provider.generate("Describe a simple website.").await?;
/// # Ok(())
/// # }
/// ```
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
    api_key: String,
}

/// Request structure for the generateContent endpoint
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

/// One conversational turn in a Gemini request or response
#[derive(Debug, Serialize, Deserialize, Default)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

/// A single text part
#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

/// Response structure from the generateContent endpoint
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

/// One candidate completion
#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: GeminiContent,
}

impl GeminiProvider {
    /// Create a new Gemini provider instance
    ///
    /// # Arguments
    ///
    /// * `config` - Gemini configuration (model, API base, key env var)
    ///
    /// # Errors
    ///
    /// Returns error if the API key environment variable is unset or the
    /// HTTP client cannot be initialized
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| SitesmithError::MissingCredentials(format!("gemini ({})", config.api_key_env)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .user_agent("sitesmith/0.2.0")
            .build()
            .map_err(|e| SitesmithError::Provider(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!("Initialized Gemini provider: model={}", config.model);

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Build the generateContent endpoint URL for the configured model
    fn endpoint(&self) -> String {
        let base = self
            .config
            .api_base
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/');
        format!("{}/v1beta/models/{}:generateContent", base, self.config.model)
    }
}

#[async_trait]
impl TextModel for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!("Sending generateContent request: model={}", self.config.model);

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SitesmithError::Provider(format!(
                "Gemini API returned {}: {}",
                status, body
            ))
            .into());
        }

        let parsed: GeminiResponse = response.json().await?;

        let text: String = parsed
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(
                SitesmithError::Provider("Gemini response contained no text".to_string()).into(),
            );
        }

        Ok(text)
    }

    fn model_name(&self) -> String {
        self.config.model.clone()
    }
}
