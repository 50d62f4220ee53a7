//! Configuration management for Sitesmith
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::cli::{Cli, Commands};
use crate::error::{Result, SitesmithError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for Sitesmith
///
/// This structure holds all configuration needed for the service,
/// including server settings, provider settings, and generator behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Provider configuration (Gemini, Ollama)
    pub provider: ProviderConfig,
    /// Website generator configuration
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host for the HTTP server
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port for the HTTP server
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allow cross-origin requests from any origin
    ///
    /// Needed when the chat client is hosted separately from the API.
    #[serde(default = "default_permissive_cors")]
    pub permissive_cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_permissive_cors() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            permissive_cors: default_permissive_cors(),
        }
    }
}

/// Provider configuration
///
/// Specifies which text-generation provider to use and its settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Type of provider to use
    #[serde(rename = "type")]
    pub provider_type: String,

    /// Google Gemini configuration
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Ollama configuration
    #[serde(default)]
    pub ollama: OllamaConfig,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_type: "gemini".to_string(),
            gemini: GeminiConfig::default(),
            ollama: OllamaConfig::default(),
        }
    }
}

/// Google Gemini provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Model to use for Gemini
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Environment variable holding the API key
    #[serde(default = "default_gemini_api_key_env")]
    pub api_key_env: String,

    /// Optional API base URL for Gemini endpoints (useful for tests and local mocks)
    ///
    /// When set, this base is used to build the `generateContent` endpoint,
    /// which allows tests to point the provider at a mock server.
    #[serde(default)]
    pub api_base: Option<String>,
}

fn default_gemini_model() -> String {
    "gemini-1.5-pro-latest".to_string()
}

fn default_gemini_api_key_env() -> String {
    "GOOGLE_API_KEY".to_string()
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_gemini_model(),
            api_key_env: default_gemini_api_key_env(),
            api_base: None,
        }
    }
}

/// Ollama provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Ollama server host
    #[serde(default = "default_ollama_host")]
    pub host: String,

    /// Model to use for Ollama
    #[serde(default = "default_ollama_model")]
    pub model: String,
}

fn default_ollama_host() -> String {
    "http://localhost:11434".to_string()
}

fn default_ollama_model() -> String {
    "llama3.2:latest".to_string()
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: default_ollama_host(),
            model: default_ollama_model(),
        }
    }
}

/// How the model's output is interpreted as (HTML, CSS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseStrategy {
    /// Ask for a strict JSON object with `html` and `css` fields
    Json,
    /// Ask for raw markup and extract inline `<style>` blocks
    Markup,
}

/// Website generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory for generated site pages
    #[serde(default = "default_site_dir")]
    pub site_dir: PathBuf,

    /// Directory for extracted stylesheets
    #[serde(default = "default_styles_dir")]
    pub styles_dir: PathBuf,

    /// Directory for uploaded images
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: PathBuf,

    /// Filename of the always-overwritten current site page
    #[serde(default = "default_current_site_file")]
    pub current_site_file: String,

    /// How model output is interpreted
    #[serde(default = "default_strategy")]
    pub strategy: ParseStrategy,

    /// Run a pre-pass asking the model to expand the free-text answer
    /// into fuller site copy before generating the page
    #[serde(default)]
    pub elaborate_content: bool,
}

fn default_site_dir() -> PathBuf {
    PathBuf::from("generated_sites")
}

fn default_styles_dir() -> PathBuf {
    PathBuf::from("static/styles")
}

fn default_uploads_dir() -> PathBuf {
    PathBuf::from("static/uploads")
}

fn default_current_site_file() -> String {
    "userwebsite.html".to_string()
}

fn default_strategy() -> ParseStrategy {
    ParseStrategy::Markup
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            site_dir: default_site_dir(),
            styles_dir: default_styles_dir(),
            uploads_dir: default_uploads_dir(),
            current_site_file: default_current_site_file(),
            strategy: default_strategy(),
            elaborate_content: false,
        }
    }
}

impl GeneratorConfig {
    /// Full path of the always-overwritten current site page
    pub fn current_site_path(&self) -> PathBuf {
        self.site_dir.join(&self.current_site_file)
    }
}

impl Config {
    /// Load configuration from a YAML file with CLI overrides
    ///
    /// If the file does not exist, defaults are used. CLI overrides
    /// (bind host/port from the `serve` command) are applied on top of
    /// whatever the file provides.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    /// * `cli` - Parsed CLI arguments for overrides
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: impl AsRef<Path>, cli: &Cli) -> Result<Self> {
        let path = path.as_ref();

        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&contents)?
        } else {
            tracing::warn!(
                "Configuration file {} not found, using defaults",
                path.display()
            );
            Self::default()
        };

        if let Commands::Serve { host, port } = &cli.command {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
        }

        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if the provider type is unknown, a configured API base
    /// is not a valid URL, or the current site filename is empty
    pub fn validate(&self) -> Result<()> {
        match self.provider.provider_type.as_str() {
            "gemini" | "ollama" => {}
            other => {
                return Err(SitesmithError::Config(format!(
                    "Unknown provider type: {}",
                    other
                ))
                .into());
            }
        }

        if let Some(api_base) = &self.provider.gemini.api_base {
            url::Url::parse(api_base).map_err(|e| {
                SitesmithError::Config(format!("Invalid Gemini api_base '{}': {}", api_base, e))
            })?;
        }

        url::Url::parse(&self.provider.ollama.host).map_err(|e| {
            SitesmithError::Config(format!(
                "Invalid Ollama host '{}': {}",
                self.provider.ollama.host, e
            ))
        })?;

        if self.generator.current_site_file.trim().is_empty() {
            return Err(
                SitesmithError::Config("current_site_file must not be empty".to_string()).into(),
            );
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            provider: ProviderConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}
