//! Provider module for Sitesmith
//!
//! This module contains the text-generation provider abstraction and
//! implementations for Google Gemini and Ollama.

pub mod base;
pub mod gemini;
pub mod ollama;

pub use base::TextModel;
pub use gemini::GeminiProvider;
pub use ollama::OllamaProvider;

use crate::config::ProviderConfig;
use crate::error::Result;

/// Create a provider instance based on configuration
///
/// # Arguments
///
/// * `config` - Provider configuration
///
/// # Returns
///
/// Returns a boxed provider instance
///
/// # Errors
///
/// Returns error if the provider type is invalid or initialization fails
pub fn create_provider(config: &ProviderConfig) -> Result<Box<dyn TextModel>> {
    match config.provider_type.as_str() {
        "gemini" => Ok(Box::new(GeminiProvider::new(config.gemini.clone())?)),
        "ollama" => Ok(Box::new(OllamaProvider::new(config.ollama.clone())?)),
        other => Err(crate::error::SitesmithError::Provider(format!(
            "Unknown provider type: {}",
            other
        ))
        .into()),
    }
}
