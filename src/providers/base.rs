//! Base provider trait for text-generation backends
//!
//! This module defines the TextModel trait that all text-generation
//! providers must implement. The generation pipeline issues plain-text
//! prompts and expects plain-text completions; everything else (auth,
//! request shape, response unwrapping) is a provider concern.

use crate::error::Result;
use async_trait::async_trait;

/// Trait for text-generation providers
///
/// All providers (Gemini, Ollama, etc.) must implement this trait. The
/// pipeline holds a boxed instance, so implementations must be
/// object-safe, `Send`, and `Sync`.
///
/// # Examples
///
/// ```no_run
/// use sitesmith::providers::TextModel;
/// use sitesmith::error::Result;
/// use async_trait::async_trait;
///
/// struct FixedModel;
///
/// #[async_trait]
/// impl TextModel for FixedModel {
///     async fn generate(&self, _prompt: &str) -> Result<String> {
///         Ok("<html></html>".to_string())
///     }
///
///     fn model_name(&self) -> String {
///         "fixed".to_string()
///     }
/// }
/// ```
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Generates a plain-text completion for the given prompt
    ///
    /// # Arguments
    ///
    /// * `prompt` - The full prompt text
    ///
    /// # Errors
    ///
    /// Returns error if the API call fails or the response carries no text
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Name of the model this provider is configured to use
    fn model_name(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoModel;

    #[async_trait]
    impl TextModel for EchoModel {
        async fn generate(&self, prompt: &str) -> Result<String> {
            Ok(format!("echo: {}", prompt))
        }

        fn model_name(&self) -> String {
            "echo".to_string()
        }
    }

    #[tokio::test]
    async fn test_trait_object_usable() {
        let model: Box<dyn TextModel> = Box::new(EchoModel);
        let output = model.generate("hello").await.unwrap();
        assert_eq!(output, "echo: hello");
        assert_eq!(model.model_name(), "echo");
    }
}
