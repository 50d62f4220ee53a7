//! Error types for Sitesmith
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Sitesmith operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, provider interactions, website generation,
/// artifact persistence, and session handling.
#[derive(Error, Debug)]
pub enum SitesmithError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider-related errors (API calls, authentication, etc.)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Generation errors (unparseable model output, empty completions)
    #[error("Generation error: {0}")]
    Generation(String),

    /// Session store errors
    #[error("Session error: {0}")]
    Session(String),

    /// Unrecognized or malformed edit instructions
    #[error("Instruction error: {0}")]
    Instruction(String),

    /// Image upload errors (invalid encoding, undecodable data)
    #[error("Upload error: {0}")]
    Upload(String),

    /// Missing credentials for provider
    #[error("Missing credentials for provider: {0}")]
    MissingCredentials(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Image decoding errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias for Sitesmith operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
