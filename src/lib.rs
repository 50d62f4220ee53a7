//! Sitesmith - Conversational website generator library
//!
//! This library provides the core functionality for the Sitesmith service:
//! the interview session tracker, the generation pipeline, provider
//! abstractions, and the HTTP server.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `session`: Per-user interview sessions and the session store
//! - `interview`: The fixed question sequence and phase transitions
//! - `prompts`: Prompt assembly from collected answers
//! - `providers`: Text-generation provider abstraction (Gemini, Ollama)
//! - `generator`: Model output parsing and artifact persistence
//! - `server`: axum routes and request handlers
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use sitesmith::cli::Cli;
//! use sitesmith::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::load("config/config.yaml", &Cli::default())?;
//! config.validate()?;
//!
//! // Server startup would go here
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod interview;
pub mod prompts;
pub mod providers;
pub mod server;
pub mod session;

// Re-export commonly used types
pub use config::{Config, ParseStrategy};
pub use error::{Result, SitesmithError};
pub use generator::Generator;
pub use session::{MemorySessionStore, Session, SessionStore};
