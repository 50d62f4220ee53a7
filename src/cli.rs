//! Command-line interface definition for Sitesmith
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for running the server and one-shot generation.

use clap::{Parser, Subcommand};

/// Sitesmith - Conversational website generator service
///
/// Collects site requirements through a guided chat, generates a page
/// with a text-generation model, and serves the result.
#[derive(Parser, Debug, Clone)]
#[command(name = "sitesmith")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Sitesmith
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Override the bind host from config
        #[arg(long)]
        host: Option<String>,

        /// Override the bind port from config
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run the generation pipeline once without the server
    Generate {
        /// Type of website (e.g. "Portfolio/CV", "Blog")
        #[arg(long)]
        website_type: String,

        /// Background theme (e.g. "Dark-Mode")
        #[arg(long)]
        color_palette: String,

        /// Main accent color (e.g. "Blue")
        #[arg(long)]
        accent_color: String,

        /// Free-text description of the site content
        #[arg(long, default_value = "")]
        additional_info: String,
    },
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            command: Commands::Serve {
                host: None,
                port: None,
            },
        }
    }
}
