//! Sitesmith - Conversational website generator service
//!
#![doc = "Sitesmith - Conversational website generator service"]
#![doc = "Main entry point for the Sitesmith server."]

use anyhow::Result;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sitesmith::cli::{Cli, Commands};
use sitesmith::config::Config;
use sitesmith::generator::Generator;
use sitesmith::providers::create_provider;
use sitesmith::server::{self, AppState};
use sitesmith::session::{MemorySessionStore, Responses};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse_args();

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    match cli.command {
        Commands::Serve { .. } => {
            tracing::info!("Starting Sitesmith server");

            let provider = create_provider(&config.provider)?;
            let generator = Generator::new(Arc::from(provider), config.generator.clone());

            let state = AppState {
                config: Arc::new(config),
                sessions: Arc::new(MemorySessionStore::new()),
                generator: Arc::new(generator),
            };

            server::run(state).await?;
            Ok(())
        }
        Commands::Generate {
            website_type,
            color_palette,
            accent_color,
            additional_info,
        } => {
            tracing::info!("Running one-shot generation");

            let provider = create_provider(&config.provider)?;
            let generator = Generator::new(Arc::from(provider), config.generator.clone());

            let responses = Responses {
                website_type: Some(website_type),
                color_palette: Some(color_palette),
                accent_color: Some(accent_color),
                additional_info: Some(additional_info),
                image_paths: Vec::new(),
            };

            let outcome = generator.generate(&responses).await?;
            println!("Generated {}", outcome.current_site_path.display());
            if let Some(stylesheet) = &outcome.stylesheet_path {
                println!("Stylesheet {}", stylesheet.display());
            }
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sitesmith=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
