//! The website generation pipeline
//!
//! Once the interview completes, the pipeline formats the collected
//! answers into a prompt, calls the text-generation provider (optionally
//! twice, with a content-elaboration pre-pass), interprets the output as
//! (HTML, CSS) under the configured strategy, and persists the artifacts.
//! There is no retry: a model failure or unparseable output surfaces once
//! as a single error, and nothing is written in that case.

pub mod artifacts;
pub mod edit;
pub mod parse;

use crate::config::{GeneratorConfig, ParseStrategy};
use crate::error::Result;
use crate::prompts::{build_generation_prompt, elaborate_prompt, site_description, site_title};
use crate::providers::TextModel;
use crate::session::Responses;

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Arc;

/// Result of a successful generation run
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// Derived site title
    pub title: String,
    /// Filesystem slug derived from the title
    pub slug: String,
    /// Path of the always-overwritten current site page
    pub current_site_path: PathBuf,
    /// Path of the per-site page (markup strategy only)
    pub page_path: Option<PathBuf>,
    /// Path of the extracted stylesheet (markup strategy only)
    pub stylesheet_path: Option<PathBuf>,
    /// When the generation finished
    pub generated_at: DateTime<Utc>,
}

/// Orchestrates prompt assembly, the model call, parsing, and persistence
pub struct Generator {
    provider: Arc<dyn TextModel>,
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator over a provider and generator configuration
    pub fn new(provider: Arc<dyn TextModel>, config: GeneratorConfig) -> Self {
        Self { provider, config }
    }

    /// The generator configuration in effect
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Runs the full pipeline for a completed answer set
    ///
    /// # Errors
    ///
    /// Returns error if the model call fails, the output cannot be
    /// interpreted under the configured strategy, or an artifact cannot be
    /// written. Parse failures happen before any write, so they leave no
    /// files behind.
    pub async fn generate(&self, responses: &Responses) -> Result<GenerationOutcome> {
        let title = site_title(responses);
        let slug = artifacts::slugify(&title);

        tracing::info!(
            "Generating website: title='{}', model={}",
            title,
            self.provider.model_name()
        );

        let elaborated = self.maybe_elaborate(responses).await?;
        let description = site_description(responses, elaborated.as_deref());
        tracing::debug!("Site description: {}", description);

        let prompt = build_generation_prompt(&title, &description, self.config.strategy);
        let raw = self.provider.generate(&prompt).await?;

        let outcome = match self.config.strategy {
            ParseStrategy::Json => {
                let site = parse::parse_json_output(&raw)?;
                let document = artifacts::render_embedded_document(&title, &site);
                let current_site_path = artifacts::write_current_site(&self.config, &document)?;
                GenerationOutcome {
                    title,
                    slug,
                    current_site_path,
                    page_path: None,
                    stylesheet_path: None,
                    generated_at: Utc::now(),
                }
            }
            ParseStrategy::Markup => {
                let href = format!("/static/styles/{}.css", slug);
                let site = parse::parse_markup_output(&raw, &href)?;
                let document = artifacts::render_linked_document(&site);
                let stylesheet_path = artifacts::write_stylesheet(&self.config, &slug, &site.css)?;
                let page_path = artifacts::write_site_page(&self.config, &slug, &document)?;
                let current_site_path = artifacts::write_current_site(&self.config, &document)?;
                GenerationOutcome {
                    title,
                    slug,
                    current_site_path,
                    page_path: Some(page_path),
                    stylesheet_path: Some(stylesheet_path),
                    generated_at: Utc::now(),
                }
            }
        };

        tracing::info!(
            "Website generated: {}",
            outcome.current_site_path.display()
        );

        Ok(outcome)
    }

    /// Runs the optional content-elaboration pre-pass
    ///
    /// Skipped when disabled in config or when there is no free-text
    /// answer to expand.
    async fn maybe_elaborate(&self, responses: &Responses) -> Result<Option<String>> {
        if !self.config.elaborate_content {
            return Ok(None);
        }

        let notes = match responses.additional_info.as_deref() {
            Some(notes) if !notes.trim().is_empty() => notes,
            _ => return Ok(None),
        };

        let website_type = responses.website_type.as_deref().unwrap_or_default();
        tracing::debug!("Running content elaboration pre-pass");
        let copy = self
            .provider
            .generate(&elaborate_prompt::elaboration_prompt(website_type, notes))
            .await?;
        Ok(Some(copy))
    }
}
