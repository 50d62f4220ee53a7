//! Prompt assembly for the generation pipeline
//!
//! This module turns the collected interview answers into the
//! natural-language prompts sent to the text-generation model. The shape
//! of the generation prompt depends on the configured parse strategy.

pub mod elaborate_prompt;
pub mod site_prompt;

use crate::config::ParseStrategy;
use crate::session::Responses;

/// Derives the site title from the collected answers
///
/// # Examples
///
/// ```
/// use sitesmith::prompts::site_title;
/// use sitesmith::session::Responses;
///
/// let responses = Responses {
///     website_type: Some("Blog".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(site_title(&responses), "Blog Website");
/// ```
pub fn site_title(responses: &Responses) -> String {
    format!(
        "{} Website",
        responses.website_type.as_deref().unwrap_or_default()
    )
}

/// Formats the collected answers into a one-paragraph site description
///
/// Missing answers are not validated; they simply leave gaps in the text.
/// When the elaboration pre-pass has run, its output replaces the raw
/// free-text answer.
pub fn site_description(responses: &Responses, elaborated: Option<&str>) -> String {
    let content = elaborated
        .or(responses.additional_info.as_deref())
        .unwrap_or_default();

    let mut description = format!(
        "A {} {} website with a {} colour scheme. {}",
        responses.color_palette.as_deref().unwrap_or_default(),
        responses.website_type.as_deref().unwrap_or_default(),
        responses.accent_color.as_deref().unwrap_or_default(),
        content
    );

    if !responses.image_paths.is_empty() {
        description.push_str(&format!(
            " Include these images: {}.",
            responses.image_paths.join(", ")
        ));
    }

    description
}

/// Builds the strategy-specific generation prompt
///
/// # Arguments
///
/// * `title` - Site title derived from the answers
/// * `description` - Natural-language site description
/// * `strategy` - Which output format to request from the model
pub fn build_generation_prompt(title: &str, description: &str, strategy: ParseStrategy) -> String {
    match strategy {
        ParseStrategy::Json => site_prompt::json_prompt(title, description),
        ParseStrategy::Markup => site_prompt::markup_prompt(title, description),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_responses() -> Responses {
        Responses {
            website_type: Some("Blog".to_string()),
            color_palette: Some("Dark-Mode".to_string()),
            accent_color: Some("Blue".to_string()),
            additional_info: Some("a blog about birds".to_string()),
            image_paths: Vec::new(),
        }
    }

    #[test]
    fn test_site_title() {
        assert_eq!(site_title(&full_responses()), "Blog Website");
    }

    #[test]
    fn test_site_title_missing_type() {
        let responses = Responses::default();
        assert_eq!(site_title(&responses), " Website");
    }

    #[test]
    fn test_site_description_includes_all_answers() {
        let description = site_description(&full_responses(), None);
        assert!(description.contains("Dark-Mode"));
        assert!(description.contains("Blog"));
        assert!(description.contains("Blue"));
        assert!(description.contains("a blog about birds"));
    }

    #[test]
    fn test_site_description_prefers_elaborated_content() {
        let description = site_description(&full_responses(), Some("Expanded bird copy."));
        assert!(description.contains("Expanded bird copy."));
        assert!(!description.contains("a blog about birds"));
    }

    #[test]
    fn test_site_description_mentions_uploaded_images() {
        let mut responses = full_responses();
        responses.image_paths = vec!["static/uploads/u1-logo.png".to_string()];
        let description = site_description(&responses, None);
        assert!(description.contains("static/uploads/u1-logo.png"));
    }

    #[test]
    fn test_build_generation_prompt_json() {
        let prompt = build_generation_prompt("Blog Website", "A dark blog.", ParseStrategy::Json);
        assert!(prompt.contains("Blog Website"));
        assert!(prompt.contains("A dark blog."));
        assert!(prompt.contains("JSON"));
        assert!(prompt.contains("'html'"));
        assert!(prompt.contains("'css'"));
    }

    #[test]
    fn test_build_generation_prompt_markup() {
        let prompt = build_generation_prompt("Blog Website", "A dark blog.", ParseStrategy::Markup);
        assert!(prompt.contains("Blog Website"));
        assert!(prompt.contains("HTML"));
        assert!(!prompt.contains("JSON"));
    }
}
