//! Interpretation of model output as (HTML, CSS)
//!
//! Two strategies are supported. The JSON strategy expects a strict JSON
//! object with `html` and `css` fields; the markup strategy expects a full
//! HTML document and extracts its inline `<style>` blocks into an external
//! stylesheet. Parsing never touches the filesystem, so a failure here
//! leaves no partial artifacts behind.

use crate::error::{Result, SitesmithError};
use regex::Regex;
use serde::Deserialize;

/// Fallback body when the model omits the `html` field
const DEFAULT_HTML: &str = "<h1>Error generating HTML content</h1>";

/// Fallback stylesheet when the model omits the `css` field
const DEFAULT_CSS: &str = "body { font-family: Arial; }";

/// Parsed generation output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSite {
    /// Page markup (body fragment for the JSON strategy, inner document
    /// for the markup strategy)
    pub html: String,
    /// Stylesheet contents
    pub css: String,
}

/// JSON shape requested from the model under the JSON strategy
#[derive(Debug, Deserialize)]
struct JsonSite {
    #[serde(default)]
    html: Option<String>,
    #[serde(default)]
    css: Option<String>,
}

/// Strips a surrounding Markdown code fence from model output
///
/// Models routinely wrap their answer in ```json or ```html fences even
/// when told not to. Returns the inner text, or the trimmed input when no
/// fence is present.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }

    let without_opening = match trimmed.find('\n') {
        Some(idx) => &trimmed[idx + 1..],
        None => return trimmed,
    };

    without_opening
        .trim_end()
        .trim_end_matches("```")
        .trim()
}

/// Parses model output as a strict JSON object with `html` and `css` fields
///
/// # Errors
///
/// Returns a generation error if the output (after fence stripping) is not
/// valid JSON
pub fn parse_json_output(raw: &str) -> Result<GeneratedSite> {
    let cleaned = strip_code_fence(raw);

    let parsed: JsonSite = serde_json::from_str(cleaned).map_err(|e| {
        SitesmithError::Generation(format!("Unable to parse JSON response: {}", e))
    })?;

    Ok(GeneratedSite {
        html: parsed.html.unwrap_or_else(|| DEFAULT_HTML.to_string()),
        css: parsed.css.unwrap_or_else(|| DEFAULT_CSS.to_string()),
    })
}

/// Parses model output as an HTML document, extracting inline styles
///
/// All inline `<style>` block contents are concatenated into the returned
/// CSS and stripped from the document. A `<link>` to `stylesheet_href` is
/// injected into the head (a head section is created if absent), and only
/// the content inside the outermost `<html>` tag is kept, falling back to
/// the trimmed raw text when no such tag is found.
pub fn parse_markup_output(raw: &str, stylesheet_href: &str) -> Result<GeneratedSite> {
    let cleaned = strip_code_fence(raw);
    if cleaned.is_empty() {
        return Err(
            SitesmithError::Generation("Model returned an empty document".to_string()).into(),
        );
    }

    let style_re = Regex::new(r"(?is)<style[^>]*>(.*?)</style>").expect("valid style regex");

    let mut css_blocks = Vec::new();
    for capture in style_re.captures_iter(cleaned) {
        css_blocks.push(capture[1].trim().to_string());
    }
    let css = css_blocks.join("\n");

    let stripped = style_re.replace_all(cleaned, "").to_string();
    let linked = inject_stylesheet_link(&stripped, stylesheet_href);

    let html_re = Regex::new(r"(?is)<html[^>]*>(.*)</html>").expect("valid html regex");
    let html = match html_re.captures(&linked) {
        Some(capture) => capture[1].trim().to_string(),
        None => linked.trim().to_string(),
    };

    Ok(GeneratedSite { html, css })
}

/// Injects a `<link>` stylesheet reference into the document head
///
/// Creates a head section right after the opening `<html>` tag when the
/// document has none; with no `<html>` tag either, the link is prepended.
fn inject_stylesheet_link(document: &str, href: &str) -> String {
    let link = format!(r#"<link rel="stylesheet" href="{}">"#, href);

    let head_close_re = Regex::new(r"(?i)</head>").expect("valid head close regex");
    if let Some(found) = head_close_re.find(document) {
        let mut result = String::with_capacity(document.len() + link.len() + 1);
        result.push_str(&document[..found.start()]);
        result.push_str(&link);
        result.push('\n');
        result.push_str(&document[found.start()..]);
        return result;
    }

    let html_open_re = Regex::new(r"(?i)<html[^>]*>").expect("valid html open regex");
    if let Some(found) = html_open_re.find(document) {
        let mut result = String::with_capacity(document.len() + link.len() + 16);
        result.push_str(&document[..found.end()]);
        result.push_str("\n<head>");
        result.push_str(&link);
        result.push_str("</head>");
        result.push_str(&document[found.end()..]);
        return result;
    }

    format!("{}\n{}", link, document)
}
