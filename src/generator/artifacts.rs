//! Persistence of generated artifacts
//!
//! Generated pages and stylesheets are plain files under the configured
//! directories. Every write is an unconditional overwrite; last writer
//! wins and there is no history.

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::generator::parse::GeneratedSite;
use std::path::PathBuf;

/// Reduces a site title to a filesystem-safe slug
///
/// Lowercases the title and collapses every run of non-alphanumeric
/// characters into a single dash.
///
/// # Examples
///
/// ```
/// use sitesmith::generator::artifacts::slugify;
///
/// assert_eq!(slugify("Portfolio/CV Website"), "portfolio-cv-website");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut previous_dash = true;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            previous_dash = false;
        } else if !previous_dash {
            slug.push('-');
            previous_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// Renders a complete document embedding the CSS in a `<style>` block
///
/// Used by the JSON strategy, whose `html` field is a body fragment.
pub fn render_embedded_document(title: &str, site: &GeneratedSite) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>{}</style>
</head>
<body>
{}
</body>
</html>
"#,
        title, site.css, site.html
    )
}

/// Renders a complete document around inner-document markup
///
/// Used by the markup strategy, whose `html` field already carries head
/// and body sections (with the stylesheet link injected).
pub fn render_linked_document(site: &GeneratedSite) -> String {
    format!("<!DOCTYPE html>\n<html lang=\"en\">\n{}\n</html>\n", site.html)
}

/// Overwrites the fixed current-site page with a rendered document
///
/// # Returns
///
/// Returns the path of the written file
pub fn write_current_site(config: &GeneratorConfig, document: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(&config.site_dir)?;
    let path = config.current_site_path();
    std::fs::write(&path, document)?;
    tracing::debug!("Wrote current site page: {}", path.display());
    Ok(path)
}

/// Writes the per-site page for a slug, overwriting any previous version
pub fn write_site_page(config: &GeneratorConfig, slug: &str, document: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(&config.site_dir)?;
    let path = config.site_dir.join(format!("{}.html", slug));
    std::fs::write(&path, document)?;
    tracing::debug!("Wrote site page: {}", path.display());
    Ok(path)
}

/// Writes the per-site stylesheet for a slug
pub fn write_stylesheet(config: &GeneratorConfig, slug: &str, css: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(&config.styles_dir)?;
    let path = config.styles_dir.join(format!("{}.css", slug));
    std::fs::write(&path, css)?;
    tracing::debug!("Wrote stylesheet: {}", path.display());
    Ok(path)
}
