//! Optional pre-pass prompt expanding the user's free-text notes

/// Prompt asking the model to expand short notes into fuller site copy
///
/// Used when `generator.elaborate_content` is enabled; the result replaces
/// the raw free-text answer in the site description.
pub fn elaboration_prompt(website_type: &str, notes: &str) -> String {
    format!(
        r#"Expand the following notes into two or three short paragraphs of
website copy for a {website_type} website. Keep the tone simple and direct.

Notes: {notes}

Please return only the copy, no explanations."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elaboration_prompt_embeds_notes() {
        let prompt = elaboration_prompt("Blog", "a blog about birds");
        assert!(prompt.contains("Blog website"));
        assert!(prompt.contains("a blog about birds"));
        assert!(prompt.contains("only the copy"));
    }
}
