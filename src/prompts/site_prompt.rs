//! Generation prompts for the two output formats

/// Prompt requesting a strict JSON object with `html` and `css` fields
pub fn json_prompt(title: &str, description: &str) -> String {
    format!(
        r#"Generate a simple website with HTML and CSS:
- Title: "{title}"
- Description: "{description}"

Provide the output as a JSON object with two fields:
1. 'html': The HTML content of the webpage.
2. 'css': The CSS content for styling the webpage.

Please only include the html and css, no explanations."#
    )
}

/// Prompt requesting a complete HTML document with inline styling
pub fn markup_prompt(title: &str, description: &str) -> String {
    format!(
        r#"Generate a simple website as a single HTML document:
- Title: "{title}"
- Description: "{description}"

Return a complete HTML page starting with <!DOCTYPE html>. Put all styling
in inline <style> blocks inside the document.

Please only include the markup, no explanations."#
    )
}
