//! Post-generation edits to the stored page
//!
//! The update endpoint accepts a small set of plain-language instructions
//! against the current site file. Edits locate the target element in the
//! markup and rewrite its content rather than splicing literal text, so an
//! instruction either applies cleanly or fails loudly.

use crate::error::{Result, SitesmithError};
use regex::Regex;
use std::path::Path;

/// A recognized edit instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditInstruction {
    /// Replace the text of the document's `<title>` element
    ChangeTitle(String),
}

/// Parses a plain-language instruction
///
/// Currently supports `change title to <text>` (case-insensitive).
///
/// # Errors
///
/// Returns an instruction error for anything unrecognized
pub fn parse_instruction(text: &str) -> Result<EditInstruction> {
    let change_title_re =
        Regex::new(r"(?i)^change\s+title\s+to\s+(.+)$").expect("valid instruction regex");

    if let Some(capture) = change_title_re.captures(text.trim()) {
        let new_title = capture[1].trim().to_string();
        if new_title.is_empty() {
            return Err(
                SitesmithError::Instruction("New title must not be empty".to_string()).into(),
            );
        }
        return Ok(EditInstruction::ChangeTitle(new_title));
    }

    Err(SitesmithError::Instruction(format!("Unrecognized instruction: {}", text.trim())).into())
}

/// Replaces the text of the `<title>` element in a document
///
/// Matches against the title tag itself rather than the previous title
/// text, so the edit works regardless of what the model generated.
///
/// # Errors
///
/// Returns an instruction error if the document has no `<title>` element
pub fn set_title(document: &str, new_title: &str) -> Result<String> {
    let title_re = Regex::new(r"(?is)(<title[^>]*>)(.*?)(</title>)").expect("valid title regex");

    if !title_re.is_match(document) {
        return Err(SitesmithError::Instruction(
            "Document has no <title> element".to_string(),
        )
        .into());
    }

    let replaced = title_re.replace(document, |caps: &regex::Captures| {
        format!("{}{}{}", &caps[1], new_title, &caps[3])
    });

    Ok(replaced.into_owned())
}

/// Applies an instruction to the stored page file
///
/// Reads the file, performs the edit, and writes the result back.
///
/// # Errors
///
/// Returns error if the file cannot be read or written, or the edit does
/// not apply
pub fn apply_instruction(path: &Path, instruction: &EditInstruction) -> Result<()> {
    let document = std::fs::read_to_string(path)?;

    let updated = match instruction {
        EditInstruction::ChangeTitle(new_title) => {
            tracing::info!("Changing page title to '{}'", new_title);
            set_title(&document, new_title)?
        }
    };

    std::fs::write(path, updated)?;
    Ok(())
}
