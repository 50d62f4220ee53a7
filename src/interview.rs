//! The fixed question sequence driving the site interview
//!
//! Four phases, no branching: website type, background theme, accent
//! color, free-text content. Any input is accepted and stored verbatim;
//! there is no validation against the offered suggestions and no way to
//! go back a phase.

use crate::session::{Phase, Responses, Session};

/// Website type suggestions presented by the client before the first message
pub const WEBSITE_TYPES: &[&str] = &["Portfolio/CV", "Business", "Blog", "Webstore", "Landing Page"];

/// Background theme suggestions offered after phase 1
pub const COLOR_PALETTES: &[&str] = &["Dark-Mode", "Light-Mode"];

/// Accent color suggestions offered after phase 2
pub const ACCENT_COLORS: &[&str] = &["Red", "Green", "Blue", "Orange", "Purple"];

/// Result of feeding one answer into the interview
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Present the next question
    Ask {
        /// Question text to show the user
        message: String,
        /// Choice buttons to offer (empty for free-text questions)
        suggestions: Vec<String>,
        /// 1-based number of the step the client should highlight next
        next_step: u8,
    },
    /// All answers are collected; the caller runs the generation pipeline
    /// and deletes the session
    Complete {
        /// The full answer set
        responses: Responses,
    },
}

/// Stores `input` as the answer for the session's current phase and advances
///
/// Returns the next question, or [`StepOutcome::Complete`] once the final
/// answer has been recorded. The session's phase strictly increases by one
/// per call; after `Complete` the caller is responsible for removing the
/// session so the next message starts over at phase 1.
pub fn advance(session: &mut Session, input: &str) -> StepOutcome {
    let answer = input.to_string();

    match session.phase {
        Phase::WebsiteType => {
            session.responses.website_type = Some(answer);
            session.phase = Phase::ColorPalette;
            tracing::info!("Phase 1 completed: website type recorded");
            StepOutcome::Ask {
                message: "Please select the background theme of your website.".to_string(),
                suggestions: COLOR_PALETTES.iter().map(|s| s.to_string()).collect(),
                next_step: 2,
            }
        }
        Phase::ColorPalette => {
            session.responses.color_palette = Some(answer);
            session.phase = Phase::AccentColor;
            tracing::info!("Phase 2 completed: color palette recorded");
            StepOutcome::Ask {
                message: "Please select the main colour of your website.".to_string(),
                suggestions: ACCENT_COLORS.iter().map(|s| s.to_string()).collect(),
                next_step: 3,
            }
        }
        Phase::AccentColor => {
            session.responses.accent_color = Some(answer);
            session.phase = Phase::AdditionalInfo;
            tracing::info!("Phase 3 completed: accent color recorded");
            StepOutcome::Ask {
                message: "Is there any additional information you'd like to add about your website?"
                    .to_string(),
                suggestions: Vec::new(),
                next_step: 4,
            }
        }
        Phase::AdditionalInfo => {
            session.responses.additional_info = Some(answer);
            tracing::info!("Phase 4 completed: interview finished");
            StepOutcome::Complete {
                responses: session.responses.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_one_stores_website_type() {
        let mut session = Session::new();
        let outcome = advance(&mut session, "Blog");

        assert_eq!(session.phase, Phase::ColorPalette);
        assert_eq!(session.responses.website_type.as_deref(), Some("Blog"));
        assert!(session.responses.color_palette.is_none());
        assert!(session.responses.accent_color.is_none());
        assert!(session.responses.additional_info.is_none());

        match outcome {
            StepOutcome::Ask {
                message,
                suggestions,
                next_step,
            } => {
                assert!(message.contains("background theme"));
                assert_eq!(suggestions, vec!["Dark-Mode", "Light-Mode"]);
                assert_eq!(next_step, 2);
            }
            other => panic!("Expected Ask, got {:?}", other),
        }
    }

    #[test]
    fn test_phase_two_stores_color_palette() {
        let mut session = Session::new();
        advance(&mut session, "Blog");
        let outcome = advance(&mut session, "Dark-Mode");

        assert_eq!(session.phase, Phase::AccentColor);
        assert_eq!(session.responses.color_palette.as_deref(), Some("Dark-Mode"));
        assert!(session.responses.accent_color.is_none());

        match outcome {
            StepOutcome::Ask {
                suggestions,
                next_step,
                ..
            } => {
                assert_eq!(suggestions.len(), ACCENT_COLORS.len());
                assert_eq!(next_step, 3);
            }
            other => panic!("Expected Ask, got {:?}", other),
        }
    }

    #[test]
    fn test_phase_three_free_text_question() {
        let mut session = Session::new();
        advance(&mut session, "Blog");
        advance(&mut session, "Dark-Mode");
        let outcome = advance(&mut session, "Blue");

        assert_eq!(session.phase, Phase::AdditionalInfo);
        assert_eq!(session.responses.accent_color.as_deref(), Some("Blue"));

        match outcome {
            StepOutcome::Ask {
                suggestions,
                next_step,
                ..
            } => {
                assert!(suggestions.is_empty());
                assert_eq!(next_step, 4);
            }
            other => panic!("Expected Ask, got {:?}", other),
        }
    }

    #[test]
    fn test_phase_four_completes_with_full_answers() {
        let mut session = Session::new();
        advance(&mut session, "Blog");
        advance(&mut session, "Dark-Mode");
        advance(&mut session, "Blue");
        let outcome = advance(&mut session, "a blog about birds");

        match outcome {
            StepOutcome::Complete { responses } => {
                assert_eq!(responses.website_type.as_deref(), Some("Blog"));
                assert_eq!(responses.color_palette.as_deref(), Some("Dark-Mode"));
                assert_eq!(responses.accent_color.as_deref(), Some("Blue"));
                assert_eq!(
                    responses.additional_info.as_deref(),
                    Some("a blog about birds")
                );
            }
            other => panic!("Expected Complete, got {:?}", other),
        }
    }

    #[test]
    fn test_responses_contain_only_completed_phases() {
        let mut session = Session::new();
        let answers = ["Webstore", "Light-Mode", "Green", "sells hats"];

        for (k, answer) in answers.iter().enumerate() {
            advance(&mut session, answer);
            let r = &session.responses;
            let filled = [
                r.website_type.is_some(),
                r.color_palette.is_some(),
                r.accent_color.is_some(),
                r.additional_info.is_some(),
            ];
            for (i, present) in filled.iter().enumerate() {
                assert_eq!(*present, i <= k, "field {} after phase {}", i + 1, k + 1);
            }
        }
    }

    #[test]
    fn test_any_input_accepted_verbatim() {
        // No validation against the offered suggestions
        let mut session = Session::new();
        advance(&mut session, "  something entirely different \n");
        assert_eq!(
            session.responses.website_type.as_deref(),
            Some("  something entirely different \n")
        );
    }

    #[test]
    fn test_suggestion_constants() {
        assert_eq!(WEBSITE_TYPES.len(), 5);
        assert_eq!(COLOR_PALETTES.len(), 2);
        assert_eq!(ACCENT_COLORS.len(), 5);
    }
}
