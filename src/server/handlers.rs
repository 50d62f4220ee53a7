//! Endpoint handlers
//!
//! Thin JSON wrappers around the interview, the generation pipeline, and
//! the stored artifacts. Domain errors map to a JSON error body: bad
//! instructions and bad uploads are client errors, everything else is a
//! 500.

use crate::error::SitesmithError;
use crate::generator::edit;
use crate::interview::{self, StepOutcome};
use crate::server::AppState;
use crate::session::Session;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Embedded chat client page
const CHAT_CLIENT: &str = include_str!("../../assets/index.html");

/// Error wrapper converting domain errors into JSON responses
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0.downcast_ref::<SitesmithError>() {
            Some(SitesmithError::Instruction(_)) | Some(SitesmithError::Upload(_)) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!("Request failed: {:#}", self.0);
        (status, Json(json!({ "message": self.0.to_string() }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Inbound chat message
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's answer to the current question
    pub message: String,
    /// Opaque user identifier; generated when the client omits one
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Outbound chat payload
///
/// Field names match what the stepper client expects.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Bot message to display
    pub message: String,
    /// Choice buttons to offer, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    /// 1-based step for the client's progress indicator
    #[serde(rename = "nextStep", skip_serializing_if = "Option::is_none")]
    pub next_step: Option<u8>,
    /// Phase marker (4 = free-text question, 5 = complete)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<u8>,
    /// Link to the generated page, present on completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Echo of the user id so generated clients can keep it
    pub user_id: String,
}

/// `GET /` - the embedded chat client
pub async fn index() -> Html<&'static str> {
    Html(CHAT_CLIENT)
}

/// `POST /chat` - feed one answer into the interview
///
/// An unseen user id starts at phase 1 regardless of the message content.
/// Completing the final phase runs the generation pipeline; the session is
/// cleared either way so the next message starts over.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let user_id = request
        .user_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    tracing::debug!("Received chat message from user {}", user_id);

    let mut session = match state.sessions.get(&user_id).await {
        Some(session) => session,
        None => {
            tracing::debug!("Initializing session for new user: {}", user_id);
            Session::new()
        }
    };

    match interview::advance(&mut session, &request.message) {
        StepOutcome::Ask {
            message,
            suggestions,
            next_step,
        } => {
            let phase = session.phase.number();
            state.sessions.put(&user_id, session).await;
            Ok(Json(ChatResponse {
                message,
                suggestions: if suggestions.is_empty() {
                    None
                } else {
                    Some(suggestions)
                },
                next_step: Some(next_step),
                phase: Some(phase),
                link: None,
                user_id,
            }))
        }
        StepOutcome::Complete { responses } => {
            // Cleared before generation: the next message always restarts
            // at phase 1, even when generation fails.
            state.sessions.remove(&user_id).await;

            state.generator.generate(&responses).await.map_err(|e| {
                tracing::error!("Website generation failed for user {}: {:#}", user_id, e);
                AppError(e)
            })?;

            tracing::info!("Website generated successfully for user {}", user_id);
            Ok(Json(ChatResponse {
                message: "Your website has been generated! You can view it using the \
                          following link: /view_website"
                    .to_string(),
                suggestions: None,
                next_step: None,
                phase: Some(5),
                link: Some("/view_website".to_string()),
                user_id,
            }))
        }
    }
}

/// `GET /view_website` - serve the most recently generated page
pub async fn view_website(State(state): State<AppState>) -> Response {
    let path = state.config.generator.current_site_path();
    match tokio::fs::read_to_string(&path).await {
        Ok(contents) => Html(contents).into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "No website has been generated yet." })),
        )
            .into_response(),
    }
}

/// Inbound edit instruction
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    /// Plain-language instruction, e.g. "change title to My Site"
    pub instruction: String,
}

/// `POST /update_website` - apply an edit instruction to the stored page
pub async fn update_website(
    State(state): State<AppState>,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let instruction = edit::parse_instruction(&request.instruction)?;
    let path = state.config.generator.current_site_path();
    edit::apply_instruction(&path, &instruction)?;
    Ok(Json(json!({ "message": "Website updated." })))
}

/// Inbound image upload
#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    /// User id the image belongs to
    pub user_id: String,
    /// Original filename, used for the stored name's stem
    pub filename: String,
    /// Base64-encoded image bytes
    pub data: String,
}

/// `POST /upload_image` - store an image for use in the generated site
///
/// Decodes and validates the image, writes it under the uploads
/// directory, and records the stored path in the user's session so the
/// pipeline can mention it.
pub async fn upload_image(
    State(state): State<AppState>,
    Json(request): Json<UploadRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(request.data.as_bytes())
        .map_err(|e| SitesmithError::Upload(format!("Invalid base64 data: {}", e)))?;

    let format = image::guess_format(&bytes)
        .map_err(|e| SitesmithError::Upload(format!("Unrecognized image data: {}", e)))?;
    image::load_from_memory_with_format(&bytes, format)
        .map_err(|e| SitesmithError::Upload(format!("Undecodable image data: {}", e)))?;

    let stem = crate::generator::artifacts::slugify(
        std::path::Path::new(&request.filename)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image"),
    );
    let extension = format.extensions_str().first().copied().unwrap_or("bin");
    let stored_name = format!("{}-{}.{}", request.user_id, stem, extension);

    let uploads_dir = &state.config.generator.uploads_dir;
    std::fs::create_dir_all(uploads_dir)?;
    let path = uploads_dir.join(&stored_name);
    std::fs::write(&path, &bytes)?;

    let public_path = format!("/static/uploads/{}", stored_name);
    tracing::info!("Stored uploaded image: {}", path.display());

    let mut session = state
        .sessions
        .get(&request.user_id)
        .await
        .unwrap_or_default();
    session.responses.image_paths.push(public_path.clone());
    state.sessions.put(&request.user_id, session).await;

    Ok(Json(json!({
        "message": "Image uploaded.",
        "path": public_path
    })))
}
