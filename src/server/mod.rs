//! HTTP server for the site interview and generated pages
//!
//! Builds the axum router over a shared application state (session store,
//! generator, configuration) and runs it. Routing, CORS, and tracing
//! layers live here; endpoint logic lives in [`handlers`].

pub mod handlers;

use crate::config::Config;
use crate::error::Result;
use crate::generator::Generator;
use crate::session::SessionStore;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared state injected into every request handler
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<Config>,
    /// Interview session store
    pub sessions: Arc<dyn SessionStore>,
    /// Generation pipeline
    pub generator: Arc<Generator>,
}

/// Builds the application router over the given state
///
/// Static routes serve the stylesheet and upload directories so that the
/// `<link>` references injected by the markup strategy resolve.
pub fn build_router(state: AppState) -> Router {
    let styles_dir = state.config.generator.styles_dir.clone();
    let uploads_dir = state.config.generator.uploads_dir.clone();
    let permissive_cors = state.config.server.permissive_cors;

    let mut router = Router::new()
        .route("/", get(handlers::index))
        .route("/chat", post(handlers::chat))
        .route("/view_website", get(handlers::view_website))
        .route("/update_website", post(handlers::update_website))
        .route("/upload_image", post(handlers::upload_image))
        .nest_service("/static/styles", ServeDir::new(styles_dir))
        .nest_service("/static/uploads", ServeDir::new(uploads_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if permissive_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

/// Binds the configured address and serves requests until shutdown
///
/// # Errors
///
/// Returns error if the address cannot be bound or the server fails
pub async fn run(state: AppState) -> Result<()> {
    let addr = format!(
        "{}:{}",
        state.config.server.host, state.config.server.port
    );
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    let router = build_router(state);
    axum::serve(listener, router).await?;
    Ok(())
}
