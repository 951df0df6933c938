use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, method_not_allowed_handler, process_audio_handler,
};
use crate::presentation::state::AppState;

pub const PROCESS_AUDIO_PATH: &str = "/api/v1/process-audio";
/// Path the existing browser client posts to.
pub const LEGACY_PROCESS_AUDIO_PATH: &str = "/.netlify/functions/processAudio";

pub fn create_router(state: AppState, max_body_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let process_audio = post(process_audio_handler).fallback(method_not_allowed_handler);

    Router::new()
        .route("/health", get(health_handler))
        .route(PROCESS_AUDIO_PATH, process_audio.clone())
        .route(LEGACY_PROCESS_AUDIO_PATH, process_audio)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
