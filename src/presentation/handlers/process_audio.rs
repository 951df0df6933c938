use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Serialize};

use crate::application::ports::InferenceError;
use crate::application::services::PipelineError;
use crate::domain::{AudioClip, InferenceResult, MimeType};
use crate::presentation::state::AppState;

pub const MISSING_AUDIO_MESSAGE: &str = "No audio data provided.";

/// Standard alphabet, padding optional.
const AUDIO_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessAudioRequest {
    pub audio_base64: Option<String>,
    pub mime_type: Option<String>,
}

#[derive(Serialize)]
pub struct ProcessAudioResponse {
    pub result: InferenceResult,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Status reported to the caller for a failed pipeline run.
pub fn pipeline_error_status(error: &PipelineError) -> StatusCode {
    match error {
        PipelineError::Transcode(_) | PipelineError::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PipelineError::Inference(InferenceError::Auth(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        PipelineError::Inference(_) => StatusCode::BAD_GATEWAY,
    }
}

/// Accepts `audioBase64` either as bare base64 or as a `data:` URL, in which
/// case the URL's media type is used when `mimeType` is absent.
fn parse_clip(request: ProcessAudioRequest) -> Result<AudioClip, String> {
    let audio = request
        .audio_base64
        .filter(|a| !a.trim().is_empty())
        .ok_or_else(|| MISSING_AUDIO_MESSAGE.to_string())?;

    let (encoded, url_mime) = match audio.strip_prefix("data:") {
        Some(rest) => {
            let (header, data) = rest
                .split_once(',')
                .ok_or_else(|| "Malformed data URL in audioBase64.".to_string())?;
            (data.to_string(), Some(header.to_string()))
        }
        None => (audio, None),
    };

    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = AUDIO_BASE64
        .decode(compact.as_bytes())
        .map_err(|e| format!("Invalid base64 audio data: {}", e))?;

    if bytes.is_empty() {
        return Err(MISSING_AUDIO_MESSAGE.to_string());
    }

    let mime_type = request
        .mime_type
        .or(url_mime)
        .map(|m| MimeType::new(&m))
        .unwrap_or_default();

    Ok(AudioClip::new(bytes, mime_type))
}

#[tracing::instrument(skip(state, body))]
pub async fn process_audio_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable process-audio body");
            return error_response(rejection.status(), rejection.body_text());
        }
    };

    let request: ProcessAudioRequest = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed process-audio payload");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid JSON payload: {}", e),
            );
        }
    };

    let clip = match parse_clip(request) {
        Ok(c) => c,
        Err(message) => {
            tracing::warn!(error = %message, "Rejected process-audio request");
            return error_response(StatusCode::BAD_REQUEST, message);
        }
    };

    tracing::debug!(mime_type = %clip.mime_type(), bytes = clip.len(), "Audio clip received");

    match state.embedding_service.process(clip).await {
        Ok(result) => {
            tracing::info!("Audio processed");
            (StatusCode::OK, Json(ProcessAudioResponse { result })).into_response()
        }
        Err(e) => {
            let status = pipeline_error_status(&e);
            tracing::error!(
                error = %e,
                stage = %e.stage(),
                status = status.as_u16(),
                "Audio processing failed"
            );
            error_response(status, e.to_string())
        }
    }
}

pub async fn method_not_allowed_handler() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
