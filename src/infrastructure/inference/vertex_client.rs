use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{InferenceClient, InferenceError, TokenProvider};
use crate::domain::{FixedWaveform, InferenceResult};
use crate::infrastructure::observability::sanitize_for_log;

/// Client for a Vertex AI style `:predict` endpoint that takes raw waveforms
/// under `input_array`.
pub struct VertexInferenceClient {
    client: Client,
    endpoint_url: String,
    token_provider: Arc<dyn TokenProvider>,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    instances: [PredictInstance<'a>; 1],
}

#[derive(Serialize)]
struct PredictInstance<'a> {
    input_array: &'a [f32],
}

#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: serde_json::Value,
}

impl VertexInferenceClient {
    pub fn new(
        endpoint_url: String,
        token_provider: Arc<dyn TokenProvider>,
        timeout: Option<Duration>,
    ) -> Result<Self, InferenceError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| InferenceError::Request(format!("client: {}", e)))?;

        Ok(Self {
            client,
            endpoint_url,
            token_provider,
        })
    }
}

#[async_trait]
impl InferenceClient for VertexInferenceClient {
    async fn predict(&self, waveform: &FixedWaveform) -> Result<InferenceResult, InferenceError> {
        let token = self.token_provider.access_token().await?;

        let request_body = PredictRequest {
            instances: [PredictInstance {
                input_array: waveform.samples(),
            }],
        };

        tracing::debug!(
            endpoint = %self.endpoint_url,
            samples = waveform.len(),
            "Sending waveform to prediction endpoint"
        );

        let response = self
            .client
            .post(&self.endpoint_url)
            .bearer_auth(&token)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| InferenceError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body = %sanitize_for_log(&body),
                "Prediction endpoint returned an error"
            );
            return Err(InferenceError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let predict_response: PredictResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        if predict_response.predictions.is_null() {
            tracing::warn!("Prediction response carried no predictions");
        } else {
            tracing::info!("Prediction completed");
        }

        Ok(InferenceResult::new(predict_response.predictions))
    }
}
