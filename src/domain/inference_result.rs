use serde::{Deserialize, Serialize};

/// Predictions returned by the remote model. The shape is owned by the model,
/// so it is carried as raw JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InferenceResult(pub serde_json::Value);

impl InferenceResult {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    pub fn to_json_string(&self) -> String {
        self.0.to_string()
    }
}
