use chrono::{DateTime, SecondsFormat, Utc};

use super::inference_result::InferenceResult;

/// One row appended to the result sink. The label column is left blank and
/// filled in by a reviewer later.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub result: String,
    pub label: String,
}

impl LogRecord {
    pub fn new(result: &InferenceResult) -> Self {
        Self::at(Utc::now(), result)
    }

    pub fn at(timestamp: DateTime<Utc>, result: &InferenceResult) -> Self {
        Self {
            timestamp,
            result: result.to_json_string(),
            label: String::new(),
        }
    }

    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn row(&self) -> [String; 3] {
        [self.timestamp_iso(), self.result.clone(), self.label.clone()]
    }
}
