use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Serialize;

use crate::application::ports::{ResultSink, SinkError, TokenProvider};
use crate::domain::LogRecord;

pub const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com";
pub const DEFAULT_SHEET_RANGE: &str = "Sheet1!A:C";

/// Appends `[timestamp, result, label]` rows to a Google Sheet.
pub struct SheetsResultSink {
    client: Client,
    append_url: Url,
    token_provider: Arc<dyn TokenProvider>,
}

#[derive(Serialize)]
struct AppendRequest<'a> {
    values: [&'a [String; 3]; 1],
}

impl SheetsResultSink {
    pub fn new(
        api_base_url: &str,
        spreadsheet_id: &str,
        range: &str,
        token_provider: Arc<dyn TokenProvider>,
        timeout: Duration,
    ) -> Result<Self, SinkError> {
        let mut append_url = Url::parse(api_base_url)
            .map_err(|e| SinkError::AppendFailed(format!("invalid sheets api url: {}", e)))?;

        append_url
            .path_segments_mut()
            .map_err(|_| SinkError::AppendFailed("sheets api url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", spreadsheet_id, "values"])
            .push(&format!("{}:append", range));
        append_url
            .query_pairs_mut()
            .append_pair("valueInputOption", "RAW");

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SinkError::AppendFailed(format!("client: {}", e)))?;

        Ok(Self {
            client,
            append_url,
            token_provider,
        })
    }

    pub fn append_url(&self) -> &Url {
        &self.append_url
    }
}

#[async_trait]
impl ResultSink for SheetsResultSink {
    async fn append(&self, record: &LogRecord) -> Result<(), SinkError> {
        let token = self.token_provider.access_token().await?;
        let row = record.row();
        let request_body = AppendRequest { values: [&row] };

        let response = self
            .client
            .post(self.append_url.clone())
            .bearer_auth(&token)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SinkError::AppendFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SinkError::AppendFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        tracing::debug!(timestamp = %row[0], "Row appended to sheet");
        Ok(())
    }
}
