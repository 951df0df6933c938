use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{ResultSink, SinkError, TokenProvider};
use crate::presentation::config::SinkSettings;

use super::sheets_sink::SheetsResultSink;

pub struct ResultSinkFactory;

impl ResultSinkFactory {
    /// Returns `None` when the sink is disabled.
    pub fn create(
        settings: &SinkSettings,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Result<Option<Arc<dyn ResultSink>>, SinkError> {
        if !settings.enabled {
            return Ok(None);
        }

        let spreadsheet_id = settings
            .spreadsheet_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| SinkError::AppendFailed("spreadsheet_id required".to_string()))?;

        let sink = SheetsResultSink::new(
            &settings.api_base_url,
            spreadsheet_id,
            &settings.range,
            token_provider,
            Duration::from_secs(settings.timeout_secs),
        )?;
        Ok(Some(Arc::new(sink)))
    }
}
