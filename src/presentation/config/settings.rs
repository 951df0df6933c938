use config::{Config, ConfigError, File};

use super::Environment;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub audio: AudioSettings,
    pub inference: InferenceSettings,
    pub credentials: CredentialSettings,
    pub sink: SinkSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct AudioSettings {
    pub ffmpeg_path: String,
    pub transcode_sample_rate: Option<u32>,
    pub scratch_dir: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct InferenceSettings {
    pub endpoint_url: String,
    pub required_samples: usize,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct CredentialSettings {
    pub provider: CredentialProviderSetting,
    pub gcloud_path: String,
    pub static_token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialProviderSetting {
    Gcloud,
    Static,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct SinkSettings {
    pub enabled: bool,
    pub spreadsheet_id: Option<String>,
    pub range: String,
    pub api_base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct LoggingSettings {
    pub level: String,
}

impl Settings {
    /// Layers `appsettings.<Environment>.toml` (optional) under `APP_*`
    /// environment variables, e.g. `APP_INFERENCE__ENDPOINT_URL`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.max_body_bytes", 10 * 1024 * 1024)?
            .set_default("audio.ffmpeg_path", "ffmpeg")?
            .set_default(
                "audio.transcode_sample_rate",
                i64::from(crate::domain::SAMPLE_RATE),
            )?
            .set_default(
                "inference.required_samples",
                crate::domain::REQUIRED_SAMPLES as i64,
            )?
            .set_default("credentials.provider", "gcloud")?
            .set_default("credentials.gcloud_path", "gcloud")?
            .set_default("sink.enabled", false)?
            .set_default("sink.range", crate::infrastructure::sink::DEFAULT_SHEET_RANGE)?
            .set_default(
                "sink.api_base_url",
                crate::infrastructure::sink::DEFAULT_SHEETS_API_URL,
            )?
            .set_default(
                "sink.timeout_secs",
                crate::application::services::DEFAULT_SINK_TIMEOUT.as_secs() as i64,
            )?
            .set_default("logging.level", "info")?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
