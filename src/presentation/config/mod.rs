mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AudioSettings, CredentialProviderSetting, CredentialSettings, InferenceSettings,
    LoggingSettings, ServerSettings, Settings, SinkSettings,
};
