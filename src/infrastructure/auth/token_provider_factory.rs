use std::sync::Arc;

use crate::application::ports::{CredentialError, TokenProvider};
use crate::presentation::config::{CredentialProviderSetting, CredentialSettings};

use super::gcloud_token_provider::GcloudTokenProvider;
use super::static_token_provider::StaticTokenProvider;

pub struct TokenProviderFactory;

impl TokenProviderFactory {
    pub fn create(settings: &CredentialSettings) -> Result<Arc<dyn TokenProvider>, CredentialError> {
        match settings.provider {
            CredentialProviderSetting::Gcloud => {
                Ok(Arc::new(GcloudTokenProvider::new(&settings.gcloud_path)))
            }
            CredentialProviderSetting::Static => {
                let token = settings.static_token.clone().ok_or_else(|| {
                    CredentialError::Unavailable("static_token required".to_string())
                })?;
                Ok(Arc::new(StaticTokenProvider::new(token)))
            }
        }
    }
}
