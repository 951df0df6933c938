use hearken::application::ports::{CredentialError, TokenProvider};
use hearken::infrastructure::auth::{GcloudTokenProvider, StaticTokenProvider, TokenProviderFactory};
use hearken::presentation::config::{CredentialProviderSetting, CredentialSettings};

#[tokio::test]
async fn given_static_token_when_requested_then_returns_trimmed_token() {
    let provider = StaticTokenProvider::new("  ya29.token\n");

    assert_eq!(provider.access_token().await.unwrap(), "ya29.token");
}

#[tokio::test]
async fn given_blank_static_token_when_requested_then_returns_empty_token_error() {
    let provider = StaticTokenProvider::new("   ");

    assert!(matches!(
        provider.access_token().await,
        Err(CredentialError::EmptyToken)
    ));
}

#[tokio::test]
async fn given_missing_gcloud_binary_when_requested_then_returns_unavailable() {
    let provider = GcloudTokenProvider::new("/nonexistent/bin/gcloud-for-tests");

    let err = provider.access_token().await.unwrap_err();

    assert!(matches!(err, CredentialError::Unavailable(_)));
    assert!(err.to_string().contains("failed to get bearer token"));
}

#[tokio::test]
async fn given_static_provider_setting_without_token_when_creating_then_fails() {
    let settings = CredentialSettings {
        provider: CredentialProviderSetting::Static,
        gcloud_path: "gcloud".to_string(),
        static_token: None,
    };

    assert!(TokenProviderFactory::create(&settings).is_err());
}

#[tokio::test]
async fn given_static_provider_setting_when_creating_then_provider_serves_token() {
    let settings = CredentialSettings {
        provider: CredentialProviderSetting::Static,
        gcloud_path: "gcloud".to_string(),
        static_token: Some("configured".to_string()),
    };

    let provider = TokenProviderFactory::create(&settings).unwrap();

    assert_eq!(provider.access_token().await.unwrap(), "configured");
}
