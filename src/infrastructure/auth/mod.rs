mod gcloud_token_provider;
mod static_token_provider;
mod token_provider_factory;

pub use gcloud_token_provider::GcloudTokenProvider;
pub use static_token_provider::StaticTokenProvider;
pub use token_provider_factory::TokenProviderFactory;
