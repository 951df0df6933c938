use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{CredentialError, TokenProvider};

/// Reads an access token from the application-default credentials of the
/// local Google Cloud SDK. A fresh token is requested on every call.
pub struct GcloudTokenProvider {
    binary: PathBuf,
}

impl GcloudTokenProvider {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for GcloudTokenProvider {
    fn default() -> Self {
        Self::new("gcloud")
    }
}

#[async_trait]
impl TokenProvider for GcloudTokenProvider {
    async fn access_token(&self) -> Result<String, CredentialError> {
        let output = Command::new(&self.binary)
            .args(["auth", "application-default", "print-access-token"])
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                CredentialError::Unavailable(format!(
                    "could not run {}: {}. Ensure the Google Cloud SDK is installed",
                    self.binary.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CredentialError::Unavailable(format!(
                "gcloud exited with {}: {}. Ensure you are authenticated",
                output.status,
                stderr.trim()
            )));
        }

        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if token.is_empty() {
            return Err(CredentialError::EmptyToken);
        }

        tracing::debug!("Obtained access token from gcloud");
        Ok(token)
    }
}
