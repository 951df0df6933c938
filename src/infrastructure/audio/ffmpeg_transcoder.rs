use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{TranscodeError, Transcoder};
use crate::domain::SAMPLE_RATE;

/// Runs an `ffmpeg` executable to convert any container it understands into
/// 16-bit PCM WAV.
pub struct FfmpegTranscoder {
    binary: PathBuf,
    output_sample_rate: Option<u32>,
}

impl FfmpegTranscoder {
    pub fn new(binary: impl Into<PathBuf>, output_sample_rate: Option<u32>) -> Self {
        Self {
            binary: binary.into(),
            output_sample_rate,
        }
    }

    /// Returns the first line of `ffmpeg -version`.
    pub async fn check_binary(&self) -> Result<String, TranscodeError> {
        let output = Command::new(&self.binary)
            .arg("-version")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(TranscodeError::Failed(format!(
                "{} -version exited with {}",
                self.binary.display(),
                output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().next().unwrap_or_default().to_string())
    }

    fn spawn_error(&self, e: io::Error) -> TranscodeError {
        if e.kind() == io::ErrorKind::NotFound {
            TranscodeError::ToolNotFound {
                path: self.binary.display().to_string(),
                source: e,
            }
        } else {
            TranscodeError::Io(e)
        }
    }
}

impl Default for FfmpegTranscoder {
    fn default() -> Self {
        Self::new("ffmpeg", Some(SAMPLE_RATE))
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError> {
        let mut command = Command::new(&self.binary);
        command
            .args(["-hide_banner", "-loglevel", "error", "-y", "-i"])
            .arg(input);
        if let Some(rate) = self.output_sample_rate {
            command.arg("-ar").arg(rate.to_string());
        }
        command
            .arg(output)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        tracing::debug!(
            binary = %self.binary.display(),
            input = %input.display(),
            output = %output.display(),
            "Running ffmpeg"
        );

        let result = command.output().await.map_err(|e| self.spawn_error(e))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(TranscodeError::Failed(format!(
                "ffmpeg exited with {}: {}",
                result.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
