use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use crate::application::ports::{TranscodeError, Transcoder};
use crate::domain::AudioClip;

const SCRATCH_PREFIX: &str = "hearken-transcode-";
const OUTPUT_FILE_NAME: &str = "output.wav";

/// Brings uploads into the decoder's native WAV container.
///
/// Non-native clips are staged in a private scratch directory next to the
/// transcoder output. The directory name is unique per call and the whole
/// directory is removed before `to_native` returns, whatever the outcome.
pub struct FormatBridge {
    transcoder: Arc<dyn Transcoder>,
    scratch_root: Option<PathBuf>,
}

impl FormatBridge {
    pub fn new(transcoder: Arc<dyn Transcoder>, scratch_root: Option<PathBuf>) -> Self {
        Self {
            transcoder,
            scratch_root,
        }
    }

    pub async fn to_native(&self, clip: AudioClip) -> Result<Vec<u8>, TranscodeError> {
        let (bytes, mime_type) = clip.into_parts();

        if mime_type.is_wav() {
            return Ok(bytes);
        }

        let scratch = self.create_scratch_dir()?;
        let input = scratch
            .path()
            .join(format!("input.{}", mime_type.file_extension()));
        let output = scratch.path().join(OUTPUT_FILE_NAME);

        tracing::debug!(
            mime_type = %mime_type,
            bytes = bytes.len(),
            scratch = %scratch.path().display(),
            "Bridging audio to WAV"
        );

        let result = self.transcode_files(&bytes, &input, &output).await;

        let scratch_path = scratch.path().to_path_buf();
        if let Err(e) = scratch.close() {
            tracing::warn!(
                error = %e,
                scratch = %scratch_path.display(),
                "Failed to remove transcoding scratch directory"
            );
        }

        if let Ok(native) = &result {
            tracing::debug!(bytes = native.len(), "Audio bridged to WAV");
        }

        result
    }

    async fn transcode_files(
        &self,
        bytes: &[u8],
        input: &Path,
        output: &Path,
    ) -> Result<Vec<u8>, TranscodeError> {
        tokio::fs::write(input, bytes).await?;
        self.transcoder.transcode(input, output).await?;
        Ok(tokio::fs::read(output).await?)
    }

    fn create_scratch_dir(&self) -> Result<TempDir, TranscodeError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(SCRATCH_PREFIX);
        let dir = match &self.scratch_root {
            Some(root) => builder.tempdir_in(root)?,
            None => builder.tempdir()?,
        };
        Ok(dir)
    }
}
