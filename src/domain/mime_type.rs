use std::fmt;

pub const NATIVE_MIME_TYPE: &str = "audio/wav";

/// Declared media type of an uploaded clip, reduced to its essence
/// (`audio/webm;codecs=opus` becomes `audio/webm`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MimeType(String);

impl MimeType {
    pub fn new(raw: &str) -> Self {
        let essence = raw.split(';').next().unwrap_or_default().trim();
        if essence.is_empty() {
            return Self::native();
        }
        Self(essence.to_ascii_lowercase())
    }

    pub fn native() -> Self {
        Self(NATIVE_MIME_TYPE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wav(&self) -> bool {
        matches!(
            self.0.as_str(),
            "audio/wav" | "audio/x-wav" | "audio/wave" | "audio/vnd.wave"
        )
    }

    /// File extension handed to the transcoder so it can pick a demuxer.
    pub fn file_extension(&self) -> &'static str {
        if self.is_wav() {
            return "wav";
        }
        match self.0.as_str() {
            "audio/webm" | "video/webm" => "webm",
            "audio/ogg" | "audio/opus" => "ogg",
            "audio/mp4" | "audio/m4a" | "audio/x-m4a" | "audio/aac" => "m4a",
            "audio/mpeg" | "audio/mp3" => "mp3",
            "audio/flac" | "audio/x-flac" => "flac",
            _ => "bin",
        }
    }
}

impl Default for MimeType {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
